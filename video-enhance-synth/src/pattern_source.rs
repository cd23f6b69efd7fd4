use std::cell::Cell;

use video_enhance_core::{EnhanceError, Frame, FrameSource};

/// Test pattern shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Every pixel the same RGBA value.
    Uniform([u8; 4]),
    /// Gray ramp from black at the left edge to white at the right.
    HorizontalGradient,
    /// Two alternating RGBA values in square cells.
    Checkerboard {
        cell: u32,
        a: [u8; 4],
        b: [u8; 4],
    },
}

/// Deterministic frame generator implementing [`FrameSource`].
///
/// Reports not-ready for a configurable number of warm-up polls — each
/// readiness check counts one down — which exercises the session's
/// retry-until-ready path the way a camera that is still negotiating its
/// stream would. Once ready it renders identical pattern frames until the
/// optional frame limit is reached, at which point the stream ends.
#[derive(Debug)]
pub struct PatternSource {
    width: u32,
    height: u32,
    pattern: Pattern,
    warmup_remaining: Cell<u32>,
    frames_delivered: u64,
    frame_limit: Option<u64>,
}

impl PatternSource {
    pub fn new(width: u32, height: u32, pattern: Pattern) -> Self {
        Self {
            width,
            height,
            pattern,
            warmup_remaining: Cell::new(0),
            frames_delivered: 0,
            frame_limit: None,
        }
    }

    /// Report not-ready for the first `ticks` readiness polls.
    pub fn with_warmup(mut self, ticks: u32) -> Self {
        self.warmup_remaining = Cell::new(ticks);
        self
    }

    /// End the stream after `count` frames.
    pub fn with_frame_limit(mut self, count: u64) -> Self {
        self.frame_limit = Some(count);
        self
    }

    pub fn frames_delivered(&self) -> u64 {
        self.frames_delivered
    }

    fn render(&self) -> Frame {
        match self.pattern {
            Pattern::Uniform(rgba) => Frame::filled(self.width, self.height, rgba),
            Pattern::HorizontalGradient => {
                let mut data =
                    Vec::with_capacity(self.width as usize * self.height as usize * 4);
                for _y in 0..self.height {
                    for x in 0..self.width {
                        let v = if self.width > 1 {
                            (x * 255 / (self.width - 1)) as u8
                        } else {
                            0
                        };
                        data.extend_from_slice(&[v, v, v, 255]);
                    }
                }
                Frame {
                    width: self.width,
                    height: self.height,
                    data,
                }
            }
            Pattern::Checkerboard { cell, a, b } => {
                let cell = cell.max(1);
                let mut data =
                    Vec::with_capacity(self.width as usize * self.height as usize * 4);
                for y in 0..self.height {
                    for x in 0..self.width {
                        let rgba = if ((x / cell) + (y / cell)) % 2 == 0 { a } else { b };
                        data.extend_from_slice(&rgba);
                    }
                }
                Frame {
                    width: self.width,
                    height: self.height,
                    data,
                }
            }
        }
    }
}

impl FrameSource for PatternSource {
    fn is_ready(&self) -> bool {
        let remaining = self.warmup_remaining.get();
        if remaining > 0 {
            self.warmup_remaining.set(remaining - 1);
            return false;
        }
        true
    }

    fn dimensions(&self) -> Option<(u32, u32)> {
        (self.warmup_remaining.get() == 0).then_some((self.width, self.height))
    }

    fn next_frame(&mut self) -> Result<Option<Frame>, EnhanceError> {
        if self.warmup_remaining.get() > 0 {
            return Err(EnhanceError::SourceNotReady);
        }
        if let Some(limit) = self.frame_limit {
            if self.frames_delivered >= limit {
                log::debug!("pattern source reached its {limit}-frame limit");
                return Ok(None);
            }
        }
        self.frames_delivered += 1;
        Ok(Some(self.render()))
    }
}
