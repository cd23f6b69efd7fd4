use crate::models::error::EnhanceError;
use crate::models::frame::Frame;

/// Interface to the external capture surface that supplies raw frames.
///
/// Implemented by platform capture adapters (camera, screen) and by the
/// synthetic sources in `video-enhance-synth`.
pub trait FrameSource: Send {
    /// Whether the source can deliver frames: dimensions are known and the
    /// first frame has been decoded. The session polls this once per tick
    /// while idle instead of failing.
    fn is_ready(&self) -> bool;

    /// Frame dimensions, once known.
    fn dimensions(&self) -> Option<(u32, u32)>;

    /// Pull the next raw frame. Ownership of the buffer transfers to the
    /// caller.
    ///
    /// - `Ok(Some(frame))` — the frame to enhance this tick. Sources hand
    ///   back their most recent capture; the session never reorders.
    /// - `Ok(None)` — the stream has ended (source torn down).
    /// - `Err(EnhanceError::SourceNotReady)` — transient; the session
    ///   retries on the next tick.
    /// - Any other error aborts the loop into error fallback.
    fn next_frame(&mut self) -> Result<Option<Frame>, EnhanceError>;
}
