use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::models::config::EnhanceConfiguration;
use crate::models::error::EnhanceError;
use crate::models::frame::Frame;
use crate::models::session_summary::SessionSummary;
use crate::models::state::EnhancerState;
use crate::models::video_models::SessionDiagnostics;
use crate::processing;
use crate::traits::config_store::ConfigStore;
use crate::traits::enhance_delegate::EnhanceDelegate;
use crate::traits::enhance_session::EnhanceSession;
use crate::traits::frame_sink::FrameSink;
use crate::traits::frame_source::FrameSource;

/// Internal mutable loop state, protected by `parking_lot::Mutex` so the
/// host can read status and diagnostics while ticks run.
struct LoopState {
    state: EnhancerState,
    diagnostics: SessionDiagnostics,
    run_started: Option<Instant>,
    run_started_wall: Option<chrono::DateTime<chrono::Utc>>,
    paused_duration: Duration,
    last_pause_time: Option<Instant>,
}

impl LoopState {
    fn new() -> Self {
        Self {
            state: EnhancerState::Idle,
            diagnostics: SessionDiagnostics::default(),
            run_started: None,
            run_started_wall: None,
            paused_duration: Duration::ZERO,
            last_pause_time: None,
        }
    }

    fn elapsed_duration(&self) -> f64 {
        let Some(start) = self.run_started else {
            return 0.0;
        };
        let mut paused = self.paused_duration;
        if let Some(pause_start) = self.last_pause_time {
            paused += pause_start.elapsed();
        }
        start.elapsed().saturating_sub(paused).as_secs_f64()
    }
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing to do: enhancement inactive, paused, or in error fallback.
    Skipped,
    /// Waiting for the source to become ready or deliver the next frame.
    AwaitingSource,
    /// One frame enhanced and published.
    Enhanced,
    /// The source ended; the loop returned to idle.
    SourceEnded,
    /// A failure was contained: the raw frame (when one had been pulled)
    /// was handed through and the loop moved to error fallback.
    FellBack,
}

/// Drives the per-frame enhancement cycle: pull → statistics → parameters →
/// transform → publish, one frame per display-refresh tick.
///
/// Generic over the frame source and sink backends via the `FrameSource`
/// and `FrameSink` traits. The session owns all lifecycle state and every
/// scheduling decision; the processing stages it calls are pure functions
/// over their inputs.
///
/// ```text
/// [FrameSource] → [statistics] → [resolver] → [transform] → [FrameSink]
///                       ↑ one EnhanceConfiguration snapshot per tick
/// ```
///
/// The host calls [`tick`](Self::tick) once per display refresh. A tick is
/// synchronous end to end, so ticks never overlap and the single in-flight
/// frame passes linearly through the pipeline without locking.
pub struct EnhancementSession<Src: FrameSource, Snk: FrameSink> {
    source: Src,
    sink: Snk,
    config_store: Arc<dyn ConfigStore>,
    loop_state: Arc<Mutex<LoopState>>,
    delegate: Option<Arc<dyn EnhanceDelegate>>,
}

impl<Src: FrameSource, Snk: FrameSink> EnhancementSession<Src, Snk> {
    pub fn new(source: Src, sink: Snk, config_store: Arc<dyn ConfigStore>) -> Self {
        Self {
            source,
            sink,
            config_store,
            loop_state: Arc::new(Mutex::new(LoopState::new())),
            delegate: None,
        }
    }

    pub fn set_delegate(&mut self, delegate: Arc<dyn EnhanceDelegate>) {
        self.delegate = Some(delegate);
    }

    pub fn state(&self) -> EnhancerState {
        self.loop_state.lock().state.clone()
    }

    pub fn diagnostics(&self) -> SessionDiagnostics {
        self.loop_state.lock().diagnostics.clone()
    }

    /// The frame source backend.
    pub fn source(&self) -> &Src {
        &self.source
    }

    /// The frame sink backend.
    pub fn sink(&self) -> &Snk {
        &self.sink
    }

    /// Run one enhancement cycle. Call once per display refresh.
    ///
    /// Reads a single configuration snapshot, then acts on the current
    /// state: idle ticks poll for readiness, running ticks process exactly
    /// one frame, paused and fallback ticks do nothing. Failures never
    /// propagate out of a tick — the loop contains them by falling back to
    /// the unprocessed stream.
    pub fn tick(&mut self) -> TickOutcome {
        let tick_started = Instant::now();
        let config = self.config_store.snapshot();

        let outcome = match self.state() {
            EnhancerState::Paused { .. } => {
                if !config.enhancement_active() {
                    log::info!("enhancement disabled while paused; loop returning to idle");
                    self.set_state(EnhancerState::Idle);
                }
                TickOutcome::Skipped
            }
            EnhancerState::ErrorFallback(_) => TickOutcome::Skipped,
            EnhancerState::Idle => self.tick_idle(&config),
            EnhancerState::Running { .. } => self.tick_running(&config),
        };

        let mut s = self.loop_state.lock();
        s.diagnostics.ticks += 1;
        s.diagnostics.last_tick_micros = tick_started.elapsed().as_micros() as u64;
        outcome
    }

    /// Pause the loop. Transitions: running → paused.
    pub fn pause(&mut self) -> Result<(), EnhanceError> {
        let frames = match self.state() {
            EnhancerState::Running { frames_enhanced } => frames_enhanced,
            _ => {
                return Err(EnhanceError::Configuration(
                    "can only pause while running".into(),
                ))
            }
        };

        self.loop_state.lock().last_pause_time = Some(Instant::now());
        self.set_state(EnhancerState::Paused {
            frames_enhanced: frames,
        });
        Ok(())
    }

    /// Resume the loop. Transitions: paused → running.
    pub fn resume(&mut self) -> Result<(), EnhanceError> {
        let frames = match self.state() {
            EnhancerState::Paused { frames_enhanced } => frames_enhanced,
            _ => {
                return Err(EnhanceError::Configuration(
                    "can only resume while paused".into(),
                ))
            }
        };

        {
            let mut s = self.loop_state.lock();
            if let Some(pause_start) = s.last_pause_time.take() {
                s.paused_duration += pause_start.elapsed();
            }
        }
        self.set_state(EnhancerState::Running {
            frames_enhanced: frames,
        });
        Ok(())
    }

    /// Clear an error fallback so the loop may start again.
    /// Transitions: error fallback → idle.
    pub fn reset(&mut self) -> Result<(), EnhanceError> {
        if !self.state().is_fallback() {
            return Err(EnhanceError::Configuration(
                "can only reset from error fallback".into(),
            ));
        }
        self.set_state(EnhancerState::Idle);
        Ok(())
    }

    /// Stop the loop from any state and summarize the run. Resets the
    /// session so a fresh run can start on a later tick.
    pub fn stop(&mut self) -> SessionSummary {
        let config = self.config_store.snapshot();

        let summary = {
            let mut s = self.loop_state.lock();
            let summary = SessionSummary::from_run(
                s.run_started_wall,
                s.elapsed_duration(),
                &s.diagnostics,
                config,
            );
            *s = LoopState::new();
            summary
        };

        log::info!(
            "enhancement session stopped after {} enhanced frames",
            summary.frames_enhanced
        );
        if let Some(ref delegate) = self.delegate {
            delegate.on_state_changed(&EnhancerState::Idle);
        }
        summary
    }

    // --- Internal helpers ---

    fn tick_idle(&mut self, config: &EnhanceConfiguration) -> TickOutcome {
        if !config.enhancement_active() {
            return TickOutcome::Skipped;
        }

        if let Err(reason) = config.validate() {
            // An out-of-domain snapshot refuses to start; no clamping.
            log::warn!("refusing to start enhancement: {reason}");
            if let Some(ref delegate) = self.delegate {
                delegate.on_error(&EnhanceError::Configuration(reason));
            }
            return TickOutcome::Skipped;
        }

        if !self.source.is_ready() {
            // Not an error: retry on every refresh until the source has
            // decoded its first frame or enhancement is disabled.
            self.loop_state.lock().diagnostics.source_not_ready_ticks += 1;
            return TickOutcome::AwaitingSource;
        }

        if let Some((width, height)) = self.source.dimensions() {
            log::info!("enhancement loop starting at {width}x{height}");
        }
        {
            let mut s = self.loop_state.lock();
            s.run_started = Some(Instant::now());
            s.run_started_wall = Some(chrono::Utc::now());
            s.paused_duration = Duration::ZERO;
            s.last_pause_time = None;
        }
        self.set_state(EnhancerState::Running { frames_enhanced: 0 });

        // The source is ready, so the first running tick is this one.
        self.tick_running(config)
    }

    fn tick_running(&mut self, config: &EnhanceConfiguration) -> TickOutcome {
        if !config.enhancement_active() {
            log::info!("enhancement disabled; loop returning to idle");
            self.set_state(EnhancerState::Idle);
            return TickOutcome::Skipped;
        }

        if let Err(reason) = config.validate() {
            return self.fall_back(EnhanceError::Configuration(reason), None);
        }

        let mut frame = match self.source.next_frame() {
            Ok(Some(frame)) => frame,
            Ok(None) => {
                log::info!("frame source ended; loop returning to idle");
                self.set_state(EnhancerState::Idle);
                return TickOutcome::SourceEnded;
            }
            Err(EnhanceError::SourceNotReady) => {
                self.loop_state.lock().diagnostics.source_not_ready_ticks += 1;
                return TickOutcome::AwaitingSource;
            }
            Err(err) => return self.fall_back(err, None),
        };

        match processing::enhance_in_place(&mut frame, config) {
            Ok(params) => {
                if let Err(err) = self.sink.publish(frame) {
                    return self.fall_back(err, None);
                }

                {
                    let mut s = self.loop_state.lock();
                    s.diagnostics.frames_enhanced += 1;
                    // Update the counter without a delegate round-trip;
                    // only real transitions notify.
                    let frames = s.state.frames_enhanced().unwrap_or(0) + 1;
                    s.state = EnhancerState::Running {
                        frames_enhanced: frames,
                    };
                }

                if let (Some(delegate), Some(params)) = (&self.delegate, params.as_ref()) {
                    delegate.on_frame_enhanced(params);
                }
                TickOutcome::Enhanced
            }
            Err(err) => {
                // The pipeline validates before it mutates, so the frame is
                // still the raw capture: hand it through.
                self.fall_back(err, Some(frame))
            }
        }
    }

    /// Contain a failure: publish the raw frame when one is in hand, log,
    /// notify, and stop the loop in the error-fallback state.
    fn fall_back(&mut self, err: EnhanceError, raw: Option<Frame>) -> TickOutcome {
        if let Some(frame) = raw {
            match self.sink.publish(frame) {
                Ok(()) => {
                    self.loop_state.lock().diagnostics.frames_passed_through += 1;
                }
                Err(publish_err) => {
                    log::error!("failed to hand through raw frame: {publish_err}");
                }
            }
        }

        log::error!("enhancement failed, falling back to unprocessed stream: {err}");
        self.loop_state.lock().diagnostics.fallback_count += 1;

        if let Some(ref delegate) = self.delegate {
            delegate.on_error(&err);
        }
        self.set_state(EnhancerState::ErrorFallback(err));
        TickOutcome::FellBack
    }

    fn set_state(&self, new_state: EnhancerState) {
        {
            let mut s = self.loop_state.lock();
            s.state = new_state.clone();
        }
        if let Some(ref delegate) = self.delegate {
            delegate.on_state_changed(&new_state);
        }
    }
}

impl<Src: FrameSource, Snk: FrameSink> EnhanceSession for EnhancementSession<Src, Snk> {
    fn state(&self) -> EnhancerState {
        EnhancementSession::state(self)
    }

    fn diagnostics(&self) -> SessionDiagnostics {
        EnhancementSession::diagnostics(self)
    }

    fn tick(&mut self) -> TickOutcome {
        EnhancementSession::tick(self)
    }

    fn pause(&mut self) -> Result<(), EnhanceError> {
        EnhancementSession::pause(self)
    }

    fn resume(&mut self) -> Result<(), EnhanceError> {
        EnhancementSession::resume(self)
    }

    fn reset(&mut self) -> Result<(), EnhanceError> {
        EnhancementSession::reset(self)
    }

    fn stop(&mut self) -> SessionSummary {
        EnhancementSession::stop(self)
    }
}
