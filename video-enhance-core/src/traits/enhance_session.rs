use crate::models::error::EnhanceError;
use crate::models::session_summary::SessionSummary;
use crate::models::state::EnhancerState;
use crate::models::video_models::SessionDiagnostics;
use crate::session::enhancer::TickOutcome;

/// Main enhancement session interface.
///
/// Lets hosts hold a type-erased session; `EnhancementSession` is the
/// provided implementation, generic over its frame source and sink.
pub trait EnhanceSession: Send {
    /// Current loop state.
    fn state(&self) -> EnhancerState;

    /// Current session counters.
    fn diagnostics(&self) -> SessionDiagnostics;

    /// Run one enhancement cycle. Call once per display refresh.
    fn tick(&mut self) -> TickOutcome;

    /// Pause the loop. Transitions: running → paused.
    fn pause(&mut self) -> Result<(), EnhanceError>;

    /// Resume the loop. Transitions: paused → running.
    fn resume(&mut self) -> Result<(), EnhanceError>;

    /// Clear an error fallback so the loop may start again.
    /// Transitions: error fallback → idle.
    fn reset(&mut self) -> Result<(), EnhanceError>;

    /// Stop the loop from any state and summarize the run.
    fn stop(&mut self) -> SessionSummary;
}
