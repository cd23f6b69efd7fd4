use crate::models::error::EnhanceError;
use crate::models::state::EnhancerState;
use crate::processing::params::EnhancementParams;

/// Event delegate for enhancement session notifications.
///
/// All methods are called synchronously from inside `tick()`; marshal to the
/// UI thread if needed and return quickly — the tick budget is shared.
pub trait EnhanceDelegate: Send + Sync {
    /// Called when the loop state changes.
    fn on_state_changed(&self, state: &EnhancerState);

    /// Called after each enhanced frame with the factors that were applied.
    fn on_frame_enhanced(&self, params: &EnhancementParams);

    /// Called when a stage fails and the loop falls back to passthrough.
    fn on_error(&self, error: &EnhanceError);
}
