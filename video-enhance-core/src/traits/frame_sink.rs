use crate::models::error::EnhanceError;
use crate::models::frame::Frame;

/// Interface to the external display/record surface that receives frames
/// from the enhancement loop.
pub trait FrameSink: Send {
    /// Deliver one enhanced frame — or, on the error-fallback path, the
    /// unprocessed raw frame. Frames arrive in capture order and ownership
    /// of the buffer transfers to the sink.
    fn publish(&mut self, frame: Frame) -> Result<(), EnhanceError>;
}
