use thiserror::Error;

/// Errors that can occur during video enhancement.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnhanceError {
    /// An out-of-domain configuration value reached the core. The session
    /// refuses to start (or stops) rather than silently clamping.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The frame source has no decodable frame yet. Transient: recovered by
    /// retrying on the next tick, never surfaced to the host as a failure.
    #[error("frame source not ready")]
    SourceNotReady,

    /// Reading or writing pixel data failed for the current frame.
    #[error("frame processing failed: {0}")]
    FrameProcessing(String),
}
