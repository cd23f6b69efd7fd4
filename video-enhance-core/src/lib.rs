//! # video-enhance-core
//!
//! Platform-agnostic low-light video enhancement core library.
//!
//! Consumes a sequence of raw RGBA frames from a capture adapter, brightens
//! and color-corrects each one in real time, and hands it to a display or
//! record surface — one frame per display-refresh tick. Platform-specific
//! frame sources implement the `FrameSource` trait and plug into the generic
//! `EnhancementSession`; deterministic synthetic sources for tests, demos,
//! and benchmarks live in the `video-enhance-synth` crate.
//!
//! ## Architecture
//!
//! ```text
//! video-enhance-core (this crate)
//! ├── traits/       ← FrameSource, FrameSink, ConfigStore, EnhanceDelegate, EnhanceSession
//! ├── models/       ← Frame, EnhanceConfiguration, EnhanceError, EnhancerState, statistics
//! ├── processing/   ← statistics estimator, parameter resolver, pixel transform
//! └── session/      ← EnhancementSession (per-tick loop orchestrator)
//! ```

pub mod models;
pub mod processing;
pub mod session;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use models::config::{EnhanceConfiguration, ExposureMode, IsoSetting, WhiteBalanceMode};
pub use models::error::EnhanceError;
pub use models::frame::{Frame, BYTES_PER_PIXEL};
pub use models::session_summary::SessionSummary;
pub use models::state::EnhancerState;
pub use models::video_models::{FrameStatistics, SessionDiagnostics, StatsRequest};
pub use processing::params::EnhancementParams;
pub use session::enhancer::{EnhancementSession, TickOutcome};
pub use traits::config_store::{ConfigStore, SharedConfigStore};
pub use traits::enhance_delegate::EnhanceDelegate;
pub use traits::enhance_session::EnhanceSession;
pub use traits::frame_sink::FrameSink;
pub use traits::frame_source::FrameSource;
