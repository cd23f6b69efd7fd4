//! # video-enhance-synth
//!
//! Synthetic frame sources and sinks for the video enhancement core.
//!
//! Provides:
//! - `PatternSource` — deterministic test-pattern frame generator
//! - `CollectingSink` — retains every published frame for inspection
//! - `NullSink` — counts and discards published frames
//!
//! Useful for integration tests, soak runs, and demos that exercise the
//! enhancement loop without a capture device.
//!
//! ## Usage
//! ```ignore
//! use std::sync::Arc;
//! use video_enhance_core::{EnhanceConfiguration, EnhancementSession, SharedConfigStore};
//! use video_enhance_synth::{CollectingSink, Pattern, PatternSource};
//!
//! let source = PatternSource::new(640, 480, Pattern::Uniform([40, 40, 40, 255]));
//! let store = Arc::new(SharedConfigStore::new(EnhanceConfiguration::low_light()));
//! let mut session = EnhancementSession::new(source, CollectingSink::default(), store);
//! session.tick();
//! ```

pub mod pattern_source;
pub mod sinks;

pub use pattern_source::{Pattern, PatternSource};
pub use sinks::{CollectingSink, NullSink};
