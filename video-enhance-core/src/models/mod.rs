pub mod config;
pub mod error;
pub mod frame;
pub mod session_summary;
pub mod state;
pub mod video_models;
