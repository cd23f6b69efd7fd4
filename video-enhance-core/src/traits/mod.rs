pub mod config_store;
pub mod enhance_delegate;
pub mod enhance_session;
pub mod frame_sink;
pub mod frame_source;
