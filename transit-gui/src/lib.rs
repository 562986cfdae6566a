pub mod app;
pub mod config;
pub mod dir;
pub mod error;
pub mod logger;
pub mod transit;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
