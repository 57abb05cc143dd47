//! CLI command handlers. Each returns the text to print so it can be tested.

mod build;
mod config;
mod decode;
mod schemes;

pub use build::run_build;
pub use config::run_config;
pub use decode::run_decode;
pub use schemes::run_schemes;
