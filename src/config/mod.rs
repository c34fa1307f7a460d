pub mod environment;
pub mod logging;

pub use environment::{Config, ConfigError, LogConfig};
