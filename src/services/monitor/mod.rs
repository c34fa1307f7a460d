pub mod engine;
pub mod types;

pub use engine::MonitorEngine;
pub use types::{CycleOutcome, PollError};
