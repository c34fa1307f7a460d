pub mod model;

pub use model::{HomeworkRecord, HomeworkStatus};
