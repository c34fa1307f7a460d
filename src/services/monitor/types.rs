use crate::services::practicum::FetchError;
use crate::services::review::ReviewError;
use crate::services::telegram::NotifyError;

/// Any failure inside one polling cycle
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PollError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Review(#[from] ReviewError),
    #[error(transparent)]
    Notify(#[from] NotifyError),
}

/// Result of a single polling cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The newest status change was delivered with this text
    Notified(String),
    /// The API reported no homework in the query window
    NothingNew,
    Failed(PollError),
}

impl CycleOutcome {
    pub fn is_notified(&self) -> bool {
        matches!(self, CycleOutcome::Notified(_))
    }
}
