use std::time::Duration;

use crate::services::monitor::{CycleOutcome, PollError};
use crate::services::practicum::HomeworkApi;
use crate::services::review::{
    check_response, decode_response, parse_record, parse_status, ReviewError,
};
use crate::services::telegram::Notifier;

/// Polls the homework API and forwards the newest status change to a chat.
///
/// Each cycle runs fetch → validate → format → notify. Any failure is logged and
/// the engine sleeps for `retry_interval` before the next cycle either way.
pub struct MonitorEngine<A, N> {
    api: A,
    notifier: N,
    chat_id: String,
    retry_interval: Duration,
    /// Lower bound (`from_date`) of the next query window
    cursor: i64,
}

impl<A: HomeworkApi, N: Notifier> MonitorEngine<A, N> {
    /// `start_timestamp` seeds the cursor; `None` starts the window at now.
    pub fn new(
        api: A,
        notifier: N,
        chat_id: String,
        retry_interval: Duration,
        start_timestamp: Option<i64>,
    ) -> Self {
        let cursor = start_timestamp.unwrap_or_else(|| chrono::Utc::now().timestamp());
        Self {
            api,
            notifier,
            chat_id,
            retry_interval,
            cursor,
        }
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Start the polling loop. Never returns; stop it by dropping the future.
    pub async fn run(mut self) {
        loop {
            self.poll_once().await;
            tokio::time::sleep(self.retry_interval).await;
        }
    }

    /// Run one cycle and log how it ended. Errors never escape.
    pub async fn poll_once(&mut self) -> CycleOutcome {
        let outcome = match self.process_cycle().await {
            Ok(message) => CycleOutcome::Notified(message),
            Err(PollError::Review(ReviewError::EmptyHomeworkList)) => CycleOutcome::NothingNew,
            Err(e) => CycleOutcome::Failed(e),
        };

        match &outcome {
            CycleOutcome::Notified(message) => {
                tracing::info!("✅ Notification sent: {}", message);
            }
            CycleOutcome::NothingNew => {
                tracing::debug!("Homework list is empty, nothing new since {}", self.cursor);
            }
            CycleOutcome::Failed(e) => {
                tracing::error!("❌ Polling cycle failed: {}", e);
            }
        }

        outcome
    }

    async fn process_cycle(&mut self) -> Result<String, PollError> {
        tracing::debug!("Requesting homework statuses from_date={}", self.cursor);
        let body = self.api.fetch(self.cursor).await?;

        let response = decode_response(&body)?;
        // The window moves forward for any well-formed body, even when nothing
        // below ends up being sent.
        self.advance_cursor(response.current_date);

        let homeworks = check_response(&response)?;
        if homeworks.len() > 1 {
            tracing::debug!("Ignoring {} older homework records", homeworks.len() - 1);
        }

        let latest = parse_record(&homeworks[0])?;
        if let Some(lesson) = latest.lesson_name.as_deref() {
            tracing::debug!("Latest homework belongs to lesson {}", lesson);
        }
        if let Some(comment) = latest.reviewer_comment.as_deref().filter(|c| !c.is_empty()) {
            tracing::debug!("Reviewer comment: {}", comment);
        }

        let message = parse_status(&latest)?;
        self.notifier.notify(&self.chat_id, &message).await?;

        Ok(message)
    }

    fn advance_cursor(&mut self, current_date: Option<i64>) {
        match current_date {
            Some(date) => {
                if date < self.cursor {
                    tracing::warn!(
                        "Server current_date {} is behind cursor {}",
                        date,
                        self.cursor
                    );
                }
                self.cursor = date;
            }
            None => {
                tracing::warn!("Response has no current_date, keeping cursor at {}", self.cursor);
            }
        }
    }
}
