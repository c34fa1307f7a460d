use crate::modules::homework::model::{HomeworkRecord, HomeworkStatus};
use crate::services::review::ReviewError;

/// Build the notification text for a single homework record.
pub fn parse_status(homework: &HomeworkRecord) -> Result<String, ReviewError> {
    let status = homework
        .status
        .as_deref()
        .ok_or(ReviewError::MissingField("status"))?;

    let homework_name = homework
        .homework_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .ok_or(ReviewError::MissingField("homework_name"))?;

    let verdict = HomeworkStatus::from_code(status)
        .ok_or_else(|| ReviewError::UnrecognizedStatus(status.to_string()))?
        .verdict();

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        homework_name, verdict
    ))
}
