use serde::{Deserialize, Deserializer};
use serde_json::Value;

// =============================================================================
// STATUS CATALOG
// =============================================================================

/// Review status codes reported by the homework API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub const ALL: [HomeworkStatus; 3] = [Self::Approved, Self::Reviewing, Self::Rejected];

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Human-readable verdict sent to the recipient
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

// =============================================================================
// API PAYLOAD
// =============================================================================

/// One submission as returned by the API.
///
/// Decoding never fails on field types: text fields of the wrong type read as
/// absent, and a non-string `status` keeps its JSON text so it is reported as an
/// unrecognized code rather than a missing one.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HomeworkRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub homework_name: Option<String>,
    #[serde(default, deserialize_with = "status_code")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub lesson_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub reviewer_comment: Option<String>,
}

impl HomeworkRecord {
    pub fn new(homework_name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            homework_name: Some(homework_name.into()),
            status: Some(status.into()),
            ..Default::default()
        }
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        _ => None,
    })
}

fn status_code<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(code) => Some(code),
        other => Some(other.to_string()),
    })
}

/// Decoded body of one `homework_statuses` query.
///
/// Records stay raw: only the newest one is ever interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// Most recent first
    pub homeworks: Vec<Value>,
    pub current_date: Option<i64>,
}
