/// Failures while interpreting a homework API payload
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReviewError {
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    #[error("Homework list is empty")]
    EmptyHomeworkList,
    #[error("Homework record is missing field '{0}'")]
    MissingField(&'static str),
    #[error("Unrecognized homework status: {0:?}")]
    UnrecognizedStatus(String),
}
