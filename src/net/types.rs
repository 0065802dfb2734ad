#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

/// A monitoring incident as returned by `GET /api/incidents/`.
///
/// `end_time` is null or absent while the incident is still active;
/// `value` is the offending metric reading as a percentage.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Incident {
    pub id: i64,
    pub machine: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: f64,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

/// Error body the service attaches to non-2xx responses.
#[derive(Debug, serde::Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Failure of a collaborator request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The service answered with a non-success status, optionally carrying
    /// a structured reason.
    Rejected { message: Option<String> },
    /// The service could not be reached, or its response was unreadable.
    Transport(String),
}

impl ApiError {
    /// Text shown to the user, with `fallback` for rejections that carry
    /// no reason.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { message: Some(message) } => message.clone(),
            Self::Rejected { message: None } => fallback.to_owned(),
            Self::Transport(detail) => format!("Error: {detail}"),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected { message: Some(message) } => write!(f, "rejected: {message}"),
            Self::Rejected { message: None } => write!(f, "rejected"),
            Self::Transport(detail) => write!(f, "transport: {detail}"),
        }
    }
}

impl std::error::Error for ApiError {}
