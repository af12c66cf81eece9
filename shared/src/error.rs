use log::error;
use serde::{Deserialize, Serialize};
use serde_json::Error as JsonError;
use thiserror::Error;

pub const MSG_NOT_FOUND: &str = "Resource not found";
pub const MSG_INTERNAL: &str = "Internal server error";
pub const MSG_FORBIDDEN: &str = "You do not have permission to perform this action";
pub const MSG_UNAUTHENTICATED: &str = "You are not authenticated";
pub const MSG_CONNECTION: &str = "Connection error. Check your internet connection.";

/// Failure of a single API call.
///
/// `Http` covers non-2xx responses; every other variant is a transport,
/// decoding or local persistence failure surfaced unchanged.
#[derive(Debug, Clone, Error, PartialEq, Serialize, Deserialize)]
pub enum ApiError {
    /// The server answered with a status outside 200..=299.
    /// `message` holds the server's own error text when the body carried one.
    #[error("HTTP error! status: {status}")]
    Http {
        status: u16,
        message: Option<String>,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server supplied detail for HTTP failures, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<JsonError> for ApiError {
    fn from(error: JsonError) -> Self {
        Self::Serialization(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

fn message_for_status(status: u16) -> Option<&'static str> {
    match status {
        404 => Some(MSG_NOT_FOUND),
        500 => Some(MSG_INTERNAL),
        403 => Some(MSG_FORBIDDEN),
        401 => Some(MSG_UNAUTHENTICATED),
        _ => None,
    }
}

/// Translates a failed call into the fixed user-facing message the UI shows.
///
/// HTTP failures are looked up by status. Anything else is scanned for an
/// embedded status code in its text, checked in the order 404, 500, 403, 401.
pub fn handle_api_error(err: &ApiError) -> &'static str {
    error!("API Error: {}", err);

    if let Some(msg) = err.status().and_then(message_for_status) {
        return msg;
    }

    let text = err.to_string();
    [404u16, 500, 403, 401]
        .iter()
        .find(|code| text.contains(&code.to_string()))
        .and_then(|code| message_for_status(*code))
        .unwrap_or(MSG_CONNECTION)
}
