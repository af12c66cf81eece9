use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /contact`
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct ContactRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,

    #[validate(length(min = 1, max = 5000, message = "Message is required and must be at most 5000 characters"))]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactResponse {
    /// Absent when the backend only returns a message
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}
