use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request for administrator login
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Response of `POST /auth/login`.
///
/// A missing or empty `token` means the login did not establish a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserDto>,
}

impl LoginResponse {
    /// The bearer token, ignoring empty strings.
    pub fn session_token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UserDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Response of `POST /auth/logout`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LogoutResponse {
    #[serde(default)]
    pub message: Option<String>,
}
