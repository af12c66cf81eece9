use crate::api::client::{ApiClient, RequestOptions};
use crate::storage::AUTH_TOKEN_KEY;
use log::{debug, error, info};
use shared::{ApiError, LoginRequest, LoginResponse, LogoutResponse};

/// Drops the stored session when it goes out of scope, however the
/// logout call ended.
struct SessionCleanup<'a> {
    client: &'a ApiClient,
}

impl Drop for SessionCleanup<'_> {
    fn drop(&mut self) {
        self.client.storage().delete(AUTH_TOKEN_KEY);
        self.client.clear_cache();
        info!("Session token cleared");
    }
}

impl ApiClient {
    /// Logs in and persists the returned token, if any.
    /// The full response is returned whether or not it carried a token,
    /// and even when the token could not be written to storage.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        debug!("Attempting login for user: {}", credentials.email);

        let response: LoginResponse = self
            .request("/auth/login", RequestOptions::post().json(credentials)?)
            .await?;

        match response.session_token() {
            Some(token) => {
                match self.storage().set(AUTH_TOKEN_KEY, token) {
                    Ok(()) => info!("Login successful for user: {}", credentials.email),
                    Err(e) => error!("Failed to persist session token: {}", e),
                }
                self.clear_cache();
            }
            None => debug!("Login response carried no token"),
        }

        Ok(response)
    }

    /// Notifies the backend and forgets the local token.
    ///
    /// The token is removed even when the request fails or the future is
    /// dropped before completing; the request's own error is still returned.
    pub async fn logout(&self) -> Result<(), ApiError> {
        debug!("Attempting logout");
        let _cleanup = SessionCleanup { client: self };

        self.request::<Option<LogoutResponse>>("/auth/logout", RequestOptions::post())
            .await
            .map(|_| ())
    }

    pub fn is_authenticated(&self) -> bool {
        self.get_auth_token().is_some()
    }

    pub fn get_auth_token(&self) -> Option<String> {
        self.storage().get(AUTH_TOKEN_KEY)
    }
}
