use crate::api::cache::RequestCache;
use crate::api::transport::{GlooTransport, HttpMethod, HttpRequest, HttpTransport};
use crate::config::{join_url, AppConfig};
use crate::storage::{KeyValueStorage, LocalStorageBackend, AUTH_TOKEN_KEY};
use log::{debug, error};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{ApiError, ErrorResponse};
use std::rc::Rc;
use std::time::Duration;

/// Per-call overrides for [`ApiClient::request`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: HttpMethod,
    /// Applied after the defaults; a header with the same name replaces the default
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post() -> Self {
        Self {
            method: HttpMethod::Post,
            ..Self::default()
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Serializes `body` as the JSON request payload
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_string(body)?);
        Ok(self)
    }
}

/// Client for the portfolio backend.
///
/// One instance is built at startup from the resolved [`AppConfig`] and
/// shared by reference. The base URL comes from `config.api.base_url` and
/// nowhere else.
pub struct ApiClient {
    base_url: String,
    transport: Rc<dyn HttpTransport>,
    storage: Rc<dyn KeyValueStorage>,
    default_headers: Vec<(String, String)>,
    cache: Option<RequestCache>,
    log_errors: bool,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("default_headers", &self.default_headers)
            .field("cache", &self.cache)
            .finish()
    }
}

fn default_headers() -> Vec<(String, String)> {
    vec![
        ("Content-Type".to_string(), "application/json".to_string()),
        ("Accept".to_string(), "application/json".to_string()),
    ]
}

fn upsert_header(headers: &mut Vec<(String, String)>, name: String, value: String) {
    match headers
        .iter_mut()
        .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
    {
        Some(slot) => *slot = (name, value),
        None => headers.push((name, value)),
    }
}

/// Parses a JSON body; an empty body reads as `null`.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}

impl ApiClient {
    /// Client backed by browser `fetch` and `localStorage`
    pub fn new(config: &AppConfig) -> Self {
        Self::with_backends(config, Rc::new(GlooTransport), Rc::new(LocalStorageBackend))
    }

    pub fn with_backends(
        config: &AppConfig,
        transport: Rc<dyn HttpTransport>,
        storage: Rc<dyn KeyValueStorage>,
    ) -> Self {
        Self {
            base_url: config.api.base_url.clone(),
            transport,
            storage,
            default_headers: default_headers(),
            cache: None,
            log_errors: config.logging.api_errors,
        }
    }

    /// Serves repeated GETs from memory for `ttl`.
    pub fn with_response_cache(mut self, ttl: Duration) -> Self {
        self.cache = Some(RequestCache::new(ttl));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache(&self) -> Option<&RequestCache> {
        self.cache.as_ref()
    }

    pub(crate) fn storage(&self) -> &dyn KeyValueStorage {
        self.storage.as_ref()
    }

    pub(crate) fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
        }
    }

    pub fn url(&self, endpoint: &str) -> String {
        join_url(&self.base_url, endpoint)
    }

    /// Defaults, then the stored bearer token, then the caller's headers.
    fn merge_headers(&self, overrides: Vec<(String, String)>) -> Vec<(String, String)> {
        let mut headers = self.default_headers.clone();
        if let Some(token) = self.storage.get(AUTH_TOKEN_KEY) {
            upsert_header(
                &mut headers,
                "Authorization".to_string(),
                format!("Bearer {}", token),
            );
        }
        for (name, value) in overrides {
            upsert_header(&mut headers, name, value);
        }
        headers
    }

    fn fail(&self, err: ApiError) -> ApiError {
        if self.log_errors {
            error!("API Request failed: {}", err);
        }
        err
    }

    /// Issues one request against `endpoint` and decodes the JSON reply.
    ///
    /// Non-2xx statuses become [`ApiError::Http`]; transport failures are
    /// returned as the transport reported them.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let url = self.url(endpoint);
        let method = options.method;
        // Caller headers can change the reply, so only plain GETs are cached.
        let cacheable =
            method == HttpMethod::Get && options.body.is_none() && options.headers.is_empty();

        if cacheable {
            if let Some(body) = self.cache.as_ref().and_then(|cache| cache.get(&url)) {
                return decode(&body).map_err(|e| self.fail(e));
            }
        }

        let request = HttpRequest {
            method,
            url: url.clone(),
            headers: self.merge_headers(options.headers),
            body: options.body,
        };

        debug!("Making {} request to: {}", method, url);

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| self.fail(e))?;

        if !response.ok() {
            let message = serde_json::from_str::<ErrorResponse>(&response.body)
                .ok()
                .map(|e| e.message);
            return Err(self.fail(ApiError::Http {
                status: response.status,
                message,
            }));
        }

        let data = decode(&response.body).map_err(|e| self.fail(e))?;
        debug!("API Response: {} {} ({} bytes)", response.status, url, response.body.len());

        if let Some(cache) = &self.cache {
            if cacheable {
                cache.set(url, response.body);
            } else {
                cache.clear();
            }
        }

        Ok(data)
    }
}
