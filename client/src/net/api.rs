//! HTTP client wrapper for the warehouse backend API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, aborted after the
//! configured timeout. Server-side (SSR) and host tests: every request
//! returns [`ApiError::Unavailable`].
//!
//! INTERCEPTOR CONTRACT
//! ====================
//! - Every request carries JSON content headers and, when a `token` entry is
//!   persisted, `Authorization: Bearer <token>`.
//! - A 401 triggers one refresh attempt; if that yields no token the session
//!   entries are cleared and the browser is sent to `/login`.
//! - 403, 404, 5xx and other statuses are logged and returned as errors.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so failed requests degrade
//! page behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::navigation::hard_redirect_to_login;
use crate::util::storage::{KeyValueStore, TOKEN_KEY};
#[cfg(any(test, feature = "hydrate"))]
use crate::util::storage::{REFRESH_TOKEN_KEY, clear_session_entries};

/// Errors returned by [`ApiClient`] requests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("session expired or invalid")]
    Unauthorized,

    #[error("access forbidden")]
    Forbidden,

    #[error("resource not found")]
    NotFound,

    #[error("server error: status {status}")]
    Server { status: u16 },

    #[error("request failed: status {status}")]
    Status { status: u16, body: String },

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("no response from server: {0}")]
    Transport(String),

    #[error("response decode failed: {0}")]
    Decode(String),

    #[error("HTTP client unavailable outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Map a non-success status to its error variant.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        match classify_status(status) {
            ResponseClass::Unauthorized => Self::Unauthorized,
            ResponseClass::Forbidden => Self::Forbidden,
            ResponseClass::NotFound => Self::NotFound,
            ResponseClass::ServerError => Self::Server { status },
            ResponseClass::Success | ResponseClass::Other => Self::Status { status, body: body.to_owned() },
        }
    }

    /// HTTP status behind this error, when there was a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Forbidden => Some(403),
            Self::NotFound => Some(404),
            Self::Server { status } | Self::Status { status, .. } => Some(*status),
            Self::Timeout(_) | Self::Transport(_) | Self::Decode(_) | Self::Unavailable => None,
        }
    }
}

/// How a response status is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseClass {
    Success,
    Unauthorized,
    Forbidden,
    NotFound,
    ServerError,
    Other,
}

#[must_use]
pub fn classify_status(status: u16) -> ResponseClass {
    match status {
        200..=299 => ResponseClass::Success,
        401 => ResponseClass::Unauthorized,
        403 => ResponseClass::Forbidden,
        404 => ResponseClass::NotFound,
        500 | 502 | 503 | 504 => ResponseClass::ServerError,
        _ => ResponseClass::Other,
    }
}

/// Log line for a failed response class.
#[must_use]
pub fn failure_message(class: ResponseClass) -> &'static str {
    match class {
        ResponseClass::Success => "",
        ResponseClass::Unauthorized => "Session expired or invalid. Signing out.",
        ResponseClass::Forbidden => "Access forbidden. You do not have permission to access this resource.",
        ResponseClass::NotFound => "Resource not found.",
        ResponseClass::ServerError => "Server error. Please try again later.",
        ResponseClass::Other => "An error occurred",
    }
}

#[cfg(feature = "hydrate")]
const NO_RESPONSE_MESSAGE: &str = "No response received from server. Please check your internet connection.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    #[cfg(feature = "hydrate")]
    fn builder(self, url: &str) -> gloo_net::http::RequestBuilder {
        use gloo_net::http::Request;
        match self {
            Self::Get => Request::get(url),
            Self::Post => Request::post(url),
            Self::Put => Request::put(url),
            Self::Patch => Request::patch(url),
            Self::Delete => Request::delete(url),
        }
    }
}

/// Join `path` onto `base`, leaving absolute URLs untouched.
#[must_use]
pub fn endpoint(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_owned();
    }
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Decode a response body, treating an empty body as JSON `null`.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the body does not match `T`.
pub fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    let raw = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(raw).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Backend client with bearer-token injection and 401 handling.
#[derive(Clone, Debug)]
pub struct ApiClient<S> {
    config: ApiConfig,
    storage: S,
}

impl<S: KeyValueStore> ApiClient<S> {
    pub fn new(config: ApiConfig, storage: S) -> Self {
        Self { config, storage }
    }

    pub fn url(&self, path: &str) -> String {
        endpoint(&self.config.base_url, path)
    }

    /// `Authorization` header value for the persisted token, if any.
    pub fn authorization(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).map(|token| format!("Bearer {token}"))
    }

    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(HttpMethod::Get, path, None).await
    }

    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let body = encode_body(body)?;
        self.request(HttpMethod::Post, path, Some(body)).await
    }

    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let body = encode_body(body)?;
        self.request(HttpMethod::Put, path, Some(body)).await
    }

    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn patch<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let body = encode_body(body)?;
        self.request(HttpMethod::Patch, path, Some(body)).await
    }

    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(HttpMethod::Delete, path, None).await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(path);
            let mut refreshed = false;
            loop {
                let response = self.dispatch(method, &url, body.as_ref()).await?;
                let status = response.status();
                log::debug!("{} {url} -> {status}", method.as_str());
                if classify_status(status) == ResponseClass::Success {
                    let text = response.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
                    return decode_body(&text);
                }
                if status == 401 && !refreshed {
                    refreshed = true;
                    if self.refresh_access_token().await.is_some() {
                        continue;
                    }
                }
                let text = response.text().await.unwrap_or_default();
                return Err(self.reject(status, &text));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (method, path, body);
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "hydrate")]
    async fn dispatch(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<gloo_net::http::Response, ApiError> {
        use std::cell::Cell;
        use std::rc::Rc;

        let controller =
            web_sys::AbortController::new().map_err(|_| ApiError::Transport("AbortController unavailable".to_owned()))?;
        let signal = controller.signal();
        let timed_out = Rc::new(Cell::new(false));
        let timeout_flag = timed_out.clone();
        let millis = u32::try_from(self.config.timeout.as_millis()).unwrap_or(u32::MAX);
        let _timer = gloo_timers::callback::Timeout::new(millis, move || {
            timeout_flag.set(true);
            controller.abort();
        });

        let mut builder = method
            .builder(url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .abort_signal(Some(&signal));
        if let Some(authorization) = self.authorization() {
            builder = builder.header("Authorization", &authorization);
        }

        log::debug!("request {} {url}", method.as_str());
        let sent = match body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Decode(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        };
        sent.map_err(|e| {
            if timed_out.get() {
                log::error!("request {} {url} timed out", method.as_str());
                ApiError::Timeout(self.config.timeout)
            } else {
                log::error!("{NO_RESPONSE_MESSAGE} ({e})");
                ApiError::Transport(e.to_string())
            }
        })
    }

    /// Exchange the stored refresh token for a new access token.
    ///
    /// The backend has no refresh endpoint yet, so this never yields a token.
    #[cfg(any(test, feature = "hydrate"))]
    async fn refresh_access_token(&self) -> Option<String> {
        self.storage.get(REFRESH_TOKEN_KEY)?;
        log::debug!("refresh token present but no refresh endpoint is configured");
        None
    }

    /// Log a failed response and turn it into an error. A 401 also ends the
    /// session.
    #[cfg(any(test, feature = "hydrate"))]
    pub(crate) fn reject(&self, status: u16, body: &str) -> ApiError {
        let class = classify_status(status);
        match class {
            ResponseClass::Unauthorized => {
                log::warn!("{}", failure_message(class));
                self.expire_session();
            }
            ResponseClass::Other => log::error!("{}: {status} {body}", failure_message(class)),
            _ => log::error!("{}", failure_message(class)),
        }
        ApiError::from_status(status, body)
    }

    /// Clear every session entry and leave for `/login`.
    #[cfg(any(test, feature = "hydrate"))]
    pub(crate) fn expire_session(&self) {
        clear_session_entries(&self.storage);
        hard_redirect_to_login();
    }
}

fn encode_body<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}
