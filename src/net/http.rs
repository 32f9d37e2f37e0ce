//! Credentialed HTTP gateway.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always with
//! same-origin credentials so the backend session cookie is sent.
//! Server-side (SSR) and native tests: [`BrowserGateway`] reports a network
//! error since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure, including non-2xx statuses, comes back as a [`FetchError`]
//! value. Callers decide what to surface; nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::future::Future;

use serde::de::DeserializeOwned;

/// Failure of a gateway request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// No response was received.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("{status} {message}")]
    Status { status: u16, message: String },
    /// A 2xx response whose body did not have the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl FetchError {
    /// HTTP status, if a response was received at all.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) | Self::Malformed(_) => None,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Network(message) | Self::Malformed(message) | Self::Status { message, .. } => message,
        }
    }

    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A successful (2xx) response with its body read to text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Malformed`] if the body does not decode into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_str(&self.body).map_err(|e| FetchError::Malformed(e.to_string()))
    }
}

/// Classify a received status. 2xx passes; anything else is a [`FetchError::Status`].
///
/// # Errors
///
/// Returns [`FetchError::Status`] for non-2xx statuses.
pub fn check_status(status: u16, status_text: &str) -> Result<(), FetchError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    let message = if status_text.trim().is_empty() {
        "request failed".to_owned()
    } else {
        status_text.trim().to_owned()
    };
    Err(FetchError::Status { status, message })
}

/// Capability: perform a same-origin credentialed request.
#[allow(async_fn_in_trait)]
pub trait HttpGateway {
    /// # Errors
    ///
    /// Returns [`FetchError::Network`] when no response arrives and
    /// [`FetchError::Status`] for non-2xx responses.
    fn request(&self, method: Method, path: &str) -> impl Future<Output = Result<HttpResponse, FetchError>>;
}

/// Gateway backed by the browser `fetch` API.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserGateway;

impl HttpGateway for BrowserGateway {
    async fn request(&self, method: Method, path: &str) -> Result<HttpResponse, FetchError> {
        log::debug!("{} {path}", method.as_str());
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            use web_sys::RequestCredentials;

            let builder = match method {
                Method::Get => Request::get(path),
                Method::Post => Request::post(path),
            };
            let resp = builder
                .credentials(RequestCredentials::SameOrigin)
                .send()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;
            check_status(resp.status(), &resp.status_text())?;
            let body = resp.text().await.map_err(|e| FetchError::Network(e.to_string()))?;
            Ok(HttpResponse::new(resp.status(), body))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(FetchError::Network("not available on server".to_owned()))
        }
    }
}
