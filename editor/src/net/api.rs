//! REST client for the PageCraft host API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a transport error since the editor
//! only talks to the API from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses to [`ApiError`] so callers can branch on the
//! status code when one exists and show the message otherwise. Envelope
//! decoding is pure and tested; only the transport is cfg-gated.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
#[cfg(feature = "hydrate")]
use serde::Serialize;

/// Request failure with enough context to render an error state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success envelope.
    #[error("{message} (status {status})")]
    Status { status: u16, message: String },
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The response body was not a valid envelope.
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Status code of the failure, when the server produced one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}

/// Join a base URL and a path without doubling slashes.
fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Decode a response body given its HTTP status.
///
/// Success statuses unwrap the `{ success, data }` envelope; failure
/// statuses prefer the server's error message and fall back to a generic
/// one when the body is not an envelope.
fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if (200..300).contains(&status) {
        let envelope: schema::ApiSuccess<T> =
            serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        return Ok(envelope.data);
    }
    let message = serde_json::from_str::<schema::ApiError>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| format!("request failed with status {status}"));
    Err(ApiError::Status { status, message })
}

/// Thin client over the host API. Holds only the base URL; construct one
/// per origin and share it freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    /// Client for same-origin requests.
    #[must_use]
    pub fn same_origin() -> Self {
        Self::new("")
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// `GET` a resource and unwrap its envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-success status, or
    /// an undecodable body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.url(path))
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            decode_body(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }

    /// `POST` a JSON body and unwrap the response envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-success status, or
    /// an undecodable body.
    #[cfg(feature = "hydrate")]
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send_json(gloo_net::http::Request::post(&self.url(path)), body).await
    }

    #[cfg(not(feature = "hydrate"))]
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let _ = (path, body);
        Err(ApiError::Transport("not available on server".to_owned()))
    }

    /// `PUT` a JSON body and unwrap the response envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-success status, or
    /// an undecodable body.
    #[cfg(feature = "hydrate")]
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send_json(gloo_net::http::Request::put(&self.url(path)), body).await
    }

    #[cfg(not(feature = "hydrate"))]
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let _ = (path, body);
        Err(ApiError::Transport("not available on server".to_owned()))
    }

    /// `PATCH` a JSON body and unwrap the response envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-success status, or
    /// an undecodable body.
    #[cfg(feature = "hydrate")]
    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send_json(gloo_net::http::Request::patch(&self.url(path)), body).await
    }

    #[cfg(not(feature = "hydrate"))]
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let _ = (path, body);
        Err(ApiError::Transport("not available on server".to_owned()))
    }

    /// `DELETE` a resource and unwrap the response envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-success status, or
    /// an undecodable body.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::delete(&self.url(path))
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            decode_body(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }

    #[cfg(feature = "hydrate")]
    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        builder: gloo_net::http::RequestBuilder,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = builder
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        decode_body(status, &text)
    }
}
