//! Upstream auth API client.
//!
//! DESIGN
//! ======
//! PageCraft does not own authentication: login requests are passed through
//! verbatim to an upstream API and its JSON response is returned to the
//! caller unchanged, including rejection bodies. The client is a trait
//! object on `AppState` so handler tests can substitute a mock.

use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Transport(String),
    /// The upstream answered with a non-success status; `body` is its
    /// verbatim JSON response.
    #[error("upstream rejected the request with status {status}")]
    Rejected { status: u16, body: Value },
}

impl schema::ErrorCode for UpstreamError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "E_UPSTREAM_UNREACHABLE",
            Self::Rejected { .. } => "E_UPSTREAM_REJECTED",
        }
    }
}

#[async_trait]
pub trait AuthUpstream: Send + Sync {
    /// POST credentials to the upstream login endpoint and return its JSON
    /// body verbatim.
    async fn login(&self, credentials: Value) -> Result<Value, UpstreamError>;
}

/// Production client over `reqwest`.
pub struct HttpAuthUpstream {
    base_url: String,
    client: reqwest::Client,
}

impl HttpAuthUpstream {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client: reqwest::Client::new(),
        }
    }

    /// Build a client from `AUTH_API_URL`.
    ///
    /// # Errors
    ///
    /// Returns an error when the variable is unset; callers treat that as
    /// "auth pass-through disabled", not a startup failure.
    pub fn from_env() -> Result<Self, String> {
        let base_url =
            std::env::var("AUTH_API_URL").map_err(|_| "AUTH_API_URL not set".to_owned())?;
        Ok(Self::new(base_url))
    }
}

#[async_trait]
impl AuthUpstream for HttpAuthUpstream {
    async fn login(&self, credentials: Value) -> Result<Value, UpstreamError> {
        let resp = self
            .client
            .post(format!("{}/auth/login", self.base_url))
            .json(&credentials)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        let status = resp.status();
        let body: Value = resp
            .json()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        if status.is_success() {
            Ok(body)
        } else {
            Err(UpstreamError::Rejected { status: status.as_u16(), body })
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use schema::ErrorCode;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let upstream = HttpAuthUpstream::new("https://auth.example.com/");
        assert_eq!(upstream.base_url, "https://auth.example.com");
    }

    #[test]
    fn error_codes_are_stable() {
        let transport = UpstreamError::Transport("boom".to_owned());
        assert_eq!(transport.error_code(), "E_UPSTREAM_UNREACHABLE");

        let rejected = UpstreamError::Rejected { status: 401, body: Value::Null };
        assert_eq!(rejected.error_code(), "E_UPSTREAM_REJECTED");
        assert!(rejected.to_string().contains("401"));
    }
}
