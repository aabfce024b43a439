//! Shared API schema shapes for the PageCraft admin API.
//!
//! This crate owns the response envelopes used by both `pagecraft` (server)
//! and `editor` (admin UI). Three envelope shapes exist and nothing else:
//! success, error, and paginated. Every REST response is one of them.
//!
//! DESIGN
//! ======
//! - Envelopes are plain serde structs; no generics leak onto the wire.
//! - Error envelopes carry a grepable `E_*` code via the [`ErrorCode`] trait
//!   so operators can search logs and clients can branch without string
//!   matching on messages.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

// =============================================================================
// ERROR CODES
// =============================================================================

/// Grepable error code for structured error envelopes.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;
}

// =============================================================================
// ENVELOPES
// =============================================================================

/// Success envelope: `{ "success": true, "data": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSuccess<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiSuccess<T> {
    pub fn new(data: T) -> Self {
        Self { success: true, data }
    }
}

/// Body of an error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// Error envelope: `{ "success": false, "error": { code, message, details? } }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub success: bool,
    pub error: ErrorBody,
}

impl ApiError {
    /// Build an error envelope from a typed error.
    pub fn from_error(err: &(impl ErrorCode + ?Sized)) -> Self {
        Self {
            success: false,
            error: ErrorBody { code: err.error_code().to_owned(), message: err.to_string(), details: None },
        }
    }

    /// Build an error envelope from a raw code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ErrorBody { code: code.into(), message: message.into(), details: None },
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.error.details = Some(details);
        self
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Pagination metadata attached to list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

impl PageMeta {
    /// Compute metadata for `total` items at `limit` per page.
    ///
    /// `limit` is clamped to at least 1 so `total_pages` is always defined.
    #[must_use]
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        let limit = limit.max(1);
        let total_pages = total.div_ceil(u64::from(limit));
        Self {
            page,
            limit,
            total,
            total_pages: u32::try_from(total_pages).unwrap_or(u32::MAX),
        }
    }
}

/// Paginated envelope: `{ "success": true, "data": [...], "meta": {...} }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, meta: PageMeta) -> Self {
        Self { success: true, data, meta }
    }
}

/// Slice one page out of an in-memory collection.
///
/// `page` is 1-based; an out-of-range page yields an empty data vec with
/// correct metadata rather than an error.
pub fn paginate<T: Clone>(items: &[T], page: u32, limit: u32) -> Paginated<T> {
    let limit = limit.max(1);
    let meta = PageMeta::new(page.max(1), limit, items.len() as u64);
    let start = (meta.page - 1) as usize * limit as usize;
    let data = items
        .iter()
        .skip(start)
        .take(limit as usize)
        .cloned()
        .collect();
    Paginated::new(data, meta)
}
