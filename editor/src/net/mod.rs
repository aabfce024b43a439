//! HTTP access to the PageCraft host API.

pub mod api;

pub use api::{ApiClient, ApiError};
