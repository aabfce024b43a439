//! Small async utilities shared across services.

pub mod debounce;
pub mod retry;

pub use debounce::{Debouncer, Throttle};
pub use retry::{delay, retry};
