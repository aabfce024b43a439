//! Configuration for PageCraft services.
//!
//! ARCHITECTURE
//! ============
//! Two layers, loaded in sequence at startup:
//!
//! 1. [`env::load_env`] — reads `.env`-style files into the process
//!    environment. Failures are *result values*, not panics; callers that
//!    cannot start without a file opt into [`env::load_env_strict`].
//! 2. [`app_config::AppConfig::from_env`] — the strict validator. It reads
//!    every variable the services need, aggregates ALL problems into one
//!    [`validate::ConfigValidationError`], and only produces a config object
//!    when everything is valid. Operators get one fix-and-retry cycle, not a
//!    whack-a-mole of first-failure errors.
//!
//! There is no hidden module-level singleton: the config object is built once
//! in `main` and passed by reference; tests just call `from_env` again.

pub mod app_config;
pub mod env;
pub mod validate;

pub use app_config::{AppConfig, DatabaseConfig, JwtAlgorithm, JwtConfig, RuntimeEnv};
pub use env::{EnvLoadError, EnvLoadOptions, EnvLoadResult, load_env, load_env_strict};
pub use validate::{ConfigValidationError, ValidationError};
