//! Environment-file loader.
//!
//! DESIGN
//! ======
//! `load_env` never panics and never throws for a missing file — absence is a
//! normal deployment state (e.g. production injects real environment
//! variables instead of a file). The result always carries the resolved
//! absolute path and, on success, the full parsed map for observability even
//! when no process variable actually changed.
//!
//! Precedence: by default a variable already set in the process wins over the
//! file. With `override_existing`, the file wins — so sequential loads are
//! last-applied-wins and load order is caller-controlled.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[cfg(test)]
#[path = "env_test.rs"]
mod env_test;

/// Options for a single [`load_env`] call.
#[derive(Debug, Clone)]
pub struct EnvLoadOptions {
    /// File to load, absolute or relative to `base_dir`.
    pub path: PathBuf,
    /// Base directory for relative paths. Defaults to the working directory.
    pub base_dir: Option<PathBuf>,
    /// Whether a missing file is a startup-blocking condition. Only changes
    /// the error text; `load_env` still returns instead of panicking.
    pub required: bool,
    /// Let file values overwrite variables already set in the process.
    pub override_existing: bool,
}

impl Default for EnvLoadOptions {
    fn default() -> Self {
        Self { path: PathBuf::from(".env"), base_dir: None, required: false, override_existing: false }
    }
}

impl EnvLoadOptions {
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    #[must_use]
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn override_existing(mut self) -> Self {
        self.override_existing = true;
        self
    }
}

/// Outcome of one [`load_env`] call. Immutable after return.
#[derive(Debug, Clone)]
pub struct EnvLoadResult {
    pub success: bool,
    /// Resolved absolute path that was attempted.
    pub path: PathBuf,
    pub error: Option<String>,
    /// Key/value pairs parsed from the file, regardless of whether they
    /// changed process state. `None` when the file could not be read.
    pub parsed: Option<BTreeMap<String, String>>,
}

/// Error for callers that treat a failed load as fatal.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct EnvLoadError(pub String);

/// Load an env file into the process environment.
pub fn load_env(options: &EnvLoadOptions) -> EnvLoadResult {
    let path = resolve_path(&options.path, options.base_dir.as_deref());

    if !path.is_file() {
        let error = if options.required {
            format!("Required environment file not found: {}", path.display())
        } else {
            format!("Environment file not found: {}", path.display())
        };
        return EnvLoadResult { success: false, path, error: Some(error), parsed: None };
    }

    let iter = match dotenvy::from_path_iter(&path) {
        Ok(iter) => iter,
        Err(e) => {
            let error = format!("Failed to read environment file {}: {e}", path.display());
            return EnvLoadResult { success: false, path, error: Some(error), parsed: None };
        }
    };

    let mut parsed = BTreeMap::new();
    for item in iter {
        match item {
            Ok((key, value)) => {
                apply(&key, &value, options.override_existing);
                parsed.insert(key, value);
            }
            Err(e) => {
                let error = format!("Failed to parse environment file {}: {e}", path.display());
                return EnvLoadResult { success: false, path, error: Some(error), parsed: None };
            }
        }
    }

    EnvLoadResult { success: true, path, error: None, parsed: Some(parsed) }
}

/// [`load_env`] for callers where missing configuration must halt startup.
///
/// # Errors
///
/// Returns the failure result's error text as an [`EnvLoadError`].
pub fn load_env_strict(options: &EnvLoadOptions) -> Result<EnvLoadResult, EnvLoadError> {
    let result = load_env(options);
    if result.success {
        Ok(result)
    } else {
        Err(EnvLoadError(result.error.unwrap_or_else(|| "environment file load failed".to_owned())))
    }
}

fn resolve_path(path: &Path, base_dir: Option<&Path>) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let base = base_dir.map_or_else(
        || std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        Path::to_path_buf,
    );
    base.join(path)
}

fn apply(key: &str, value: &str, override_existing: bool) {
    if !override_existing && std::env::var_os(key).is_some() {
        return;
    }
    // Single-threaded startup path; see the crate docs on load ordering.
    unsafe { std::env::set_var(key, value) };
}
