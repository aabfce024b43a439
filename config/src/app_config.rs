//! Typed application configuration, validated in aggregate.
//!
//! Every variable is checked on one pass and ALL failures are reported
//! together; see the crate docs for the rationale.

use crate::validate::{ConfigValidationError, ValidationError};

#[cfg(test)]
#[path = "app_config_test.rs"]
mod app_config_test;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_DB_SCHEMA: &str = "public";
const DEFAULT_JWT_EXPIRES_IN: &str = "1h";
const DEFAULT_JWT_ISSUER: &str = "pagecraft";
const DEFAULT_JWT_AUDIENCE: &str = "pagecraft";

// =============================================================================
// TYPES
// =============================================================================

/// Deployment environment, from `APP_ENV` (`NODE_ENV` accepted as a
/// compatibility fallback for configs written for the previous stack).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RuntimeEnv {
    #[default]
    Development,
    Test,
    Production,
}

impl RuntimeEnv {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "development" => Some(Self::Development),
            "test" => Some(Self::Test),
            "production" => Some(Self::Production),
            _ => None,
        }
    }
}

/// JWT signing algorithm, from `JWT_ALGORITHM`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JwtAlgorithm {
    #[default]
    HS256,
    HS384,
    HS512,
    RS256,
}

impl JwtAlgorithm {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "HS256" => Some(Self::HS256),
            "HS384" => Some(Self::HS384),
            "HS512" => Some(Self::HS512),
            "RS256" => Some(Self::RS256),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub schema: String,
    pub username: String,
    pub password: String,
    /// Full connection URL handed to the external database layer unmodified.
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JwtConfig {
    pub secret: String,
    pub expires_in: String,
    pub issuer: String,
    pub audience: String,
    pub algorithm: JwtAlgorithm,
}

/// Fully validated service configuration. Built once at startup and passed
/// by reference; never cached in module state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub env: RuntimeEnv,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
}

// =============================================================================
// LOADING
// =============================================================================

struct Collector {
    errors: Vec<ValidationError>,
}

impl Collector {
    fn new() -> Self {
        Self { errors: Vec::new() }
    }

    fn require(&mut self, key: &str) -> Option<String> {
        match read(key) {
            Some(value) => Some(value),
            None => {
                self.errors.push(ValidationError::missing(key));
                None
            }
        }
    }

    fn optional(key: &str, default: &str) -> String {
        read(key).unwrap_or_else(|| default.to_owned())
    }

    fn port(&mut self, key: &str, default: u16) -> u16 {
        let Some(raw) = read(key) else {
            return default;
        };
        match raw.parse::<u16>() {
            Ok(port) if port > 0 => port,
            _ => {
                self.errors
                    .push(ValidationError::invalid(key, raw, "an integer between 1 and 65535"));
                default
            }
        }
    }
}

fn read(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

impl AppConfig {
    /// Read and validate the full configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns one [`ConfigValidationError`] listing every missing or invalid
    /// variable; no partially-valid config is ever produced.
    pub fn from_env() -> Result<Self, ConfigValidationError> {
        let mut c = Collector::new();

        let host = Collector::optional("HOST", DEFAULT_HOST);
        let port = c.port("PORT", DEFAULT_PORT);

        let env = match read("APP_ENV").or_else(|| read("NODE_ENV")) {
            None => RuntimeEnv::default(),
            Some(raw) => RuntimeEnv::parse(&raw).unwrap_or_else(|| {
                c.errors.push(ValidationError::invalid(
                    "APP_ENV",
                    raw,
                    "one of development, test, production",
                ));
                RuntimeEnv::default()
            }),
        };

        let db_host = c.require("DB_HOST");
        let db_port = c.port("DB_PORT", DEFAULT_DB_PORT);
        let db_name = c.require("DB_NAME");
        let db_schema = Collector::optional("DB_SCHEMA", DEFAULT_DB_SCHEMA);
        let db_username = c.require("DB_USERNAME");
        let db_password = c.require("DB_PASSWORD");

        // The test environment prefers an isolated database when one is
        // configured, so test runs cannot touch development data.
        let db_url = if env == RuntimeEnv::Test {
            read("TEST_DATABASE_URL").or_else(|| read("DATABASE_URL"))
        } else {
            read("DATABASE_URL")
        };
        if db_url.is_none() {
            c.errors.push(ValidationError::missing("DATABASE_URL"));
        }

        let jwt_secret = c.require("JWT_SECRET");
        let jwt_expires_in = Collector::optional("JWT_EXPIRES_IN", DEFAULT_JWT_EXPIRES_IN);
        let jwt_issuer = Collector::optional("JWT_ISSUER", DEFAULT_JWT_ISSUER);
        let jwt_audience = Collector::optional("JWT_AUDIENCE", DEFAULT_JWT_AUDIENCE);
        let jwt_algorithm = match read("JWT_ALGORITHM") {
            None => JwtAlgorithm::default(),
            Some(raw) => JwtAlgorithm::parse(&raw).unwrap_or_else(|| {
                c.errors.push(ValidationError::invalid(
                    "JWT_ALGORITHM",
                    raw,
                    "one of HS256, HS384, HS512, RS256",
                ));
                JwtAlgorithm::default()
            }),
        };

        if !c.errors.is_empty() {
            return Err(ConfigValidationError::new(c.errors));
        }

        // All `require` calls succeeded when the error list is empty.
        Ok(Self {
            host,
            port,
            env,
            database: DatabaseConfig {
                host: db_host.unwrap_or_default(),
                port: db_port,
                name: db_name.unwrap_or_default(),
                schema: db_schema,
                username: db_username.unwrap_or_default(),
                password: db_password.unwrap_or_default(),
                url: db_url.unwrap_or_default(),
            },
            jwt: JwtConfig {
                secret: jwt_secret.unwrap_or_default(),
                expires_in: jwt_expires_in,
                issuer: jwt_issuer,
                audience: jwt_audience,
                algorithm: jwt_algorithm,
            },
        })
    }
}
