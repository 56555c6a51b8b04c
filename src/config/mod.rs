use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use thiserror::Error;

use crate::auth::MAX_JWT_EXPIRY_HOURS;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub api: ApiConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub app_origin: String,
    pub api_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u32,
    pub connection_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub prefix: String,
    pub not_found_as_404: bool,
    pub max_request_size_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub jwt_secret: String,
    pub jwt_expiry_hours: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            name,
            reason: reason.into(),
        }
    }
}

/// Parse an optional variable, naming it in the error when the value is malformed.
fn parsed<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|v| {
            v.trim()
                .parse()
                .map_err(|_| ConfigError::invalid(name, format!("'{}' is not a valid value", v)))
        })
        .transpose()
}

/// Allowed listen ports, inclusive.
pub const PORT_RANGE: std::ops::RangeInclusive<u16> = 3000..=5000;

/// Allowed token lifetimes in hours, inclusive. One year at most.
pub const JWT_EXPIRY_RANGE: std::ops::RangeInclusive<u64> = 1..=MAX_JWT_EXPIRY_HOURS;

impl AppConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("APP_ENV").or_else(|| lookup("NODE_ENV")).as_deref() {
            None | Some("development") | Some("dev") => Environment::Development,
            Some("production") | Some("prod") => Environment::Production,
            Some(other) => {
                return Err(ConfigError::invalid(
                    "APP_ENV",
                    format!("expected development or production, got '{}'", other),
                ))
            }
        };

        let config = match environment {
            Environment::Production => Self::production(),
            Environment::Development => Self::development(),
        };

        config.with_overrides(&lookup)?.validated()
    }

    fn with_overrides<F>(mut self, lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Server
        if let Some(port) = parsed(lookup, "PORT")? {
            self.server.port = port;
        }
        self.server.app_origin = lookup("APP_ORIGIN").ok_or(ConfigError::Missing("APP_ORIGIN"))?;
        self.server.api_url = lookup("API_URL").ok_or(ConfigError::Missing("API_URL"))?;

        // Database
        self.database.url = lookup("DATABASE_URL");
        if let Some(max) = parsed(lookup, "DATABASE_MAX_CONNECTIONS")? {
            self.database.max_connections = max;
        }
        if let Some(timeout) = parsed(lookup, "DATABASE_CONNECTION_TIMEOUT")? {
            self.database.connection_timeout = timeout;
        }

        // API
        if let Some(v) = lookup("API_PREFIX") {
            self.api.prefix = v;
        }
        if let Some(switch) = parsed(lookup, "POSTS_NOT_FOUND_AS_404")? {
            self.api.not_found_as_404 = switch;
        }
        if let Some(limit) = parsed(lookup, "API_MAX_REQUEST_SIZE_BYTES")? {
            self.api.max_request_size_bytes = limit;
        }

        // Security
        self.security.jwt_secret = lookup("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        if let Some(hours) = parsed(lookup, "JWT_EXPIRY_HOURS")? {
            self.security.jwt_expiry_hours = hours;
        }

        Ok(self)
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if !PORT_RANGE.contains(&self.server.port) {
            return Err(ConfigError::invalid(
                "PORT",
                format!("{} is outside {:?}", self.server.port, PORT_RANGE),
            ));
        }
        url::Url::parse(&self.server.app_origin)
            .map_err(|e| ConfigError::invalid("APP_ORIGIN", e.to_string()))?;
        url::Url::parse(&self.server.api_url)
            .map_err(|e| ConfigError::invalid("API_URL", e.to_string()))?;
        if self.security.jwt_secret.is_empty() {
            return Err(ConfigError::invalid("JWT_SECRET", "must not be empty"));
        }
        if !JWT_EXPIRY_RANGE.contains(&self.security.jwt_expiry_hours) {
            return Err(ConfigError::invalid(
                "JWT_EXPIRY_HOURS",
                format!("{} is outside {:?}", self.security.jwt_expiry_hours, JWT_EXPIRY_RANGE),
            ));
        }
        if !self.api.prefix.is_empty() && !self.api.prefix.starts_with('/') {
            return Err(ConfigError::invalid("API_PREFIX", "must start with '/'"));
        }
        Ok(self)
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                port: 3000,
                app_origin: String::new(),
                api_url: String::new(),
            },
            database: DatabaseConfig {
                url: None,
                max_connections: 10,
                connection_timeout: 30,
            },
            api: ApiConfig {
                prefix: "/api".to_string(),
                not_found_as_404: false,
                max_request_size_bytes: 1024 * 1024, // 1MB
            },
            security: SecurityConfig {
                jwt_secret: String::new(),
                jwt_expiry_hours: 24 * 7, // 1 week
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig {
                port: 3000,
                app_origin: String::new(),
                api_url: String::new(),
            },
            database: DatabaseConfig {
                url: None,
                max_connections: 50,
                connection_timeout: 5,
            },
            api: ApiConfig {
                prefix: "/api".to_string(),
                not_found_as_404: false,
                max_request_size_bytes: 256 * 1024,
            },
            security: SecurityConfig {
                jwt_secret: String::new(),
                jwt_expiry_hours: 4,
            },
        }
    }
}
