//! Application configuration settings
//!
//! Defines all configuration structures and loading logic

use crate::config::source::ConfigSource;
use crate::utils::error::ConfigError;
use axum::http::HeaderValue;
use secrecy::SecretString;
use std::path::Path;
use tracing::debug;

/// Default override file, relative to the working directory
pub const OVERRIDE_FILE: &str = ".env";

pub const DEFAULT_DB_HOST: &str = "127.0.0.1";
pub const DEFAULT_DB_PORT: u16 = 3306;
pub const DEFAULT_DB_USER: &str = "root";
pub const DEFAULT_DB_PASS: &str = "password";
pub const DEFAULT_DB_NAME: &str = "hackathon_db";

pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Main application configuration
///
/// Built once at process entry and never mutated afterwards. Fields are only
/// reachable through shared references.
#[derive(Debug)]
pub struct Settings {
    database: DatabaseSettings,
    server: ServerSettings,
    security: SecuritySettings,
    logging: LoggingSettings,
}

/// Database connection parameters
#[derive(Debug)]
pub struct DatabaseSettings {
    /// Database host
    pub host: String,
    /// Database port
    pub port: u16,
    /// Database user
    pub user: String,
    /// Database password
    pub password: SecretString,
    /// Database (schema) name
    pub name: String,
}

/// Server configuration
#[derive(Debug)]
pub struct ServerSettings {
    /// Listen host
    pub host: String,
    /// Listen port
    pub port: u16,
}

/// Security configuration
#[derive(Debug)]
pub struct SecuritySettings {
    /// Whether CORS is enabled
    pub cors_enabled: bool,
    /// Allowed origins for CORS (`*` allows any)
    pub allowed_origins: Vec<String>,
}

/// Logging configuration
#[derive(Debug)]
pub struct LoggingSettings {
    /// Tracing filter directive
    pub filter: String,
    /// Log format (text/json)
    pub format: String,
}

impl Settings {
    /// Load settings from `./.env` and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(OVERRIDE_FILE))
    }

    /// Load settings using a specific override file
    pub fn load_from(override_file: &Path) -> Result<Self, ConfigError> {
        let source = ConfigSource::from_process(override_file)?;
        Self::from_source(&source)
    }

    /// Build settings from a configuration source
    pub fn from_source(source: &ConfigSource) -> Result<Self, ConfigError> {
        let settings = Self {
            database: DatabaseSettings {
                host: source.string("DB_HOST", DEFAULT_DB_HOST),
                port: source.parse("DB_PORT", DEFAULT_DB_PORT)?,
                user: source.string("DB_USER", DEFAULT_DB_USER),
                password: SecretString::from(source.string("DB_PASS", DEFAULT_DB_PASS)),
                name: source.string("DB_NAME", DEFAULT_DB_NAME),
            },
            server: ServerSettings {
                host: source.string("SERVER_HOST", DEFAULT_SERVER_HOST),
                port: source.parse("SERVER_PORT", DEFAULT_SERVER_PORT)?,
            },
            security: SecuritySettings {
                cors_enabled: source.parse("CORS_ENABLED", true)?,
                allowed_origins: source
                    .string("ALLOWED_ORIGINS", "*")
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            },
            logging: LoggingSettings {
                filter: source.string("RUST_LOG", "info"),
                format: source.string("LOG_FORMAT", "text"),
            },
        };

        settings.validate()?;
        debug!("Settings resolved for database {}", settings.database.target());

        Ok(settings)
    }

    /// Validate configuration validity
    fn validate(&self) -> Result<(), ConfigError> {
        if self.database.port == 0 {
            return Err(ConfigError::Invalid {
                field: "DB_PORT",
                reason: "port cannot be 0".to_string(),
            });
        }

        if self.server.port == 0 {
            return Err(ConfigError::Invalid {
                field: "SERVER_PORT",
                reason: "port cannot be 0".to_string(),
            });
        }

        for origin in &self.security.allowed_origins {
            if origin != "*" && HeaderValue::from_str(origin).is_err() {
                return Err(ConfigError::Invalid {
                    field: "ALLOWED_ORIGINS",
                    reason: format!("{:?} is not a valid origin", origin),
                });
            }
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::Invalid {
                field: "LOG_FORMAT",
                reason: format!("expected one of {:?}, got {:?}", valid_formats, self.logging.format),
            });
        }

        Ok(())
    }

    pub fn database(&self) -> &DatabaseSettings {
        &self.database
    }

    pub fn server(&self) -> &ServerSettings {
        &self.server
    }

    pub fn security(&self) -> &SecuritySettings {
        &self.security
    }

    pub fn logging(&self) -> &LoggingSettings {
        &self.logging
    }
}

impl DatabaseSettings {
    /// `host:port/name`, safe to log
    pub fn target(&self) -> String {
        format!("{}:{}/{}", self.host, self.port, self.name)
    }
}

impl ServerSettings {
    /// Address string the listener binds to
    pub fn bind_address(&self) -> String {
        // IPv6 literals need brackets
        if self.host.parse::<std::net::Ipv6Addr>().is_ok() {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

impl SecuritySettings {
    /// Whether any origin is allowed
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}
