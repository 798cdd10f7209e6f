use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SERVER_PORT: u16 = 8080;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Application configuration loaded once at startup and passed by reference.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_host: String,
    pub db_port: u16,
    pub db_username: String,
    pub db_password: String,
    pub db_database: String,

    pub server_port: u16,
    pub request_timeout_secs: u64,
    pub log_level: String,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and parseable
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - A required variable is unset
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - A numeric variable failed to parse
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            db_host: required("DB_HOST")?,
            db_port: parse(&required("DB_PORT")?, "DB_PORT")?,
            db_username: required("DB_USERNAME")?,
            db_password: required("DB_PASSWORD")?,
            db_database: required("DB_DATABASE")?,
            server_port: optional("SERVER_PORT")?.unwrap_or(DEFAULT_SERVER_PORT),
            request_timeout_secs: optional("REQUEST_TIMEOUT_SECS")?
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
        })
    }

    /// Connection string for the PostgreSQL database.
    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.db_username, self.db_password, self.db_host, self.db_port, self.db_database
        )
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(name) {
        Ok(value) => parse(&value, name).map(Some),
        Err(_) => Ok(None),
    }
}

fn parse<T: FromStr>(value: &str, name: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
    })
}
