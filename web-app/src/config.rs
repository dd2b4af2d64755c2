use std::{env, net::IpAddr, time::Duration};

use thiserror::Error;

const DEFAULT_PORT: u16 = 5174;
const DEFAULT_ADDRESS: &str = "0.0.0.0";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
const DEFAULT_PREVIEW_PREFIX: &str = "ramp-crew";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("DATABASE_URL is not set")]
    MissingDatabaseUrl,
    #[error("{0} has an invalid value: '{1}'")]
    InvalidValue(&'static str, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub address: IpAddr,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub preview_prefix: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Config {
    /// Reads the configuration from the process environment, after loading a
    /// `.env` file if there is one.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is normal outside of development.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url = var("DATABASE_URL").ok_or(ConfigError::MissingDatabaseUrl)?;

        let port = parse_or(var("PORT"), "PORT", DEFAULT_PORT)?;
        let address = match var("ADDRESS") {
            Some(value) => parse(&value, "ADDRESS")?,
            None => DEFAULT_ADDRESS
                .parse()
                .map_err(|_| ConfigError::InvalidValue("ADDRESS", DEFAULT_ADDRESS.into()))?,
        };
        let max_connections =
            parse_or(var("DB_MAX_CONNECTIONS"), "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        let acquire_timeout = Duration::from_secs(parse_or(
            var("DB_ACQUIRE_TIMEOUT"),
            "DB_ACQUIRE_TIMEOUT",
            DEFAULT_ACQUIRE_TIMEOUT_SECS,
        )?);

        let cors_origins =
            parse_origin_list(&var("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.into()));
        let preview_prefix = var("CORS_PREVIEW_PREFIX")
            .map_or_else(|| DEFAULT_PREVIEW_PREFIX.into(), |p| p.trim().to_lowercase());

        Ok(Self {
            database_url,
            address,
            port,
            cors_origins,
            preview_prefix,
            max_connections,
            acquire_timeout,
        })
    }
}

fn parse<T: std::str::FromStr>(value: &str, key: &'static str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue(key, value.into()))
}

fn parse_or<T: std::str::FromStr>(
    value: Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    value.map_or(Ok(default), |value| parse(&value, key))
}

/// Splits a comma separated allow-list, dropping blanks and trailing slashes.
pub fn parse_origin_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(|origin| origin.trim().trim_end_matches('/'))
        .filter(|origin| !origin.is_empty())
        .map(ToString::to_string)
        .collect()
}
