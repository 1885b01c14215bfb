use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can feed a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let mongodb_uri = require("MONGODB_URI")?;
    let database_name = or_default("TWEETPULSE_DB_NAME", "twitter-sentiment");
    let tweets_collection = or_default("TWEETPULSE_TWEETS_COLLECTION", "tweets");

    let env = parse_environment(&or_default("TWEETPULSE_ENV", "development"))?;

    let bind_addr: SocketAddr = parse_as(
        "TWEETPULSE_BIND_ADDR",
        &or_default("TWEETPULSE_BIND_ADDR", "0.0.0.0:3000"),
    )?;
    let log_level = or_default("TWEETPULSE_LOG_LEVEL", "info");

    let db_max_pool_size: u32 = parse_as(
        "TWEETPULSE_DB_MAX_POOL_SIZE",
        &or_default("TWEETPULSE_DB_MAX_POOL_SIZE", "10"),
    )?;
    let db_min_pool_size: u32 = parse_as(
        "TWEETPULSE_DB_MIN_POOL_SIZE",
        &or_default("TWEETPULSE_DB_MIN_POOL_SIZE", "1"),
    )?;
    if db_min_pool_size > db_max_pool_size {
        return Err(ConfigError::InvalidEnvVar {
            var: "TWEETPULSE_DB_MIN_POOL_SIZE".to_string(),
            reason: format!(
                "min pool size {db_min_pool_size} exceeds max pool size {db_max_pool_size}"
            ),
        });
    }
    let db_server_selection_timeout_secs: u64 = parse_as(
        "TWEETPULSE_DB_SERVER_SELECTION_TIMEOUT_SECS",
        &or_default("TWEETPULSE_DB_SERVER_SELECTION_TIMEOUT_SECS", "10"),
    )?;

    let rate_limit_max_requests: usize = parse_as(
        "TWEETPULSE_RATE_LIMIT_MAX_REQUESTS",
        &or_default("TWEETPULSE_RATE_LIMIT_MAX_REQUESTS", "120"),
    )?;
    let rate_limit_window_secs: u64 = parse_as(
        "TWEETPULSE_RATE_LIMIT_WINDOW_SECS",
        &or_default("TWEETPULSE_RATE_LIMIT_WINDOW_SECS", "60"),
    )?;

    Ok(AppConfig {
        mongodb_uri,
        database_name,
        tweets_collection,
        env,
        bind_addr,
        log_level,
        db_max_pool_size,
        db_min_pool_size,
        db_server_selection_timeout_secs,
        rate_limit_max_requests,
        rate_limit_window_secs,
    })
}

fn parse_as<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>().map_err(|e| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason: e.to_string(),
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything other than
/// `development`, `test` or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "TWEETPULSE_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
