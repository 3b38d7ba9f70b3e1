use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so only malformed values fail.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_positive = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        let value = raw
            .trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })?;
        if value == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(value)
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let log_level = or_default("REVSENSE_LOG_LEVEL", "info");
    let model_dir = PathBuf::from(or_default("REVSENSE_MODEL_DIR", "./models"));
    let scraper_request_timeout_secs = parse_positive("REVSENSE_SCRAPER_TIMEOUT_SECS", "15")?;
    let max_reviews = usize::try_from(parse_positive("REVSENSE_MAX_REVIEWS", "50")?).map_err(
        |e| ConfigError::InvalidEnvVar {
            var: "REVSENSE_MAX_REVIEWS".to_string(),
            reason: e.to_string(),
        },
    )?;
    let min_reviews_for_compare = parse_usize("REVSENSE_MIN_REVIEWS_FOR_COMPARE", "3")?;

    Ok(AppConfig {
        log_level,
        model_dir,
        scraper_request_timeout_secs,
        max_reviews,
        min_reviews_for_compare,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
