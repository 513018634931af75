use crate::app_config::AppConfig;
use crate::ConfigError;

/// Default User-Agent for article fetches. Some news sites refuse requests
/// without a browser-like agent string.
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) biaslens/0.1";

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
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_f32 = |var: &str, default: &str| -> Result<f32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<f32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let openai_api_key = require("OPENAI_API_KEY")?;

    let bind_addr = parse_addr("BIASLENS_BIND_ADDR", "0.0.0.0:5000")?;
    let log_level = or_default("BIASLENS_LOG_LEVEL", "info");

    let oracle_model = or_default("BIASLENS_ORACLE_MODEL", "gpt-4-turbo");
    let oracle_base_url = or_default("BIASLENS_ORACLE_BASE_URL", "https://api.openai.com/v1");
    let oracle_temperature = parse_f32("BIASLENS_ORACLE_TEMPERATURE", "0.3")?;

    let fetch_timeout_secs = parse_u64("BIASLENS_FETCH_TIMEOUT_SECS", "10")?;
    let fetch_user_agent = or_default("BIASLENS_FETCH_USER_AGENT", DEFAULT_USER_AGENT);
    let history_path = PathBuf::from(or_default("BIASLENS_HISTORY_PATH", "./bias_scores.jsonl"));

    Ok(AppConfig {
        bind_addr,
        log_level,
        openai_api_key,
        oracle_model,
        oracle_base_url,
        oracle_temperature,
        fetch_timeout_secs,
        fetch_user_agent,
        history_path,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
