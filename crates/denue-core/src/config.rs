use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://www.inegi.org.mx/app/api/denue/v1/consulta";
pub const DEFAULT_USER_AGENT: &str = "denue/0.1 (business-search)";
pub const DEFAULT_EXPORT_PATH: &str = "empresas_resultado.csv";

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
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let api_token = lookup("DENUE_API_TOKEN")
        .ok()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());
    let base_url = or_default("DENUE_BASE_URL", DEFAULT_BASE_URL);
    let log_level = or_default("DENUE_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("DENUE_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("DENUE_USER_AGENT", DEFAULT_USER_AGENT);
    let max_concurrent_queries = parse_usize("DENUE_MAX_CONCURRENT_QUERIES", "8")?;
    if max_concurrent_queries == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "DENUE_MAX_CONCURRENT_QUERIES".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    let export_path = PathBuf::from(or_default("DENUE_EXPORT_PATH", DEFAULT_EXPORT_PATH));

    Ok(AppConfig {
        api_token,
        base_url,
        log_level,
        request_timeout_secs,
        user_agent,
        max_concurrent_queries,
        export_path,
    })
}

impl AppConfig {
    /// Picks the explicit token when given, otherwise the configured one.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] when neither is available.
    pub fn resolve_token(&self, explicit: Option<&str>) -> Result<String, ConfigError> {
        explicit
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .or_else(|| self.api_token.clone())
            .ok_or_else(|| ConfigError::MissingEnvVar("DENUE_API_TOKEN".to_string()))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
