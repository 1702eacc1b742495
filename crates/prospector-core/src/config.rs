use crate::app_config::{AppConfig, Environment, TransportMode};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
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
/// Returns `ConfigError` if values are invalid.
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

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("PROSPECTOR_ENV", "development"));
    let mode = parse_mode(&or_default("PROSPECTOR_MODE", "direct"))?;

    let base_url = or_default("PROSPECTOR_BASE_URL", "http://localhost:3001");
    let client_id = lookup("PROSPECTOR_CLIENT_ID").ok();
    let client_secret = lookup("PROSPECTOR_CLIENT_SECRET").ok();

    let request_timeout_secs = parse_u64("PROSPECTOR_REQUEST_TIMEOUT_SECS", "10")?;
    let bind_addr = parse_addr("PROSPECTOR_BIND_ADDR", "0.0.0.0:3001")?;
    let log_level = or_default("PROSPECTOR_LOG_LEVEL", "info");
    let fixtures_path = PathBuf::from(or_default(
        "PROSPECTOR_FIXTURES_PATH",
        "./fixtures/companies.json",
    ));

    Ok(AppConfig {
        env,
        mode,
        base_url,
        client_id,
        client_secret,
        request_timeout_secs,
        bind_addr,
        log_level,
        fixtures_path,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

/// Parse a string into a `TransportMode`. The mode is fixed for the session,
/// so an unrecognized value is a hard error rather than a silent default.
fn parse_mode(s: &str) -> Result<TransportMode, ConfigError> {
    match s {
        "direct" => Ok(TransportMode::Direct),
        "proxied" => Ok(TransportMode::Proxied),
        other => Err(ConfigError::InvalidEnvVar {
            var: "PROSPECTOR_MODE".to_string(),
            reason: format!("expected 'direct' or 'proxied', got '{other}'"),
        }),
    }
}
