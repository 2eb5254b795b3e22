use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Sessions untouched for this long are discarded.
    pub session_ttl_secs: u64,
    /// Attempts per AI call; 1 disables retries.
    pub llm_max_attempts: u32,
    /// Rasterizer executable used for PDF export.
    pub capture_command: String,
    /// Device pixel ratio of captures.
    pub capture_scale: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            session_ttl_secs: parse_env("SESSION_TTL_SECS", 3600)?,
            llm_max_attempts: parse_env("LLM_MAX_ATTEMPTS", 1)?,
            capture_command: std::env::var("CAPTURE_COMMAND")
                .unwrap_or_else(|_| "wkhtmltoimage".to_string()),
            capture_scale: parse_env("CAPTURE_SCALE", 2)?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid {}", std::any::type_name::<T>())),
        Err(_) => Ok(default),
    }
}
