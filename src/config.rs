//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="0.0.0.0:8000"
//! export BASE_URL="https://sho.rt/"
//! export CODE_LENGTH="8"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8000`)
//! - `BASE_URL` - Prefix of every short URL (default: `http://localhost:8000/`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DEFAULT_EXPIRATION` - Expiration label used when a request has none (default: `30 days`)
//! - `CODE_LENGTH` - Length of generated short codes (default: 8, range: 6-32)
//! - `CODE_MAX_ATTEMPTS` - Random draws before giving up on a free code (default: 5, range: 1-100)
//! - `CORS_ALLOWED_ORIGINS` - `*` or a comma-separated origin list (default: `*`)

use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Always ends with `/` once loaded, so a short URL is `base_url + code`.
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    pub default_expiration: String,
    pub code_length: usize,
    pub code_max_attempts: usize,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but not a number.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let base_url = with_trailing_slash(
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:8000/".to_string()),
        );
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        let default_expiration =
            env::var("DEFAULT_EXPIRATION").unwrap_or_else(|_| "30 days".to_string());

        let code_length = parse_var("CODE_LENGTH", 8)?;
        let code_max_attempts = parse_var("CODE_MAX_ATTEMPTS", 5)?;

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|v| parse_origins(&v))
            .unwrap_or_else(|_| vec!["*".to_string()]);

        Ok(Self {
            listen_addr,
            base_url,
            log_level,
            log_format,
            default_expiration,
            code_length,
            code_max_attempts,
            cors_allowed_origins,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not `host:port`
    /// - `base_url` is not an absolute HTTP(S) URL
    /// - `log_format` is not `text` or `json`
    /// - `default_expiration` is blank
    /// - `code_length` is outside 6-32 or `code_max_attempts` outside 1-100
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        let base = Url::parse(&self.base_url)
            .with_context(|| format!("BASE_URL is not a valid URL: '{}'", self.base_url))?;
        if base.scheme() != "http" && base.scheme() != "https" {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.default_expiration.trim().is_empty() {
            anyhow::bail!("DEFAULT_EXPIRATION must not be empty");
        }

        if !(6..=32).contains(&self.code_length) {
            anyhow::bail!(
                "CODE_LENGTH must be between 6 and 32, got {}",
                self.code_length
            );
        }

        if !(1..=100).contains(&self.code_max_attempts) {
            anyhow::bail!(
                "CODE_MAX_ATTEMPTS must be between 1 and 100, got {}",
                self.code_max_attempts
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Default expiration: {}", self.default_expiration);
        tracing::info!(
            "  Short codes: {} chars, {} attempts",
            self.code_length,
            self.code_max_attempts
        );
        tracing::info!("  CORS origins: {}", self.cors_allowed_origins.join(", "));
    }
}

/// Reads a numeric variable, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

fn with_trailing_slash(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
