use anyhow::{Context, Result};

const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Application configuration loaded from environment variables.
/// Startup fails if the API key is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: String,
    pub gemini_api_base: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            google_api_key: require_env("GOOGLE_API_KEY")?,
            gemini_api_base: std::env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_GEMINI_API_BASE.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    let value = std::env::var(key)
        .with_context(|| format!("Required environment variable '{key}' is not set"))?;
    if value.trim().is_empty() {
        anyhow::bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_env_missing_names_variable() {
        let err = require_env("QUOTE_API_TEST_DEFINITELY_UNSET").unwrap_err();
        assert!(err.to_string().contains("QUOTE_API_TEST_DEFINITELY_UNSET"));
    }

    #[test]
    fn test_require_env_rejects_blank_value() {
        std::env::set_var("QUOTE_API_TEST_BLANK", "   ");
        let err = require_env("QUOTE_API_TEST_BLANK").unwrap_err();
        assert!(err.to_string().contains("is empty"));
    }

    #[test]
    fn test_require_env_returns_value() {
        std::env::set_var("QUOTE_API_TEST_PRESENT", "secret");
        assert_eq!(require_env("QUOTE_API_TEST_PRESENT").unwrap(), "secret");
    }
}
