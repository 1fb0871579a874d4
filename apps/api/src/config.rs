use anyhow::{Context, Result};

const DEFAULT_LANGUAGETOOL_URL: &str = "https://api.languagetool.org/v2/check";

/// Application configuration loaded from environment variables.
/// Fails at startup if a numeric variable cannot be parsed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Full URL of the LanguageTool `/v2/check` endpoint.
    pub languagetool_url: String,
    /// Checking profile, fixed for the lifetime of the process.
    pub languagetool_language: String,
    pub grammar_timeout_secs: u64,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            languagetool_url: std::env::var("LANGUAGETOOL_URL")
                .unwrap_or_else(|_| DEFAULT_LANGUAGETOOL_URL.to_string()),
            languagetool_language: std::env::var("LANGUAGETOOL_LANGUAGE")
                .unwrap_or_else(|_| "en-US".to_string()),
            grammar_timeout_secs: parse_env("GRAMMAR_TIMEOUT_SECS", 30)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
impl Config {
    /// Configuration used by router tests; never reads the environment.
    pub fn for_tests() -> Self {
        Config {
            port: 0,
            rust_log: "debug".to_string(),
            languagetool_url: "http://127.0.0.1:1/v2/check".to_string(),
            languagetool_language: "en-US".to_string(),
            grammar_timeout_secs: 5,
            max_upload_bytes: 1024 * 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_falls_back_to_default() {
        let value: u64 = parse_env("CRITIC_TEST_UNSET_VARIABLE", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("CRITIC_TEST_BAD_NUMBER", "not-a-number");
        let result: Result<u16> = parse_env("CRITIC_TEST_BAD_NUMBER", 1);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("CRITIC_TEST_BAD_NUMBER"), "error was {err}");
    }
}
