//! Fetcher configuration.

use std::env;
use std::time::Duration;

use crate::error::{FetchError, Result};

/// Environment variable holding the endpoint base URL.
pub const API_URL_VAR: &str = "EXTERNAL_API_URL";

/// Environment variable holding the per-call timeout in milliseconds.
pub const TIMEOUT_MS_VAR: &str = "EXTERNAL_TIMEOUT_MS";

/// Timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Settings a [`Fetcher`](crate::Fetcher) is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the endpoint, e.g. `http://localhost:3000`.
    pub base_url: String,

    /// Upper bound on a single fetch.
    pub timeout: Duration,
}

impl Config {
    /// Create a config with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Replace the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load from `EXTERNAL_API_URL` and `EXTERNAL_TIMEOUT_MS`.
    ///
    /// # Errors
    ///
    /// Returns an error if `EXTERNAL_API_URL` is not set, or if
    /// `EXTERNAL_TIMEOUT_MS` is set but is not a positive integer.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var(API_URL_VAR).map_err(|_| {
            FetchError::ConfigMissing(format!("{API_URL_VAR} environment variable not set"))
        })?;

        let timeout = match env::var(TIMEOUT_MS_VAR) {
            Ok(raw) => parse_timeout_ms(&raw)?,
            Err(_) => DEFAULT_TIMEOUT,
        };

        Ok(Self { base_url, timeout })
    }

    /// Check the timeout is usable.
    pub fn validate(&self) -> Result<()> {
        if self.timeout.is_zero() {
            return Err(FetchError::InvalidConfig(
                "timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parse a millisecond timeout string.
pub fn parse_timeout_ms(raw: &str) -> Result<Duration> {
    let millis: u64 = raw.trim().parse().map_err(|_| {
        FetchError::InvalidConfig(format!("{TIMEOUT_MS_VAR} must be an integer, got '{raw}'"))
    })?;

    if millis == 0 {
        return Err(FetchError::InvalidConfig(format!(
            "{TIMEOUT_MS_VAR} must be greater than zero"
        )));
    }

    Ok(Duration::from_millis(millis))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_timeout() {
        let config = Config::new("http://localhost:3000");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_is_invalid() {
        let config = Config::new("http://localhost:3000").with_timeout(Duration::ZERO);
        assert!(matches!(
            config.validate(),
            Err(FetchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_parse_timeout_ms() {
        assert_eq!(parse_timeout_ms("250").unwrap(), Duration::from_millis(250));
        assert_eq!(parse_timeout_ms(" 30 ").unwrap(), Duration::from_millis(30));
        assert!(parse_timeout_ms("0").is_err());
        assert!(parse_timeout_ms("-5").is_err());
        assert!(parse_timeout_ms("1s").is_err());
    }
}
