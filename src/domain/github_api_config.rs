//! GitHub REST API client configuration.

use url::Url;

use crate::domain::AppError;

/// Endpoint and transport settings for the GitHub REST API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubApiConfig {
    /// API root, e.g. `https://api.github.com` or `https://ghe.example/api/v3`.
    pub api_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GitHubApiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), timeout_secs: default_timeout() }
    }
}

impl GitHubApiConfig {
    /// Configuration pointing at an explicit API root.
    pub fn with_api_url(raw: &str) -> Result<Self, AppError> {
        let api_url = Url::parse(raw.trim()).map_err(|e| {
            AppError::config_error(format!("Invalid GitHub API URL '{}': {}", raw, e))
        })?;
        let config = Self { api_url, ..Self::default() };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("timeout_secs must be greater than 0"));
        }
        if self.api_url.cannot_be_a_base() || !matches!(self.api_url.scheme(), "http" | "https") {
            return Err(AppError::config_error(format!(
                "GitHub API URL must be an http(s) URL, got '{}'",
                self.api_url
            )));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.github.com").expect("Default API URL must be valid")
}

fn default_timeout() -> u64 {
    30
}
