//! Centralized configuration.
//!
//! The page runs in a browser, so there is no process environment to read at
//! runtime. The proxy origin is baked in at compile time from `MUSIC_PROXY_URL`
//! (or a `.env` file next to this crate) and falls back to the public proxy.

use std::sync::LazyLock;

/// Origin of the public music proxy.
pub const DEFAULT_PROXY_URL: &str = "https://music-proxy.onrender.com";

/// Number of skeleton cards shown while a fetch is in flight.
pub const PLACEHOLDER_COUNT: usize = 12;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the music proxy (default: [`DEFAULT_PROXY_URL`])
    pub proxy_url: String,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::with_override(option_env!("MUSIC_PROXY_URL"))
    }

    fn with_override(proxy_url: Option<&str>) -> Self {
        let proxy_url = proxy_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_PROXY_URL)
            .to_string();
        Self { proxy_url }
    }

    /// Get the proxy base URL.
    pub fn proxy_url(&self) -> &str {
        &self.proxy_url
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_override(None)
    }
}

/// Global application configuration, resolved once.
pub static CONFIG: LazyLock<AppConfig> = LazyLock::new(AppConfig::from_build_env);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_public_proxy() {
        assert_eq!(AppConfig::default().proxy_url(), DEFAULT_PROXY_URL);
    }

    #[test]
    fn test_blank_override_is_ignored() {
        assert_eq!(
            AppConfig::with_override(Some("  ")).proxy_url(),
            DEFAULT_PROXY_URL
        );
        assert_eq!(
            AppConfig::with_override(Some("http://localhost:8080")).proxy_url(),
            "http://localhost:8080"
        );
    }
}
