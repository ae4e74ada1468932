//! Runtime configuration of the web client
//!
//! Values come from compile-time environment variables so a static build can
//! be pointed at a different backend without code changes:
//!
//! - `RAG_API_URL` - backend base URL. When unset, the URL is derived from
//!   the page location with the backend port (`8000`).
//! - `RAG_STATS_POLL_MS` - stats refresh interval in milliseconds, `0` turns
//!   polling off. Defaults to 30 seconds.

use once_cell::sync::Lazy;

pub const DEFAULT_BACKEND_PORT: u16 = 8000;
pub const DEFAULT_STATS_POLL_MS: u32 = 30_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Explicit backend URL, `None` means "same host, backend port"
    pub api_url: Option<String>,
    pub backend_port: u16,
    pub stats_poll_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            backend_port: DEFAULT_BACKEND_PORT,
            stats_poll_ms: DEFAULT_STATS_POLL_MS,
        }
    }
}

impl AppConfig {
    pub fn from_values(api_url: Option<&str>, stats_poll_ms: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_url: api_url
                .map(|s| s.trim().trim_end_matches('/').to_string())
                .filter(|s| !s.is_empty()),
            backend_port: defaults.backend_port,
            stats_poll_ms: stats_poll_ms
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.stats_poll_ms),
        }
    }

    pub fn from_env() -> Self {
        Self::from_values(option_env!("RAG_API_URL"), option_env!("RAG_STATS_POLL_MS"))
    }

    pub fn polling_enabled(&self) -> bool {
        self.stats_poll_ms > 0
    }

    /// Base URL for a page served from `protocol` + `hostname`
    pub fn resolve_api_base(&self, protocol: &str, hostname: &str) -> String {
        match &self.api_url {
            Some(url) => url.clone(),
            None => format!("{}//{}:{}", protocol, hostname, self.backend_port),
        }
    }
}

pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let config = AppConfig::from_env();
    log::info!("app config: {:?}", config);
    config
});

pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = AppConfig::from_values(None, None);
        assert_eq!(c, AppConfig::default());
        assert!(c.polling_enabled());
        assert_eq!(
            c.resolve_api_base("http:", "127.0.0.1"),
            "http://127.0.0.1:8000"
        );
    }

    #[test]
    fn test_explicit_url_wins() {
        let c = AppConfig::from_values(Some("https://rag.example.com/ "), None);
        assert_eq!(
            c.resolve_api_base("http:", "localhost"),
            "https://rag.example.com"
        );
    }

    #[test]
    fn test_blank_url_is_ignored() {
        let c = AppConfig::from_values(Some("  "), None);
        assert_eq!(c.api_url, None);
    }

    #[test]
    fn test_poll_interval() {
        assert!(!AppConfig::from_values(None, Some("0")).polling_enabled());
        assert_eq!(AppConfig::from_values(None, Some("5000")).stats_poll_ms, 5000);
        assert_eq!(
            AppConfig::from_values(None, Some("soon")).stats_poll_ms,
            DEFAULT_STATS_POLL_MS
        );
    }
}
