//! Runtime configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Backend used when no URL is configured.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Environment variable read by the command line for the backend URL.
pub const API_URL_ENV: &str = "MATHSCOPE_API_URL";

/// Image export settings.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Directory PNG files are written to.
    pub dir: PathBuf,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            width: 1280,
            height: 720,
        }
    }
}

/// Resolved application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the computation backend, without trailing slash.
    pub api_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Image export settings.
    pub export: ExportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(10),
            export: ExportConfig::default(),
        }
    }
}

impl Config {
    /// Create a configuration for the given backend.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: normalize_url(api_url.into()),
            ..Self::default()
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the export directory.
    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export.dir = dir.into();
        self
    }

    /// Full URL for an API path such as `/api/solve`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}

fn normalize_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = Config::new("http://localhost:5000/");
        assert_eq!(
            config.endpoint("/api/solve"),
            "http://localhost:5000/api/solve"
        );
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!((config.export.width, config.export.height), (1280, 720));
    }
}
