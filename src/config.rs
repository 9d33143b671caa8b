use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_TERMINOLOGY_BASE_URL: &str =
    "https://ayusandhi-backend.vercel.app/api/v1/terminology";
pub const DEFAULT_SCAN_BASE_URL: &str = "https://namaste-te4u.onrender.com/api/v2";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const APP_DIR_NAME: &str = "ayusandhi";
const HISTORY_FILE_NAME: &str = "scan_history.json";
const LOG_FILE_NAME: &str = "ayusandhi.log";

/// Endpoints and local paths shared by the CLI and the interactive UI
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub terminology_base_url: String,
    pub scan_base_url: String,
    pub timeout: Duration,
    pub history_path: PathBuf,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            terminology_base_url: DEFAULT_TERMINOLOGY_BASE_URL.to_string(),
            scan_base_url: DEFAULT_SCAN_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            history_path: default_history_path(),
        }
    }
}

impl ApiConfig {
    pub fn with_terminology_base_url(mut self, url: impl Into<String>) -> Self {
        self.terminology_base_url = normalize_base_url(url.into());
        self
    }

    pub fn with_scan_base_url(mut self, url: impl Into<String>) -> Self {
        self.scan_base_url = normalize_base_url(url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_history_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.history_path = path.into();
        self
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

/// Per-user data directory, falling back to the working directory
pub fn app_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(".").join(APP_DIR_NAME))
}

pub fn default_history_path() -> PathBuf {
    app_data_dir().join(HISTORY_FILE_NAME)
}

pub fn default_log_path() -> PathBuf {
    app_data_dir().join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_fixed_service_urls() {
        let config = ApiConfig::default();
        assert_eq!(config.terminology_base_url, DEFAULT_TERMINOLOGY_BASE_URL);
        assert_eq!(config.scan_base_url, DEFAULT_SCAN_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.history_path.ends_with("scan_history.json"));
    }

    #[test]
    fn test_base_urls_drop_trailing_slashes() {
        let config = ApiConfig::default()
            .with_terminology_base_url("http://localhost:3000/api/v1/terminology/")
            .with_scan_base_url("http://localhost:4000//");

        assert_eq!(
            config.terminology_base_url,
            "http://localhost:3000/api/v1/terminology"
        );
        assert_eq!(config.scan_base_url, "http://localhost:4000");
    }
}
