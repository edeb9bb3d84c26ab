//! Client configuration

use std::path::PathBuf;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_SESSION_FILE: &str = "abocado-session.json";

/// Client configuration for connecting to the Abocado server
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:3000")
    pub base_url: String,

    /// Where the login session is persisted
    pub session_path: PathBuf,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            session_path: PathBuf::from(DEFAULT_SESSION_FILE),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Read `ABOCADO_URL` and `ABOCADO_SESSION_FILE`, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new(get("ABOCADO_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()));
        if let Some(path) = get("ABOCADO_SESSION_FILE") {
            config.session_path = PathBuf::from(path);
        }
        config
    }

    pub fn with_session_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_path = path.into();
        self
    }

    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
