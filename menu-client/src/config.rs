//! Client configuration

use std::path::PathBuf;

use crate::language::Language;

/// Default MyMemory endpoint
pub const DEFAULT_TRANSLATE_URL: &str = "https://api.mymemory.translated.net/get";

/// Client configuration for connecting to the menu server
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:3000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Directory holding the persisted admin session file
    pub session_dir: PathBuf,

    /// Admin username accepted by [`crate::FixedCredentials`]
    pub admin_username: String,

    /// Admin password accepted by [`crate::FixedCredentials`]
    pub admin_password: String,

    /// Translation endpoint
    pub translate_url: String,

    /// Translation request timeout in seconds
    pub translate_timeout: u64,

    /// Language the client starts in
    pub default_language: Language,
}

impl ClientConfig {
    /// Create a new client configuration with defaults
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            session_dir: PathBuf::from(".menu"),
            admin_username: "admin".to_string(),
            admin_password: "admin123".to_string(),
            translate_url: DEFAULT_TRANSLATE_URL.to_string(),
            translate_timeout: 10,
            default_language: Language::Ar,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set where the admin session file lives
    pub fn with_session_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.session_dir = dir.into();
        self
    }

    /// Override the admin credential pair
    pub fn with_admin_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.admin_username = username.into();
        self.admin_password = password.into();
        self
    }

    /// Point translation at another endpoint
    pub fn with_translate_url(mut self, url: impl Into<String>) -> Self {
        self.translate_url = url.into();
        self
    }

    pub fn with_translate_timeout(mut self, seconds: u64) -> Self {
        self.translate_timeout = seconds;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.default_language = language;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::HttpClient> {
        crate::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3000")
    }
}
