//! Admin Session Guard
//!
//! Gatekeeps the admin screens on the client. The credential check sits
//! behind [`Authenticator`]; the logged-in flag survives restarts through a
//! small JSON file ([`SessionStorage`]). There is no server-side session.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name of the persisted session inside the session directory
pub const SESSION_FILE: &str = "admin_session.json";

/// Username / password pair typed into the login form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Opaque proof of a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    pub token: String,
    pub username: String,
    /// Epoch millis
    pub issued_at: i64,
}

impl SessionToken {
    pub fn issue(username: impl Into<String>) -> Self {
        Self {
            token: uuid::Uuid::new_v4().to_string(),
            username: username.into(),
            issued_at: shared::util::now_millis(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// Credential check
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, credentials: &Credentials) -> Result<SessionToken, AuthError>;
}

/// Single fixed username/password pair
#[derive(Debug, Clone)]
pub struct FixedCredentials {
    username: String,
    password: String,
}

impl FixedCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn from_config(config: &crate::ClientConfig) -> Self {
        Self::new(&config.admin_username, &config.admin_password)
    }
}

impl Default for FixedCredentials {
    fn default() -> Self {
        Self::new("admin", "admin123")
    }
}

impl Authenticator for FixedCredentials {
    fn authenticate(&self, credentials: &Credentials) -> Result<SessionToken, AuthError> {
        if credentials.username == self.username && credentials.password == self.password {
            Ok(SessionToken::issue(&credentials.username))
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

/// One JSON document in a file, the client's analogue of browser local
/// storage. Holds the admin session and the chosen language.
#[derive(Debug, Clone)]
pub struct SessionStorage {
    path: PathBuf,
}

impl SessionStorage {
    /// 创建会话存储
    pub fn new(base_path: impl Into<PathBuf>, filename: &str) -> Self {
        let path = base_path.into().join(filename);
        Self { path }
    }

    /// 确保目录存在
    pub fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// 保存
    pub fn save<T: Serialize>(&self, value: &T) -> std::io::Result<()> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&self.path, json)
    }

    /// 加载 (文件缺失或损坏时返回 None)
    pub fn load<T: DeserializeOwned>(&self) -> Option<T> {
        if !self.path.exists() {
            return None;
        }
        let json = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&json).ok()
    }

    /// 删除
    pub fn delete(&self) -> std::io::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    /// 获取路径
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Guard state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn(SessionToken),
}

/// Admin session state machine: `LoggedOut` <-> `LoggedIn`
pub struct AdminSession<A: Authenticator = FixedCredentials> {
    authenticator: A,
    storage: SessionStorage,
    state: SessionState,
}

impl<A: Authenticator> AdminSession<A> {
    /// Restore from storage: a readable session file means logged in
    pub fn restore(authenticator: A, storage: SessionStorage) -> Self {
        let state = match storage.load::<SessionToken>() {
            Some(token) => {
                tracing::debug!(username = %token.username, "Restored admin session");
                SessionState::LoggedIn(token)
            }
            None => SessionState::LoggedOut,
        };
        Self {
            authenticator,
            storage,
            state,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.state, SessionState::LoggedIn(_))
    }

    pub fn token(&self) -> Option<&SessionToken> {
        match &self.state {
            SessionState::LoggedIn(token) => Some(token),
            SessionState::LoggedOut => None,
        }
    }

    /// Check credentials; on success move to `LoggedIn` and persist.
    ///
    /// A failed attempt leaves the current state untouched. A session file
    /// that cannot be written only costs persistence, not the login.
    pub fn login(&mut self, credentials: &Credentials) -> Result<SessionToken, AuthError> {
        let token = match self.authenticator.authenticate(credentials) {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(username = %credentials.username, "Admin login rejected");
                return Err(e);
            }
        };

        if let Err(e) = self.storage.save(&token) {
            tracing::warn!(error = %e, path = %self.storage.path().display(), "Failed to persist admin session");
        }
        tracing::info!(username = %token.username, "Admin logged in");

        self.state = SessionState::LoggedIn(token.clone());
        Ok(token)
    }

    /// Back to `LoggedOut` and forget the persisted session
    pub fn logout(&mut self) {
        if let Err(e) = self.storage.delete() {
            tracing::warn!(error = %e, "Failed to remove admin session file");
        }
        if self.is_logged_in() {
            tracing::info!("Admin logged out");
        }
        self.state = SessionState::LoggedOut;
    }
}

impl AdminSession<FixedCredentials> {
    /// Guard configured from [`crate::ClientConfig`]
    pub fn from_config(config: &crate::ClientConfig) -> Self {
        Self::restore(
            FixedCredentials::from_config(config),
            SessionStorage::new(&config.session_dir, SESSION_FILE),
        )
    }
}
