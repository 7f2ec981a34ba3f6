use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Token pair as persisted on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
struct StoredTokens {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    refresh_token: Option<String>,
}

/// Credential store for the current session.
///
/// Holds the access/refresh token pair behind a lock and mirrors every
/// change to a JSON file so a restart picks the session back up. The
/// store is injected into [`super::client::ApiClient`] rather than being
/// process-global, so tests can run isolated sessions side by side.
pub struct Session {
    tokens: RwLock<StoredTokens>,
    path: Option<PathBuf>,
}

impl Session {
    /// Load a session from `path`, starting empty if the file is missing
    /// or unreadable.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let tokens = std::fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();
        Self {
            tokens: RwLock::new(tokens),
            path: Some(path),
        }
    }

    /// A session that is never written to disk. Used in tests.
    pub fn in_memory() -> Self {
        Self {
            tokens: RwLock::new(StoredTokens::default()),
            path: None,
        }
    }

    /// Default on-disk location, next to the executable's working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("./teamtracker-session.json")
    }

    pub fn access_token(&self) -> Option<String> {
        self.tokens.read().access_token.clone()
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.tokens.read().refresh_token.clone()
    }

    /// True when an access token is present. Says nothing about whether the
    /// backend still accepts it.
    pub fn is_authenticated(&self) -> bool {
        self.tokens.read().access_token.is_some()
    }

    /// Store a fresh credential pair after login.
    pub fn set_pair(&self, access: &str, refresh: &str) {
        {
            let mut tokens = self.tokens.write();
            tokens.access_token = Some(access.to_string());
            tokens.refresh_token = Some(refresh.to_string());
        }
        self.persist();
    }

    /// Replace only the access token. The refresh token stays as issued;
    /// the backend does not rotate it.
    pub fn set_access_token(&self, access: &str) {
        {
            let mut tokens = self.tokens.write();
            tokens.access_token = Some(access.to_string());
        }
        self.persist();
    }

    /// Drop both tokens, ending the session.
    pub fn clear(&self) {
        *self.tokens.write() = StoredTokens::default();
        self.persist();
    }

    fn persist(&self) {
        let Some(path) = &self.path else {
            return;
        };
        let snapshot = self.tokens.read().clone();
        match serde_json::to_string_pretty(&snapshot) {
            Ok(content) => {
                if let Err(e) = std::fs::write(path, content) {
                    tracing::warn!(error = %e, path = %path.display(), "failed to persist session");
                }
            }
            Err(e) => tracing::warn!(error = %e, "failed to serialize session"),
        }
    }
}
