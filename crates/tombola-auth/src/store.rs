//! Token storage.
//!
//! The bearer token lives in exactly one place. The client and the guard
//! both read it fresh on every use; nothing caches it above the store.

use std::path::{Path, PathBuf};

use parking_lot::RwLock;

/// File name of the persisted token within the data directory.
pub const TOKEN_FILE: &str = "access-token";

/// A place the bearer token can live.
///
/// Injected into the client and the guard rather than reached for globally,
/// so tests can substitute [`MemoryTokenStore`]. Operations are synchronous
/// single reads/writes; storage failures degrade to an absent token or a
/// logged no-op rather than an error.
pub trait TokenStore: Send + Sync + std::fmt::Debug {
    /// Read the current token, if any.
    fn get(&self) -> Option<String>;

    /// Replace the stored token.
    fn set(&self, token: &str);

    /// Delete the stored token.
    fn remove(&self);
}

/// File-backed store: one token in one file under a data directory.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store the token as [`TOKEN_FILE`] under `data_dir`.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(TOKEN_FILE),
        }
    }

    /// Store the token at an explicit path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Get the token file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    fn set(&self, token: &str) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to create token directory");
                return;
            }
        }

        match std::fs::write(&self.path, token) {
            Ok(()) => tracing::debug!(path = %self.path.display(), "Token saved"),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to write token file")
            }
        }
    }

    fn remove(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => tracing::debug!(path = %self.path.display(), "Token removed"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to remove token file")
            }
        }
    }
}

/// In-memory store for tests and embedded callers.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with a token.
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RwLock::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.read().clone()
    }

    fn set(&self, token: &str) {
        *self.token.write() = Some(token.to_string());
    }

    fn remove(&self) {
        *self.token.write() = None;
    }
}
