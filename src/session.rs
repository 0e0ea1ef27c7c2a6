//! Bearer-token session storage.
//!
//! The listing service hands out an opaque bearer token on login. This module
//! holds that token between requests: [`TokenStore`] is the seam, with a
//! file-backed implementation for real use and an in-memory one for tests and
//! throwaway sessions. The token is treated as an opaque string; no expiry is
//! tracked client-side. An expired session is only discovered when a request
//! comes back 401/403.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{Error, Result};

/// Storage for the session's bearer token.
///
/// At most one token is bound at a time; `set` replaces any prior token.
/// Implementations must make `get` infallible: if the backing storage cannot
/// be read, the store reports no session rather than failing.
pub trait TokenStore: Send + Sync {
    /// Returns the currently bound token, or `None` if no session is bound.
    fn get(&self) -> Option<String>;

    /// Binds the given token as current, overwriting any prior token.
    fn set(&self, token: &str) -> Result<()>;

    /// Removes any bound token. Idempotent: clearing an empty store
    /// succeeds.
    fn clear(&self) -> Result<()>;
}

/// A token store persisted as a single file holding the raw token string.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Creates a store backed by the given file path. The file need not
    /// exist yet; it is created on the first `set`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store at the default per-user location
    /// (`<data dir>/coastline/token`).
    pub fn default_location() -> Result<Self> {
        let base = dirs::data_dir()
            .ok_or_else(|| Error::configuration("Could not determine a user data directory"))?;
        Ok(Self::new(base.join("coastline").join("token")))
    }

    /// The path backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        let contents = fs::read_to_string(&self.path).ok()?;
        let token = contents.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    fn set(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::io(format!("Failed to create {}", parent.display()), e))?;
        }
        fs::write(&self.path, token)
            .map_err(|e| Error::io(format!("Failed to write {}", self.path.display()), e))
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::io(
                format!("Failed to remove {}", self.path.display()),
                e,
            )),
        }
    }
}

/// An in-memory token store. Nothing is persisted beyond the process.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-bound to the given token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.lock().expect("token store lock poisoned").clone()
    }

    fn set(&self, token: &str) -> Result<()> {
        *self.token.lock().expect("token store lock poisoned") = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.lock().expect("token store lock poisoned") = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_set_then_get() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get(), None);

        store.set("tok-123").unwrap();
        assert_eq!(store.get(), Some("tok-123".to_string()));

        store.set("tok-456").unwrap();
        assert_eq!(store.get(), Some("tok-456".to_string()));
    }

    #[test]
    fn memory_store_clear_is_idempotent() {
        let store = MemoryTokenStore::with_token("tok-123");
        store.clear().unwrap();
        assert_eq!(store.get(), None);

        store.clear().unwrap();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");

        let store = FileTokenStore::new(&path);
        assert_eq!(store.get(), None);

        store.set("tok-abc").unwrap();
        assert_eq!(store.get(), Some("tok-abc".to_string()));

        // A second store on the same path sees the persisted token.
        let other = FileTokenStore::new(&path);
        assert_eq!(other.get(), Some("tok-abc".to_string()));
    }

    #[test]
    fn file_store_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");

        let store = FileTokenStore::new(&path);
        store.clear().unwrap();

        store.set("tok-abc").unwrap();
        store.clear().unwrap();
        assert_eq!(store.get(), None);
        store.clear().unwrap();
    }

    #[test]
    fn file_store_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("token");

        let store = FileTokenStore::new(&path);
        store.set("tok-abc").unwrap();
        assert_eq!(store.get(), Some("tok-abc".to_string()));
    }

    #[test]
    fn file_store_ignores_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        std::fs::write(&path, "tok-abc\n").unwrap();

        let store = FileTokenStore::new(&path);
        assert_eq!(store.get(), Some("tok-abc".to_string()));
    }

    #[test]
    fn file_store_empty_file_means_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        std::fs::write(&path, "").unwrap();

        let store = FileTokenStore::new(&path);
        assert_eq!(store.get(), None);
    }
}
