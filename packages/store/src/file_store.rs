//! # Filesystem-backed token store
//!
//! [`FileStore`] persists the session token as a single file so native builds keep
//! the user signed in across restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── token        # raw bearer token, no trailing newline
//! ```
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/carbontrack/` |
//! | Linux | `~/.local/share/carbontrack/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\carbontrack\` |
//!
//! [`dirs::data_dir()`]: https://docs.rs/dirs

use std::path::PathBuf;

use crate::token::{StoreError, TokenStore, TOKEN_KEY};

/// Filesystem-backed TokenStore for native targets.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn token_path(&self) -> PathBuf {
        self.base.join(TOKEN_KEY)
    }
}

impl TokenStore for FileStore {
    fn token(&self) -> Option<String> {
        let raw = std::fs::read_to_string(self.token_path()).ok()?;
        let token = raw.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    fn set_token(&self, token: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(self.token_path(), token)?;
        Ok(())
    }

    fn clear_token(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(self.token_path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dir_reads_as_no_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("carbontrack"));
        assert!(store.token().is_none());
    }

    #[test]
    fn test_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("carbontrack");

        FileStore::new(base.clone()).set_token("jwt.token.value").unwrap();

        let reopened = FileStore::new(base.clone());
        assert_eq!(reopened.token().as_deref(), Some("jwt.token.value"));
        assert!(base.join("token").exists());
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        store.set_token("abc").unwrap();
        store.clear_token().unwrap();
        assert!(store.token().is_none());
        assert!(!dir.path().join("token").exists());

        // Clearing a missing token is a no-op
        store.clear_token().unwrap();
    }

    #[test]
    fn test_blank_file_is_no_token() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("token"), "  \n").unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(store.token().is_none());
    }
}
