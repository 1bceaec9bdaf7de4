use std::sync::{Arc, Mutex};

use crate::token::{StoreError, TokenStore};

/// In-memory TokenStore for testing and platforms without durable storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that starts out holding `token`.
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Arc::new(Mutex::new(Some(token.to_string()))),
        }
    }
}

impl TokenStore for MemoryStore {
    fn token(&self) -> Option<String> {
        self.token.lock().ok()?.clone()
    }

    fn set_token(&self, token: &str) -> Result<(), StoreError> {
        let mut slot = self.token.lock().map_err(|_| StoreError::Unavailable)?;
        *slot = Some(token.to_string());
        Ok(())
    }

    fn clear_token(&self) -> Result<(), StoreError> {
        let mut slot = self.token.lock().map_err(|_| StoreError::Unavailable)?;
        *slot = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let store = MemoryStore::new();
        assert!(store.token().is_none());
        assert!(!store.has_token());
    }

    #[test]
    fn test_set_and_clear() {
        let store = MemoryStore::new();
        store.set_token("abc123").unwrap();
        assert_eq!(store.token().as_deref(), Some("abc123"));

        store.set_token("def456").unwrap();
        assert_eq!(store.token().as_deref(), Some("def456"));

        store.clear_token().unwrap();
        assert!(store.token().is_none());

        // Clearing twice is fine
        store.clear_token().unwrap();
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemoryStore::with_token("shared");
        let other = store.clone();
        other.clear_token().unwrap();
        assert!(!store.has_token());
    }
}
