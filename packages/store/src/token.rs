//! # Persisted session token
//!
//! The client keeps exactly one piece of durable state: the bearer token issued by
//! the backend on login or registration. Its presence is the only signal of "logged
//! in" until the backend confirms or rejects it.
//!
//! [`TokenStore`] abstracts over where that token lives:
//!
//! | Backend | Platform | Location |
//! |---------|----------|----------|
//! | [`crate::LocalStorage`] | web (WASM + `web` feature) | `window.localStorage["token"]` |
//! | [`crate::FileStore`] | native | `<base_dir>/token` |
//! | [`crate::MemoryStore`] | tests, fallback | process memory |
//!
//! Reads never fail: an unreadable backend is reported as "no token", which the
//! session layer treats as anonymous. Writes report failures through [`StoreError`]
//! so the caller can log them.

use thiserror::Error;

/// Key under which the bearer token is persisted.
pub const TOKEN_KEY: &str = "token";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable")]
    Unavailable,

    #[error("storage write failed: {0}")]
    Write(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Durable key/value slot for the session token.
pub trait TokenStore: Clone + 'static {
    /// Current token, if one is persisted.
    fn token(&self) -> Option<String>;

    /// Persist `token`, replacing any previous one.
    fn set_token(&self, token: &str) -> Result<(), StoreError>;

    /// Remove the persisted token. Removing an absent token is not an error.
    fn clear_token(&self) -> Result<(), StoreError>;

    fn has_token(&self) -> bool {
        self.token().is_some()
    }
}
