//! # Browser `localStorage` token store
//!
//! [`LocalStorage`] is the [`TokenStore`] used on the **web platform**. The token
//! is kept under the key [`TOKEN_KEY`] so it survives reloads and is shared by all
//! tabs of the same origin.
//!
//! A fresh `web_sys::Storage` handle is looked up on every call; the browser hands
//! back the same underlying object, so there is nothing to cache. When storage is
//! unavailable (private mode, disabled cookies) reads yield `None` and writes
//! return [`StoreError::Unavailable`].

use crate::token::{StoreError, TokenStore, TOKEN_KEY};

#[derive(Clone, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TokenStore for LocalStorage {
    fn token(&self) -> Option<String> {
        Self::storage()?.get_item(TOKEN_KEY).ok()?
    }

    fn set_token(&self, token: &str) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(TOKEN_KEY, token)
            .map_err(|e| StoreError::Write(format!("{e:?}")))
    }

    fn clear_token(&self) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;
        storage
            .remove_item(TOKEN_KEY)
            .map_err(|e| StoreError::Write(format!("{e:?}")))
    }
}
