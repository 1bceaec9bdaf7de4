//! Shared API client constructor for all platforms.
//!
//! Returns an [`api::ApiClient`] backed by the appropriate [`store::TokenStore`]:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorage`]
//! - **Native**: filesystem via [`store::FileStore`] under `<data_dir>/carbontrack/`
//! - **Unit tests**: [`store::MemoryStore`], so component tests never touch disk

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type ClientStore = store::LocalStorage;

#[cfg(all(not(all(target_arch = "wasm32", feature = "web")), not(test)))]
pub type ClientStore = store::FileStore;

#[cfg(all(not(all(target_arch = "wasm32", feature = "web")), test))]
pub type ClientStore = store::MemoryStore;

pub type Client = api::ApiClient<ClientStore>;

/// Create a platform-appropriate client pointed at the configured backend.
pub fn make_client() -> Client {
    let config = store::ClientConfig::from_env();
    tracing::debug!("using API at {}", config.api.base_url);

    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        api::ApiClient::new(&config, store::LocalStorage)
    }
    #[cfg(all(not(all(target_arch = "wasm32", feature = "web")), not(test)))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("carbontrack");
        api::ApiClient::new(&config, store::FileStore::new(base))
    }
    #[cfg(all(not(all(target_arch = "wasm32", feature = "web")), test))]
    {
        api::ApiClient::new(&config, store::MemoryStore::new())
    }
}
