//! Keyed query cache.
//!
//! Each backend read is registered under a [`QueryKey`]. The cache only keeps a
//! version counter per key: [`use_query`] reads the counter, so bumping it with
//! [`QueryCache::invalidate`] makes every resource that depends on that key
//! fetch again.

use std::collections::HashMap;
use std::future::Future;

use api::{with_retries, ApiError, RetryPolicy};
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::client::Client;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Orders,
    Summary,
    RecentOrders,
    Trends,
    PlatformComparison,
    Suggestions,
    AiRecommendations,
}

impl QueryKey {
    /// Keys whose data changes when the order list changes.
    pub const ORDER_DEPENDENT: [QueryKey; 3] =
        [QueryKey::Orders, QueryKey::Summary, QueryKey::RecentOrders];
}

#[derive(Clone, Copy, PartialEq)]
pub struct QueryCache {
    versions: Signal<HashMap<QueryKey, u64>>,
}

impl QueryCache {
    /// Current version of `key`. Reading it subscribes the caller.
    pub fn version(&self, key: QueryKey) -> u64 {
        self.versions.read().get(&key).copied().unwrap_or(0)
    }

    pub fn invalidate(&self, keys: &[QueryKey]) {
        let mut signal = self.versions;
        let mut versions = signal.write();
        for key in keys {
            *versions.entry(*key).or_default() += 1;
        }
        tracing::debug!("invalidated queries {keys:?}");
    }
}

pub fn use_query_cache_provider() -> QueryCache {
    use_context_provider(|| QueryCache {
        versions: Signal::new(HashMap::new()),
    })
}

pub fn use_query_cache() -> QueryCache {
    use_context::<QueryCache>()
}

/// A backend read tied to `key`.
///
/// Failures are retried per `policy`. A 401 is passed to the auth context so the
/// session ends.
pub fn use_query<T, F, Fut>(
    key: QueryKey,
    policy: RetryPolicy,
    fetch: F,
) -> Resource<Result<T, ApiError>>
where
    T: 'static,
    F: Fn(Client) -> Fut + Copy + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let cache = use_query_cache();
    let auth = use_auth();

    use_resource(move || {
        let _version = cache.version(key);
        let auth = auth.clone();
        async move {
            let client = auth.client().clone();
            let result = with_retries(policy, || fetch(client.clone())).await;
            if let Err(e) = &result {
                tracing::error!("{key:?} query failed: {e}");
                auth.handle_error(e);
            }
            result
        }
    })
}

/// Render-friendly snapshot of a query resource.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    Loading,
    Failed(ApiError),
    Ready(T),
}

impl<T> QueryState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            QueryState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }
}

pub fn snapshot<T: Clone + 'static>(resource: &Resource<Result<T, ApiError>>) -> QueryState<T> {
    match resource.read().as_ref() {
        None => QueryState::Loading,
        Some(Ok(value)) => QueryState::Ready(value.clone()),
        Some(Err(e)) => QueryState::Failed(e.clone()),
    }
}
