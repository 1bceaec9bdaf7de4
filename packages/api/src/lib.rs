//! # API crate: REST client for the CarbonTrack backend
//!
//! Everything the frontends need to talk to the backend lives here, with no UI
//! dependencies, so it can be exercised from plain async tests.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: one method per backend endpoint, bearer-token injection, 401 token clearing |
//! | [`error`] | [`ApiError`] taxonomy (network, unauthorized, API, decode) |
//! | [`models`] | Wire types (`User`, `Order`, `Summary`, ...) with camelCase JSON |
//! | [`session`] | [`Session`] state machine, login/register/logout, route access decision |
//! | [`import`] | Order-import reconciler for pasted Zomato / Swiggy payloads |
//! | [`query`] | Retry policy shared by read queries |
//!
//! ## Endpoints
//!
//! - **Auth**: `register`, `login`, `current_user`
//! - **Orders**: `create_order`, `list_orders`, `get_order`, `delete_order`,
//!   `check_zomato_login`, `fetch_zomato_orders`, `import_zomato_orders`,
//!   `check_swiggy_login`, `fetch_swiggy_orders`, `import_swiggy_orders`,
//!   `order_recommendations`
//! - **Insights**: `summary`, `trends`, `platform_comparison`, `suggestions`,
//!   `ai_recommendations`

pub mod client;
pub mod error;
pub mod import;
pub mod models;
pub mod query;
pub mod session;

#[cfg(test)]
mod testing;

pub use client::ApiClient;
pub use error::{ApiError, NETWORK_ERROR_MESSAGE};
pub use import::{ImportError, ImportPayload, ImportPlatform, Reconciled};
pub use models::{
    AiRecommendations, AuthResponse, Credentials, EmissionData, FoodCategory, ImportResult,
    NewFoodItem, NewOrder, Order, OrderItem, OrderPlatform, OrderRecommendations,
    PlatformComparison, PlatformLogin, PlatformStats, RecommendationBlock, Registration,
    Suggestion, Summary, TrendPoint, User,
};
pub use query::{with_retries, RetryPolicy};
pub use session::{Access, Session};
