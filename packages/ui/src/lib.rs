//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod client;
pub use client::{make_client, Client, ClientStore};

pub mod format;
pub mod insights;
pub mod queries;
pub use queries::{use_query, use_query_cache, use_query_cache_provider, QueryCache, QueryKey};

pub mod views;

pub const VIEWS_CSS: Asset = asset!("/src/views/views.css");

mod navbar;
pub use navbar::Navbar;

mod auth;
pub use auth::{use_api, use_auth, AuthContext, AuthProvider, LogoutButton};

mod private_route;
pub use private_route::{PrivateRoute, Spinner};

mod order_import;
pub use order_import::OrderImport;

mod recommendations;
pub use recommendations::{AiRecommendationsPanel, OrderRecommendationsPanel};
