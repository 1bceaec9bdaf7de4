//! # Importing pasted order history
//!
//! Users copy the JSON their delivery platform's website loads for the order
//! history page and paste it into the import box. Zomato has shipped that
//! payload in several shapes, so [`reconcile_zomato`] looks for the order list
//! in a fixed order of places:
//!
//! 1. `entities.ORDER`, an id → order map (its values) or a list
//! 2. the document itself, when it is an array
//! 3. a top-level `data` array
//! 4. the first top-level array whose first element has a truthy `orderId`,
//!    `order_id`, `restaurantName` or `restaurant_name`
//!
//! The first place that matches wins, even if its list turns out to be empty.
//! Swiggy payloads are only checked for valid JSON and forwarded unchanged.
//!
//! [`prepare_import`] is the full client-side gate. If it fails, no request is
//! made.

use std::fmt;

use serde_json::{Map, Value};
use store::TokenStore;
use thiserror::Error;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{ImportResult, PlatformLogin};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportPlatform {
    Zomato,
    Swiggy,
}

impl ImportPlatform {
    pub fn label(&self) -> &'static str {
        match self {
            ImportPlatform::Zomato => "Zomato",
            ImportPlatform::Swiggy => "Swiggy",
        }
    }

    /// Steps for copying the order-history response out of the browser.
    pub fn instructions(&self) -> [&'static str; 6] {
        match self {
            ImportPlatform::Zomato => [
                "Go to Zomato.com and log in to your account",
                "Open the Network tab in your browser's Developer Tools (F12 or Right-click > Inspect)",
                "Navigate to your Orders page on Zomato",
                "In the Network tab, look for a request to 'webroutes/user/orders'",
                "Click on it and go to the Response tab",
                "Copy the entire JSON response and paste it below",
            ],
            ImportPlatform::Swiggy => [
                "Go to Swiggy.com and log in to your account",
                "Open the Network tab in your browser's Developer Tools (F12 or Right-click > Inspect)",
                "Navigate to your Orders page on Swiggy",
                "In the Network tab, look for a request to 'dapi/order/all'",
                "Click on it and go to the Response tab",
                "Copy the entire JSON response and paste it below",
            ],
        }
    }

    pub fn success_message(&self, imported: u64) -> String {
        match self {
            ImportPlatform::Zomato => format!("Successfully imported {imported} orders!"),
            ImportPlatform::Swiggy => format!("Successfully imported {imported} Swiggy orders!"),
        }
    }
}

impl fmt::Display for ImportPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of looking for orders in a pasted Zomato payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Reconciled {
    Recognized(Vec<Value>),
    /// Nothing recognizable, or a recognized list with no entries.
    Empty,
    ParseError(String),
}

/// What gets sent to the import endpoint once the paste passes every check.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportPayload {
    Zomato(Vec<Value>),
    Swiggy(Value),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ImportError {
    #[error("Please paste your {0} orders data")]
    EmptyInput(ImportPlatform),

    #[error("Invalid JSON format. Please make sure you copied the entire response correctly.")]
    InvalidJson(String),

    #[error("No orders found in the provided data. Please make sure you copied the correct response from Zomato.")]
    NoOrdersFound,

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ImportError {
    /// Banner text. Backend failures show the backend's message when it sent one.
    pub fn user_message(&self, platform: ImportPlatform) -> String {
        match self {
            ImportError::Api(e) => e.user_message(match platform {
                ImportPlatform::Zomato => "Failed to import orders",
                ImportPlatform::Swiggy => "Failed to import Swiggy orders",
            }),
            other => other.to_string(),
        }
    }
}

pub fn reconcile_zomato(text: &str) -> Reconciled {
    let parsed: Value = match serde_json::from_str(text) {
        Ok(v) => v,
        Err(e) => return Reconciled::ParseError(e.to_string()),
    };

    let orders = locate_orders(parsed).unwrap_or_default();
    if orders.is_empty() {
        Reconciled::Empty
    } else {
        Reconciled::Recognized(orders)
    }
}

fn locate_orders(parsed: Value) -> Option<Vec<Value>> {
    let mut root = match parsed {
        Value::Array(list) => return Some(list),
        Value::Object(map) => map,
        _ => return None,
    };

    let entity_orders = root
        .get_mut("entities")
        .and_then(|entities| entities.get_mut("ORDER"))
        .map(Value::take);
    match entity_orders {
        Some(Value::Object(by_id)) => return Some(by_id.into_iter().map(|(_, v)| v).collect()),
        Some(Value::Array(list)) => return Some(list),
        _ => {}
    }

    if let Some(Value::Array(list)) = root.get_mut("data").map(Value::take) {
        return Some(list);
    }

    root.into_iter().find_map(|(_, value)| match value {
        Value::Array(list) if list.first().is_some_and(looks_like_order) => Some(list),
        _ => None,
    })
}

fn looks_like_order(item: &Value) -> bool {
    let Value::Object(fields) = item else {
        return false;
    };
    ["orderId", "order_id", "restaurantName", "restaurant_name"]
        .iter()
        .any(|key| truthy(fields, key))
}

fn truthy(fields: &Map<String, Value>, key: &str) -> bool {
    match fields.get(key) {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Client-side checks for a pasted payload.
pub fn prepare_import(platform: ImportPlatform, text: &str) -> Result<ImportPayload, ImportError> {
    if text.trim().is_empty() {
        return Err(ImportError::EmptyInput(platform));
    }

    match platform {
        ImportPlatform::Swiggy => serde_json::from_str(text)
            .map(ImportPayload::Swiggy)
            .map_err(|e| ImportError::InvalidJson(e.to_string())),
        ImportPlatform::Zomato => match reconcile_zomato(text) {
            Reconciled::Recognized(orders) => Ok(ImportPayload::Zomato(orders)),
            Reconciled::Empty => Err(ImportError::NoOrdersFound),
            Reconciled::ParseError(e) => Err(ImportError::InvalidJson(e)),
        },
    }
}

impl<S: TokenStore> ApiClient<S> {
    /// Validate a pasted payload and send it to the platform's import endpoint.
    pub async fn import_pasted(
        &self,
        platform: ImportPlatform,
        text: &str,
    ) -> Result<ImportResult, ImportError> {
        let payload = prepare_import(platform, text).inspect_err(|e| {
            tracing::warn!("{platform} import rejected before sending: {e}");
        })?;

        let result = match &payload {
            ImportPayload::Zomato(orders) => {
                tracing::info!("importing {} Zomato orders", orders.len());
                self.import_zomato_orders(orders).await?
            }
            ImportPayload::Swiggy(data) => {
                tracing::info!("importing Swiggy order payload");
                self.import_swiggy_orders(data).await?
            }
        };
        tracing::info!("{platform} import stored {} orders", result.imported_count);
        Ok(result)
    }

    pub async fn check_platform_login(
        &self,
        platform: ImportPlatform,
    ) -> Result<PlatformLogin, ApiError> {
        match platform {
            ImportPlatform::Zomato => self.check_zomato_login().await,
            ImportPlatform::Swiggy => self.check_swiggy_login().await,
        }
    }

    /// Ask the backend to pull the order history itself, pretty-printed so it
    /// can prefill the import box for review.
    pub async fn fetch_platform_orders(&self, platform: ImportPlatform) -> Result<String, ApiError> {
        let data = match platform {
            ImportPlatform::Zomato => self.fetch_zomato_orders().await?,
            ImportPlatform::Swiggy => self.fetch_swiggy_orders().await?,
        };
        serde_json::to_string_pretty(&data).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
