//! Wire models for the CarbonTrack backend.
//!
//! The backend is a JavaScript service: fields are camelCase, documents carry
//! `_id`, and numeric fields are sometimes missing or sent as strings. Every
//! model here tolerates that, so a sparse response renders as zeros instead of
//! failing to decode.

mod auth;
mod insights;
mod order;
mod user;

pub use auth::{AuthResponse, Credentials, Registration};
pub use insights::{
    AiRecommendations, ItemRecommendation, OrderRecommendationSet, OrderRecommendations,
    PlatformComparison, PlatformStats, RecentOrderRef, RecommendationBlock, Suggestion, Summary,
    TrendPoint,
};
pub use order::{
    EmissionData, FoodCategory, ImportResult, NewFoodItem, NewOrder, Order, OrderItem,
    OrderPlatform, PlatformLogin, RestaurantRating, parse_timestamp,
};
pub use user::User;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept a string, a number or nothing, and keep it as text.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Accept a number, a numeric string or nothing.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Accept a count as an integer, a whole float, a numeric string or nothing.
pub(crate) fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = lenient_f64(deserializer)?;
    Ok(number.filter(|n| n.is_finite() && *n >= 0.0).map(|n| n as u64))
}

/// Like [`lenient_u64`], but a missing count is zero.
pub(crate) fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_u64(deserializer)?.unwrap_or(0))
}
