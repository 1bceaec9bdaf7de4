//! # Orders and their emission breakdown
//!
//! | Type | Direction | Purpose |
//! |------|-----------|---------|
//! | [`Order`] | backend → client | A persisted order with its server-computed [`EmissionData`] |
//! | [`NewOrder`] | client → backend | The manual "add order" form |
//! | [`PlatformLogin`] | backend → client | Whether the backend holds a session with a delivery platform |
//! | [`ImportResult`] | backend → client | Outcome of a bulk import |
//!
//! Emission values are computed by the backend only. The client expects
//! `total ≈ transport + packaging + food` but never checks it.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{lenient_count, lenient_f64, string_or_number};

/// Transport / packaging / food decomposition of an order, in kg CO₂.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmissionData {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub transport_emission: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub packaging_emission: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub food_emission: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_emission: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: Option<f64>,
}

impl OrderItem {
    pub fn is_vegetarian(&self) -> bool {
        self.category.as_deref() == Some(FoodCategory::Veg.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantRating {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub aggregate_rating: Option<f64>,
    #[serde(default)]
    pub rating_text: Option<String>,
}

/// An order as stored by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(alias = "_id", default)]
    pub id: String,
    /// The delivery platform's own order number, for imported orders.
    #[serde(default, deserialize_with = "string_or_number")]
    pub order_id: Option<String>,
    #[serde(default)]
    pub restaurant_name: String,
    #[serde(default)]
    pub restaurant_image: Option<String>,
    #[serde(default)]
    pub restaurant_rating: Option<RestaurantRating>,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub order_date: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub order_amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub distance: Option<f64>,
    #[serde(default)]
    pub delivery_address: Option<String>,
    #[serde(default)]
    pub order_status: Option<String>,
    #[serde(default)]
    pub emission_data: Option<EmissionData>,
}

impl Order {
    /// Platform order number when imported, otherwise the backend id.
    pub fn reference(&self) -> &str {
        self.order_id.as_deref().unwrap_or(&self.id)
    }

    /// Parsed `orderDate`. Accepts full RFC 3339 timestamps and bare dates.
    pub fn ordered_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(self.order_date.as_deref()?)
    }

    pub fn total_emission(&self) -> Option<f64> {
        self.emission_data.as_ref()?.total_emission
    }
}

/// Parse a backend timestamp: full RFC 3339 or a bare `YYYY-MM-DD`.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(raw.get(..10)?, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

/// Delivery platform choices offered by the manual order form.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum OrderPlatform {
    #[default]
    Swiggy,
    Zomato,
    Other,
}

impl OrderPlatform {
    pub const ALL: [OrderPlatform; 3] = [
        OrderPlatform::Swiggy,
        OrderPlatform::Zomato,
        OrderPlatform::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderPlatform::Swiggy => "Swiggy",
            OrderPlatform::Zomato => "Zomato",
            OrderPlatform::Other => "Other",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "Zomato" => OrderPlatform::Zomato,
            "Other" => OrderPlatform::Other,
            _ => OrderPlatform::Swiggy,
        }
    }
}

impl fmt::Display for OrderPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum FoodCategory {
    #[default]
    #[serde(rename = "veg")]
    Veg,
    #[serde(rename = "non-veg")]
    NonVeg,
}

impl FoodCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodCategory::Veg => "veg",
            FoodCategory::NonVeg => "non-veg",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FoodCategory::Veg => "Vegetarian",
            FoodCategory::NonVeg => "Non-Vegetarian",
        }
    }

    pub fn parse(s: &str) -> Self {
        if s == "non-veg" {
            FoodCategory::NonVeg
        } else {
            FoodCategory::Veg
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewFoodItem {
    pub name: String,
    pub quantity: u32,
    pub category: FoodCategory,
}

impl Default for NewFoodItem {
    fn default() -> Self {
        Self {
            name: String::new(),
            quantity: 1,
            category: FoodCategory::Veg,
        }
    }
}

/// Body of `POST /orders`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub restaurant_name: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub food_items: Vec<NewFoodItem>,
    pub distance: f64,
    pub price: f64,
    pub platform: OrderPlatform,
}

impl NewOrder {
    /// First problem that keeps the form from being submitted, if any.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.restaurant_name.trim().is_empty() {
            return Err("Restaurant name is required");
        }
        if NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").is_err() {
            return Err("Please enter a valid order date");
        }
        if self.food_items.is_empty() {
            return Err("Add at least one food item");
        }
        if self.food_items.iter().any(|item| item.name.trim().is_empty()) {
            return Err("Every food item needs a name");
        }
        if self.food_items.iter().any(|item| item.quantity == 0) {
            return Err("Quantities must be at least 1");
        }
        if !self.distance.is_finite() || self.distance < 0.0 {
            return Err("Distance must be a positive number");
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err("Price must be a positive number");
        }
        Ok(())
    }
}

/// Response of `GET /orders/zomato` and `GET /orders/swiggy`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlatformLogin {
    #[serde(default)]
    pub is_logged_in: bool,
}

/// Response of the bulk import endpoints.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    #[serde(default, deserialize_with = "lenient_count")]
    pub imported_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_result_count_is_lenient() {
        let result: ImportResult = serde_json::from_str(r#"{"importedCount": "3"}"#).unwrap();
        assert_eq!(result.imported_count, 3);
        let result: ImportResult = serde_json::from_str(r#"{"importedCount": null}"#).unwrap();
        assert_eq!(result.imported_count, 0);
        let result: ImportResult = serde_json::from_str(r#"{"message": "ok"}"#).unwrap();
        assert_eq!(result.imported_count, 0);
    }

    #[test]
    fn test_decodes_loose_order() {
        let order: Order = serde_json::from_str(
            r#"{
                "_id": "abc",
                "orderId": 987654,
                "restaurantName": "Dosa Point",
                "platform": "Zomato",
                "orderDate": "2024-05-02T12:30:00.000Z",
                "items": [{"name": "Masala Dosa", "quantity": "2", "category": "veg"}],
                "orderAmount": "249.5",
                "emissionData": {"transportEmission": 0.4, "packagingEmission": 0.1, "foodEmission": 0.9, "totalEmission": 1.4}
            }"#,
        )
        .unwrap();
        assert_eq!(order.id, "abc");
        assert_eq!(order.reference(), "987654");
        assert_eq!(order.order_amount, Some(249.5));
        assert_eq!(order.items[0].quantity, Some(2.0));
        assert!(order.items[0].is_vegetarian());
        assert_eq!(order.total_emission(), Some(1.4));
        assert_eq!(
            order.ordered_at().unwrap().date_naive(),
            NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()
        );
    }

    #[test]
    fn test_sparse_order_decodes() {
        let order: Order = serde_json::from_str(r#"{"_id":"x","orderAmount":null}"#).unwrap();
        assert_eq!(order.reference(), "x");
        assert!(order.emission_data.is_none());
        assert!(order.ordered_at().is_none());
        assert!(order.total_emission().is_none());
    }

    #[test]
    fn test_bare_date_parses() {
        let ts = parse_timestamp("2024-01-15").unwrap();
        assert_eq!(ts.date_naive(), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn test_new_order_wire_shape() {
        let order = NewOrder {
            restaurant_name: "Green Bowl".into(),
            date: "2024-06-01".into(),
            food_items: vec![NewFoodItem {
                name: "Salad".into(),
                quantity: 2,
                category: FoodCategory::NonVeg,
            }],
            distance: 3.5,
            price: 180.0,
            platform: OrderPlatform::Zomato,
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["restaurantName"], "Green Bowl");
        assert_eq!(json["foodItems"][0]["category"], "non-veg");
        assert_eq!(json["platform"], "Zomato");
        assert!(order.validate().is_ok());
    }

    #[test]
    fn test_new_order_validation() {
        let mut order = NewOrder {
            restaurant_name: "  ".into(),
            date: "2024-06-01".into(),
            food_items: vec![NewFoodItem::default()],
            distance: 1.0,
            price: 10.0,
            platform: OrderPlatform::Other,
        };
        assert_eq!(order.validate(), Err("Restaurant name is required"));

        order.restaurant_name = "Cafe".into();
        assert_eq!(order.validate(), Err("Every food item needs a name"));

        order.food_items[0].name = "Tea".into();
        order.date = "06/01/2024".into();
        assert_eq!(order.validate(), Err("Please enter a valid order date"));

        order.date = "2024-06-01".into();
        order.distance = -2.0;
        assert_eq!(order.validate(), Err("Distance must be a positive number"));
    }
}
