//! Aggregate read models served under `/insights/*` and
//! `/orders/:id/recommendations`. The client never mutates these.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::order::parse_timestamp;
use super::{lenient_count, lenient_f64, lenient_u64, string_or_number};

/// `GET /insights/summary`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_emission: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub transport_emission: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub transport_percentage: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub packaging_emission: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub packaging_percentage: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub food_emission: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub food_percentage: Option<f64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub order_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub average_emission_per_order: Option<f64>,
    /// Emission level the user started from; missing for new accounts.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub baseline_emission: Option<f64>,
}

/// One point of `GET /insights/trends`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    #[serde(default)]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_emission: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub transport_emission: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub packaging_emission: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub food_emission: Option<f64>,
}

impl TrendPoint {
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.date)
    }
}

/// Per-platform aggregate inside `GET /insights/platform-comparison`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    #[serde(default, deserialize_with = "lenient_count")]
    pub order_count: u64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_emission: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub average_emission: Option<f64>,
}

/// Platform name → stats.
pub type PlatformComparison = BTreeMap<String, PlatformStats>;

/// One entry of `GET /insights/suggestions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// `food`, `distance` or `packaging`.
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub potential_savings: Option<String>,
}

impl Suggestion {
    /// `"food"` → `"Food Improvement"`.
    pub fn title(&self) -> String {
        let mut chars = self.kind.chars();
        match chars.next() {
            Some(first) => format!("{}{} Improvement", first.to_uppercase(), chars.as_str()),
            None => "Improvement".to_string(),
        }
    }
}

/// A message with supporting tips, as produced by the recommendation engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationBlock {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecommendation {
    #[serde(default)]
    pub item_name: String,
    /// `high`, `medium` or `low`.
    #[serde(default)]
    pub emission_impact: Option<String>,
    #[serde(default)]
    pub tips: Vec<String>,
    /// Lower-emission dishes to try instead.
    #[serde(default)]
    pub alternatives: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecommendationSet {
    #[serde(default)]
    pub overall: Option<RecommendationBlock>,
    #[serde(default)]
    pub items: Vec<ItemRecommendation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecentOrderRef {
    #[serde(default)]
    pub restaurant_name: String,
    #[serde(default)]
    pub date: Option<String>,
}

/// `GET /insights/ai-recommendations`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AiRecommendations {
    #[serde(default)]
    pub overall: Option<RecommendationBlock>,
    #[serde(default)]
    pub recent_order: Option<RecentOrderRef>,
    #[serde(default)]
    pub recent_order_recommendations: Option<OrderRecommendationSet>,
}

/// `GET /orders/:id/recommendations`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecommendations {
    #[serde(default)]
    pub recommendations: OrderRecommendationSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_tolerates_missing_fields() {
        let summary: Summary =
            serde_json::from_str(r#"{"totalEmission": 12.5, "foodPercentage": null}"#).unwrap();
        assert_eq!(summary.total_emission, Some(12.5));
        assert_eq!(summary.food_percentage, None);
        assert_eq!(summary.order_count, None);
    }

    #[test]
    fn test_counts_accept_strings_and_floats() {
        let summary: Summary = serde_json::from_str(r#"{"orderCount": "7"}"#).unwrap();
        assert_eq!(summary.order_count, Some(7));
        let summary: Summary = serde_json::from_str(r#"{"orderCount": 4.0}"#).unwrap();
        assert_eq!(summary.order_count, Some(4));
        let summary: Summary = serde_json::from_str(r#"{"orderCount": null}"#).unwrap();
        assert_eq!(summary.order_count, None);

        let stats: PlatformStats = serde_json::from_str(r#"{"orderCount": "2"}"#).unwrap();
        assert_eq!(stats.order_count, 2);
    }

    #[test]
    fn test_platform_comparison_decodes_as_map() {
        let cmp: PlatformComparison = serde_json::from_str(
            r#"{"Zomato":{"orderCount":3,"totalEmission":6.0,"averageEmission":2.0},"Swiggy":{"orderCount":1}}"#,
        )
        .unwrap();
        assert_eq!(cmp.len(), 2);
        assert_eq!(cmp["Zomato"].average_emission, Some(2.0));
        assert_eq!(cmp["Swiggy"].total_emission, None);
    }

    #[test]
    fn test_suggestion_title() {
        let suggestion: Suggestion = serde_json::from_str(
            r#"{"type":"packaging","message":"Skip cutlery","potentialSavings":"0.3 kg CO2"}"#,
        )
        .unwrap();
        assert_eq!(suggestion.title(), "Packaging Improvement");
        assert_eq!(suggestion.potential_savings.as_deref(), Some("0.3 kg CO2"));
    }

    #[test]
    fn test_ai_recommendations_shape() {
        let recs: AiRecommendations = serde_json::from_str(
            r#"{
                "overall": {"message": "Try more veg", "tips": ["a", "b"]},
                "recentOrder": {"restaurantName": "Biryani House", "date": "2024-04-01"},
                "recentOrderRecommendations": {
                    "overall": {"message": "Heavy on meat"},
                    "items": [{"itemName": "Mutton Biryani", "emissionImpact": "high", "tips": ["Swap for veg biryani"]}]
                }
            }"#,
        )
        .unwrap();
        assert_eq!(recs.overall.unwrap().tips.len(), 2);
        let set = recs.recent_order_recommendations.unwrap();
        assert_eq!(set.items[0].emission_impact.as_deref(), Some("high"));
        assert!(set.overall.unwrap().tips.is_empty());
    }
}
