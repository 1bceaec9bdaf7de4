//! Panels for backend-generated recommendations.

use api::models::{ItemRecommendation, OrderRecommendationSet, RecommendationBlock};
use api::RetryPolicy;
use dioxus::prelude::*;

use crate::format::format_date;
use crate::icons::{FaChevronDown, FaChevronUp, FaCircleCheck, FaMicrochip, FaTriangleExclamation};
use crate::queries::{snapshot, use_query, QueryKey, QueryState};
use crate::{use_api, Icon};

/// Collapsible panel with the user's overall and latest-order recommendations.
#[component]
pub fn AiRecommendationsPanel() -> Element {
    let mut expanded = use_signal(|| true);
    let recommendations = use_query(
        QueryKey::AiRecommendations,
        RetryPolicy::DEFAULT,
        |client| async move { client.ai_recommendations().await },
    );

    let data = match snapshot(&recommendations) {
        QueryState::Loading => {
            return rsx! {
                div { class: "card card--skeleton",
                    div { class: "skeleton-line" }
                    div { class: "skeleton-line skeleton-line--short" }
                }
            };
        }
        QueryState::Failed(_) => {
            return rsx! {
                div { class: "banner banner--error",
                    Icon { icon: FaTriangleExclamation, width: 14, height: 14 }
                    span { "Unable to load AI recommendations" }
                    p { "Please try again later or contact support if the problem persists." }
                }
            };
        }
        QueryState::Ready(data) => data,
    };
    let latest = match (data.recent_order, data.recent_order_recommendations) {
        (Some(order), Some(set)) => Some((
            format_date(order.date.as_deref()),
            order.restaurant_name,
            set,
        )),
        _ => None,
    };

    rsx! {
        div { class: "card recommendations",
            div {
                class: "card-header card-header--clickable",
                onclick: move |_| expanded.set(!expanded()),
                Icon { icon: FaMicrochip, width: 18, height: 18 }
                h3 { "AI-Powered Recommendations" }
                if expanded() {
                    Icon { icon: FaChevronUp, width: 14, height: 14 }
                } else {
                    Icon { icon: FaChevronDown, width: 14, height: 14 }
                }
            }

            if expanded() {
                if let Some(overall) = data.overall {
                    div { class: "recommendations-section",
                        h4 { "Overall Recommendations" }
                        RecommendationMessage { block: overall }
                    }
                }

                if let Some((date, restaurant, set)) = latest {
                    div { class: "recommendations-section",
                        div { class: "recommendations-heading",
                            h4 { "Latest Order Recommendations" }
                            span { class: "muted", "{date}" }
                        }
                        RecommendationSet { set, restaurant: Some(restaurant) }
                    }
                }
            }
        }
    }
}

/// Recommendations for a single order, shown in the order details modal.
#[component]
pub fn OrderRecommendationsPanel(order_id: String) -> Element {
    let client = use_api();
    let recommendations = use_resource(move || {
        let client = client.clone();
        let order_id = order_id.clone();
        async move { client.order_recommendations(&order_id).await }
    });

    let state = recommendations.read().as_ref().cloned();
    match state {
        None => rsx! {
            div { class: "card card--skeleton", div { class: "skeleton-line" } }
        },
        Some(Err(e)) => {
            tracing::warn!("order recommendations failed: {e}");
            rsx! {
                div { class: "banner banner--error", "Unable to load recommendations for this order" }
            }
        }
        Some(Ok(data)) => rsx! {
            RecommendationSet { set: data.recommendations, restaurant: None }
        },
    }
}

#[component]
fn RecommendationSet(
    set: OrderRecommendationSet,
    #[props(!optional)] restaurant: Option<String>,
) -> Element {
    rsx! {
        if let Some(overall) = set.overall {
            div { class: "recommendation-overall",
                p {
                    if let Some(name) = restaurant {
                        strong { "{name}: " }
                    }
                    {overall.message.clone().unwrap_or_default()}
                }
                TipList { tips: overall.tips }
            }
        }
        for item in set.items {
            ItemCard { item }
        }
    }
}

#[component]
fn RecommendationMessage(block: RecommendationBlock) -> Element {
    rsx! {
        if let Some(message) = block.message {
            p { class: "recommendation-message", "{message}" }
        }
        TipList { tips: block.tips }
    }
}

#[component]
fn TipList(tips: Vec<String>) -> Element {
    if tips.is_empty() {
        return rsx! {};
    }
    rsx! {
        ul { class: "tip-list",
            for tip in tips {
                li {
                    Icon { icon: FaCircleCheck, width: 12, height: 12 }
                    span { "{tip}" }
                }
            }
        }
    }
}

#[component]
fn ItemCard(item: ItemRecommendation) -> Element {
    let impact = item.emission_impact.clone().unwrap_or_default();
    let label = impact_label(&impact);

    rsx! {
        div { class: "item-recommendation",
            div { class: "item-recommendation-header",
                span { class: "item-name", "{item.item_name}" }
                if !impact.is_empty() {
                    span { class: "impact impact--{impact}", "{label}" }
                }
            }
            TipList { tips: item.tips.clone() }
            if !item.alternatives.is_empty() {
                div { class: "alternatives",
                    span { class: "muted", "Try instead: " }
                    for alt in item.alternatives.iter() {
                        span { class: "chip", "{alt}" }
                    }
                }
            }
        }
    }
}

/// `"high"` → `"High Impact"`.
fn impact_label(impact: &str) -> String {
    let mut chars = impact.chars();
    match chars.next() {
        Some(first) => format!("{}{} Impact", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impact_label() {
        assert_eq!(impact_label("high"), "High Impact");
        assert_eq!(impact_label(""), "");
    }
}
