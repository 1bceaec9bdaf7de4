use api::{RetryPolicy, User};
use dioxus::prelude::*;

use super::widgets::{ErrorBanner, ProgressBar, StatTile};
use crate::format::{format_date, safe_fixed};
use crate::icons::{FaCircleCheck, FaLeaf};
use crate::insights::{car_miles, Reduction};
use crate::queries::{snapshot, use_query, QueryKey, QueryState};
use crate::{use_auth, Icon, Spinner};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

const PROFILE_TIPS: [&str; 4] = [
    "Choose restaurants closer to your location to reduce transport emissions",
    "Select \"no utensils\" option when you don't need them",
    "Order plant-based meals which typically have lower carbon emissions",
    "Combine multiple items in a single order to reduce delivery trips",
];

/// `(label, key)` of the notification flags stored in `User::preferences`.
const PREFERENCES: [(&str, &str); 3] = [
    ("Email Notifications", "notifications"),
    ("Carbon Reduction Tips", "emissionAlerts"),
    ("Weekly Carbon Report", "weeklyReport"),
];

fn preference_enabled(user: &User, key: &str) -> bool {
    user.preferences
        .as_ref()
        .and_then(|prefs| prefs.get(key))
        .and_then(|value| value.as_bool())
        .unwrap_or(false)
}

#[component]
pub fn ProfileView() -> Element {
    let auth = use_auth();
    let summary = use_query(QueryKey::Summary, RetryPolicy::DEFAULT, |client| async move {
        client.summary().await
    });

    let Some(user) = auth.user() else {
        return rsx! { Spinner {} };
    };
    let summary = match snapshot(&summary) {
        QueryState::Loading => return rsx! { Spinner {} },
        QueryState::Failed(e) => {
            let message = e.user_message("Failed to load your profile");
            return rsx! {
                div { class: "page",
                    h2 { "Oops!" }
                    ErrorBanner { message }
                }
            };
        }
        QueryState::Ready(summary) => summary,
    };

    let initial = user.initial();
    let name = user.display_name().to_string();
    let member_since = format_date(user.created_at.as_deref());
    let orders = summary.order_count.unwrap_or(0);
    let reduction = Reduction::from_summary(&summary);
    let rank = reduction.rank().title();
    let achieved = reduction.percentage.unwrap_or(0.0);
    let achieved_label = if achieved >= 0.0 { "Reduction Achieved" } else { "Increase from Baseline" };
    let achieved_tone = if achieved >= 0.0 { "green" } else { "yellow" };
    let achieved_pct = safe_fixed(Some(achieved.abs()), 1);
    let target = safe_fixed(Some(reduction.target), 2);
    let total = safe_fixed(summary.total_emission, 2);
    let average = safe_fixed(summary.average_emission_per_order, 2);
    let miles = car_miles(&summary);
    let preferences: Vec<(&str, bool)> = PREFERENCES
        .iter()
        .map(|(label, key)| (*label, preference_enabled(&user, key)))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        div { class: "page profile",
            div { class: "grid-2",
                div { class: "card profile-card",
                    span { class: "avatar avatar--large", "{initial}" }
                    h2 { "{name}" }
                    span { class: "badge badge--green", "{rank}" }
                    div { class: "stat-row",
                        span { class: "muted", "Email" }
                        span { "{user.email}" }
                    }
                    div { class: "stat-row",
                        span { class: "muted", "Member Since" }
                        span { "{member_since}" }
                    }
                    div { class: "stat-row",
                        span { class: "muted", "Total Orders" }
                        span { "{orders}" }
                    }
                    h4 { "Preferences" }
                    for (pref, enabled) in preferences {
                        label { class: "checkbox",
                            input { r#type: "checkbox", checked: enabled, disabled: true }
                            " {pref}"
                        }
                    }
                }

                div { class: "card",
                    h3 { "Carbon Reduction" }
                    div { class: "score", "{achieved_pct}%" }
                    p { class: "muted", "{achieved_label}" }
                    ProgressBar { percentage: Some(achieved.abs()), tone: achieved_tone.to_string() }
                    p { "Target: " strong { "{target} kg CO₂" } " (50% reduction)" }
                }
            }

            h2 { "Your Carbon Footprint" }
            div { class: "tiles",
                StatTile {
                    label: "Food Emissions",
                    value: summary.food_emission,
                    percentage: summary.food_percentage,
                    tone: "red",
                }
                StatTile {
                    label: "Transport Emissions",
                    value: summary.transport_emission,
                    percentage: summary.transport_percentage,
                    tone: "blue",
                }
                StatTile {
                    label: "Packaging Emissions",
                    value: summary.packaging_emission,
                    percentage: summary.packaging_percentage,
                    tone: "yellow",
                }
            }

            div { class: "grid-2",
                div { class: "card",
                    h3 { "Carbon Footprint Summary" }
                    div { class: "stat-row",
                        span { "Total Carbon Footprint" }
                        strong { "{total} kg CO₂" }
                    }
                    div { class: "stat-row",
                        span { "Average per Order" }
                        strong { "{average} kg CO₂" }
                    }
                    p { class: "callout",
                        Icon { icon: FaLeaf, width: 14, height: 14 }
                        " Equivalent to {miles} miles driven by car"
                    }
                }
                div { class: "card tips",
                    h3 { "Tips" }
                    ul { class: "tip-list",
                        for tip in PROFILE_TIPS {
                            li {
                                Icon { icon: FaCircleCheck, width: 12, height: 12 }
                                span { "{tip}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_preferences_default_to_off() {
        let mut user = User {
            id: "u1".to_string(),
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            created_at: None,
            preferences: None,
        };
        assert!(!preference_enabled(&user, "notifications"));

        user.preferences = Some(json!({ "notifications": true, "weeklyReport": "yes" }));
        assert!(preference_enabled(&user, "notifications"));
        assert!(!preference_enabled(&user, "weeklyReport"));
        assert!(!preference_enabled(&user, "emissionAlerts"));
    }
}
