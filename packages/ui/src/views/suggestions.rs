use api::RetryPolicy;
use dioxus::prelude::*;

use super::widgets::ErrorBanner;
use crate::icons::{FaCircleCheck, FaLightbulb};
use crate::queries::{snapshot, use_query, QueryKey, QueryState};
use crate::{Icon, Spinner};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Shown under the backend's suggestions on every visit.
pub const GENERAL_TIPS: [&str; 5] = [
    "Order from restaurants closer to your location to reduce transport emissions",
    "Choose vegetarian options when possible, as they generally have lower carbon emissions",
    "Combine multiple items in a single order to reduce packaging waste",
    "Consider using eco-friendly delivery platforms that use electric vehicles",
    "Support restaurants that use sustainable packaging materials",
];

#[component]
pub fn SuggestionsView() -> Element {
    let suggestions = use_query(QueryKey::Suggestions, RetryPolicy::DEFAULT, |client| async move {
        client.suggestions().await
    });

    let list = match snapshot(&suggestions) {
        QueryState::Loading => return rsx! { Spinner {} },
        QueryState::Failed(e) => {
            let message = e.user_message("Failed to load suggestions");
            return rsx! {
                div { class: "page", ErrorBanner { message } }
            };
        }
        QueryState::Ready(list) => list,
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        div { class: "page suggestions",
            h1 { "Suggestions" }

            if list.is_empty() {
                p { class: "muted", "No personalised suggestions yet. Add a few orders first." }
            }
            div { class: "grid-2",
                for suggestion in list {
                    div { class: "card suggestion",
                        div { class: "card-header",
                            Icon { icon: FaLightbulb, width: 16, height: 16 }
                            h3 { {suggestion.title()} }
                        }
                        p { "{suggestion.message}" }
                        if let Some(savings) = suggestion.potential_savings {
                            span { class: "chip", "Potential Savings: {savings}" }
                        }
                    }
                }
            }

            div { class: "card",
                h3 { "General Tips" }
                ul { class: "tip-list",
                    for tip in GENERAL_TIPS {
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
