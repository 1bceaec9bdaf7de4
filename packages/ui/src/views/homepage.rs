use dioxus::prelude::*;

use crate::icons::{FaBoxOpen, FaChartLine, FaCloudArrowUp, FaLeaf, FaLightbulb, FaTruck};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Public landing page. `actions` holds the sign-up and sign-in links.
#[component]
pub fn HomepageView(actions: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        div { class: "home",
            section { class: "hero",
                h1 {
                    "Understand the "
                    span { class: "accent", "Carbon Footprint" }
                    " of your food deliveries"
                }
                p { class: "lead",
                    "CarbonTrack turns your Zomato and Swiggy order history into a clear picture of the emissions behind every meal."
                }
                div { class: "hero-actions", {actions} }
            }

            section { class: "problem",
                h2 { "Why it matters" }
                div { class: "grid-3",
                    Feature {
                        title: "Transport Emissions",
                        body: "Every delivery ride burns fuel. Distance is the biggest lever you control.",
                        Icon { icon: FaTruck, width: 22, height: 22 }
                    }
                    Feature {
                        title: "Packaging Waste",
                        body: "Single-use containers and cutlery add up across hundreds of orders a year.",
                        Icon { icon: FaBoxOpen, width: 22, height: 22 }
                    }
                    Feature {
                        title: "Growing Trend",
                        body: "Food delivery keeps growing, and so does its share of household emissions.",
                        Icon { icon: FaChartLine, width: 22, height: 22 }
                    }
                }
            }

            section { class: "features",
                h2 { "How CarbonTrack helps" }
                div { class: "grid-2",
                    Feature {
                        title: "Automatic Import",
                        body: "Pull your order history straight from Zomato and Swiggy.",
                        Icon { icon: FaCloudArrowUp, width: 22, height: 22 }
                    }
                    Feature {
                        title: "Detailed Calculations",
                        body: "Each order is split into transport, packaging and food emissions.",
                        Icon { icon: FaChartLine, width: 22, height: 22 }
                    }
                    Feature {
                        title: "Personalized Insights",
                        body: "Recommendations based on what you actually order.",
                        Icon { icon: FaLightbulb, width: 22, height: 22 }
                    }
                    Feature {
                        title: "Progress Tracking",
                        body: "Watch your footprint shrink month by month.",
                        Icon { icon: FaLeaf, width: 22, height: 22 }
                    }
                }
            }

            footer { class: "home-footer",
                strong { "CarbonTrack" }
                p { class: "muted", "Making food delivery sustainable, one order at a time." }
            }
        }
    }
}

#[component]
fn Feature(title: String, body: String, children: Element) -> Element {
    rsx! {
        div { class: "card feature",
            div { class: "feature-icon", {children} }
            h3 { "{title}" }
            p { class: "muted", "{body}" }
        }
    }
}
