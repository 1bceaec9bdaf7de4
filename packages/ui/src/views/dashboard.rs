use api::{Order, RetryPolicy};
use dioxus::prelude::*;

use super::widgets::{ErrorBanner, StatTile};
use super::ModalOverlay;
use crate::format::{average_per_order, format_date, highest_source, recent_orders, safe_fixed};
use crate::icons::{FaArrowsRotate, FaBoxOpen, FaCloudArrowUp, FaLeaf, FaPlus, FaTruck, FaUtensils};
use crate::queries::{snapshot, use_query, use_query_cache, QueryKey, QueryState};
use crate::{AiRecommendationsPanel, Icon, OrderImport, Spinner};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Landing page for a signed-in user.
///
/// `quick_actions` is rendered in the side column; the web crate passes router
/// links there. `on_add_order` backs the empty-state call to action.
#[component]
pub fn DashboardView(on_add_order: EventHandler<()>, quick_actions: Element) -> Element {
    let cache = use_query_cache();
    let mut show_import = use_signal(|| false);

    let summary = use_query(QueryKey::Summary, RetryPolicy::DEFAULT, |client| async move {
        client.summary().await
    });
    // A failing order list must not keep the dashboard spinning
    let recent = use_query(QueryKey::RecentOrders, RetryPolicy::NONE, |client| async move {
        client.list_orders().await.map(recent_orders)
    });

    let refresh = move |_| cache.invalidate(&[QueryKey::Summary, QueryKey::RecentOrders]);

    let (summary, recent) = match (snapshot(&summary), snapshot(&recent)) {
        (QueryState::Loading, _) | (_, QueryState::Loading) => {
            return rsx! {
                Spinner { label: "Gathering your carbon footprint data..." }
            };
        }
        (QueryState::Failed(e), _) | (_, QueryState::Failed(e)) => {
            let message = e.user_message("Failed to load dashboard data");
            return rsx! {
                div { class: "page",
                    ErrorBanner { message }
                    p { class: "muted",
                        "We're having trouble loading your dashboard data. Please try again later."
                    }
                    button { class: "btn btn--primary", onclick: refresh,
                        Icon { icon: FaArrowsRotate, width: 14, height: 14 }
                        "Try Again"
                    }
                }
            };
        }
        (QueryState::Ready(summary), QueryState::Ready(recent)) => (summary, recent),
    };

    let average_value = average_per_order(&summary, recent.len());
    let average = safe_fixed(Some(average_value), 2);
    let biggest = highest_source(&summary);

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        div { class: "page dashboard",
            div { class: "page-header",
                h1 { "Dashboard" }
                button { class: "btn btn--outline", onclick: refresh,
                    Icon { icon: FaArrowsRotate, width: 14, height: 14 }
                    "Refresh"
                }
            }

            div { class: "card import-banner",
                div {
                    h3 { "Import your orders" }
                    p { class: "muted",
                        "Connect your food delivery accounts to automatically track your carbon footprint"
                    }
                }
                button {
                    class: "btn btn--primary",
                    onclick: move |_| show_import.set(true),
                    Icon { icon: FaCloudArrowUp, width: 14, height: 14 }
                    "Import Orders"
                }
            }

            h2 { "Your Carbon Footprint" }
            div { class: "tiles",
                StatTile {
                    label: "Total Emissions",
                    value: summary.total_emission,
                    percentage: None,
                }
                StatTile {
                    label: "Transport",
                    value: summary.transport_emission,
                    percentage: summary.transport_percentage,
                    tone: "blue",
                }
                StatTile {
                    label: "Packaging",
                    value: summary.packaging_emission,
                    percentage: summary.packaging_percentage,
                    tone: "yellow",
                }
                StatTile {
                    label: "Food",
                    value: summary.food_emission,
                    percentage: summary.food_percentage,
                    tone: "red",
                }
            }

            div { class: "columns",
                div { class: "column-main",
                    div { class: "card",
                        div { class: "card-header", h2 { "Recent Orders" } }
                        RecentOrdersTable {
                            orders: recent,
                            average: average_value,
                            on_add_order,
                        }
                    }
                    AiRecommendationsPanel {}
                }

                div { class: "column-side",
                    div { class: "card",
                        h3 { "Emissions Insights" }
                        div { class: "stat-row",
                            span { class: "muted", "Average per order" }
                            strong { "{average} kg CO₂" }
                        }
                        div { class: "stat-row",
                            span { class: "muted", "Highest emission source" }
                            strong { "{biggest}" }
                        }
                        div { class: "callout",
                            Icon { icon: FaLeaf, width: 14, height: 14 }
                            span { "Carbon reduction potential:" }
                            p {
                                "Based on your ordering patterns, you could reduce emissions by up to 25% with small changes."
                            }
                        }
                    }
                    div { class: "card quick-actions",
                        h3 { "Quick Actions" }
                        {quick_actions}
                    }
                    TipsPanel {}
                }
            }
        }

        if show_import() {
            ModalOverlay {
                title: "Import Orders",
                wide: true,
                on_close: move |_| show_import.set(false),
                OrderImport {}
            }
        }
    }
}

/// The recent orders table, or a call to action when there are none.
///
/// Orders above `average` get a red marker.
#[component]
pub fn RecentOrdersTable(orders: Vec<Order>, average: f64, on_add_order: EventHandler<()>) -> Element {
    if orders.is_empty() {
        return rsx! {
            div { class: "empty-state",
                Icon { icon: FaUtensils, width: 28, height: 28 }
                h3 { "No orders yet" }
                p { class: "muted",
                    "Add your first order to start tracking your carbon footprint from food deliveries."
                }
                button {
                    class: "btn btn--primary",
                    onclick: move |_| on_add_order.call(()),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    "Add Order"
                }
            }
        };
    }

    rsx! {
        table { class: "table",
            thead {
                tr {
                    th { "Restaurant" }
                    th { "Date" }
                    th { "Items" }
                    th { "Emissions" }
                }
            }
            tbody {
                for order in orders {
                    RecentOrderRow { key: "{order.id}", order, average }
                }
            }
        }
    }
}

#[component]
fn RecentOrderRow(order: Order, average: f64) -> Element {
    let date = format_date(order.order_date.as_deref());
    let initial = order.restaurant_name.chars().next().unwrap_or('R');
    let platform = if order.platform.is_empty() { "Unknown".to_string() } else { order.platform.clone() };
    let platform_class = platform.to_lowercase();
    let item_count = order.items.len();
    let emission = order.total_emission();
    let marker = if emission.unwrap_or(0.0) > average { "dot dot--red" } else { "dot dot--green" };
    let emission = safe_fixed(emission, 2);

    rsx! {
        tr {
            td {
                div { class: "restaurant-cell",
                    span { class: "avatar", "{initial}" }
                    div {
                        p { class: "restaurant-name", "{order.restaurant_name}" }
                        span { class: "platform platform--{platform_class}", "{platform}" }
                    }
                }
            }
            td { "{date}" }
            td { "{item_count} items" }
            td {
                span { class: "{marker}" }
                "{emission} kg CO₂"
            }
        }
    }
}

#[component]
fn TipsPanel() -> Element {
    rsx! {
        div { class: "card tips",
            h3 { "Quick Tips" }
            ul { class: "tip-list",
                li {
                    Icon { icon: FaLeaf, width: 12, height: 12 }
                    span { "Choose vegetarian dishes: plant-based meals have a much smaller footprint." }
                }
                li {
                    Icon { icon: FaTruck, width: 12, height: 12 }
                    span { "Order from nearby restaurants to cut delivery emissions." }
                }
                li {
                    Icon { icon: FaBoxOpen, width: 12, height: 12 }
                    span { "Ask for minimal packaging and skip the plastic cutlery." }
                }
            }
        }
    }
}
