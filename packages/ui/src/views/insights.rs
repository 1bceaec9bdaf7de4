use api::{PlatformComparison, RetryPolicy, Suggestion, Summary, TrendPoint};
use dioxus::prelude::*;

use super::widgets::{BarRow, ErrorBanner, ProgressBar, StatTile};
use crate::format::{monthly_averages, safe_fixed};
use crate::icons::{FaChartLine, FaCircleInfo, FaLightbulb};
use crate::insights::{
    detailed_food_categories, food_split, goals, green_score, seasonal_impact, Badge, CostSavings,
    EnvironmentalImpact, GlobalComparison,
};
use crate::queries::{snapshot, use_query, QueryKey, QueryState};
use crate::{Icon, Spinner};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[derive(Debug, Clone, Copy, PartialEq)]
enum Tab {
    Overview,
    Food,
    Seasonal,
    Savings,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Overview, Tab::Food, Tab::Seasonal, Tab::Savings];

    fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Food => "Food",
            Tab::Seasonal => "Seasonal",
            Tab::Savings => "Savings & Goals",
        }
    }
}

#[component]
pub fn InsightsView() -> Element {
    let mut tab = use_signal(|| Tab::Overview);

    let summary = use_query(QueryKey::Summary, RetryPolicy::DEFAULT, |client| async move {
        client.summary().await
    });
    let trends = use_query(QueryKey::Trends, RetryPolicy::DEFAULT, |client| async move {
        client.trends().await
    });
    let platforms = use_query(QueryKey::PlatformComparison, RetryPolicy::DEFAULT, |client| async move {
        client.platform_comparison().await
    });
    let suggestions = use_query(QueryKey::Suggestions, RetryPolicy::DEFAULT, |client| async move {
        client.suggestions().await
    });

    let summary = match snapshot(&summary) {
        QueryState::Loading => return rsx! { Spinner { label: "Loading insights..." } },
        QueryState::Failed(e) => {
            let message = e.user_message("Failed to load insights");
            return rsx! {
                div { class: "page", ErrorBanner { message } }
            };
        }
        QueryState::Ready(summary) => summary,
    };
    // Secondary panels degrade to empty rather than blocking the page
    let trends = snapshot(&trends).ready().cloned().unwrap_or_default();
    let platforms = snapshot(&platforms).ready().cloned().unwrap_or_default();
    let suggestions = snapshot(&suggestions).ready().cloned().unwrap_or_default();

    let current = tab();
    let body = match current {
        Tab::Overview => rsx! {
            OverviewTab { summary: summary.clone(), trends, platforms, suggestions }
        },
        Tab::Food => rsx! {
            FoodTab { summary: summary.clone() }
        },
        Tab::Seasonal => rsx! {
            SeasonalTab { summary: summary.clone() }
        },
        Tab::Savings => rsx! {
            SavingsTab { summary: summary.clone() }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        div { class: "page insights",
            div { class: "page-header",
                h1 { "Insights" }
            }

            div { class: "tiles",
                StatTile {
                    label: "Total Orders",
                    value: summary.order_count.map(|n| n as f64),
                    unit: "orders",
                    decimals: 0,
                    percentage: None,
                    tone: "blue",
                }
                StatTile {
                    label: "Average Emission per Order",
                    value: summary.average_emission_per_order,
                    percentage: None,
                    tone: "yellow",
                }
                StatTile {
                    label: "Total Carbon Footprint",
                    value: summary.total_emission,
                    percentage: None,
                }
            }

            div { class: "tabs", role: "tablist",
                for choice in Tab::ALL {
                    button {
                        class: if choice == current { "tab tab--active" } else { "tab" },
                        onclick: move |_| tab.set(choice),
                        {choice.label()}
                    }
                }
            }

            {body}
        }
    }
}

#[component]
fn IllustrativeNote() -> Element {
    rsx! {
        p { class: "note",
            Icon { icon: FaCircleInfo, width: 12, height: 12 }
            " Illustrative estimate derived from your totals, not a measurement."
        }
    }
}

#[component]
fn OverviewTab(
    summary: Summary,
    trends: Vec<TrendPoint>,
    platforms: PlatformComparison,
    suggestions: Vec<Suggestion>,
) -> Element {
    let impact = EnvironmentalImpact::from_summary(&summary);
    let comparison = GlobalComparison::from_summary(&summary);
    let score = green_score(&summary);
    let badge = Badge::for_score(score);
    let badge_name = badge.name();
    let badge_tone = badge.tone();
    let user_average = safe_fixed(Some(comparison.user_average), 2);
    let global_average = safe_fixed(Some(comparison.global_average), 2);
    let difference = safe_fixed(Some(comparison.difference.abs()), 1);
    let above = comparison.difference > 0.0;
    let gap_width = Some((comparison.difference.abs() * 5.0).min(100.0));
    let gap_tone = if above { "red" } else { "green" };
    let sources = [
        ("Transport", summary.transport_emission.unwrap_or(0.0)),
        ("Packaging", summary.packaging_emission.unwrap_or(0.0)),
        ("Food", summary.food_emission.unwrap_or(0.0)),
    ];
    let source_max = sources.iter().map(|(_, v)| *v).fold(0.0, f64::max);
    let timeline = monthly_averages(&trends);
    let timeline_max = timeline.iter().map(|(_, v)| *v).fold(0.0, f64::max);

    rsx! {
        div { class: "grid-2",
            if let Some(impact) = impact {
                div { class: "card",
                    h3 { "Environmental Impact" }
                    IllustrativeNote {}
                    div { class: "stat-row",
                        span { "Trees needed for a year to absorb this CO₂" }
                        strong { {safe_fixed(Some(impact.trees), 1)} }
                    }
                    div { class: "stat-row",
                        span { "Days of car emissions" }
                        strong { {safe_fixed(Some(impact.car_days), 1)} }
                    }
                    div { class: "stat-row",
                        span { "Smartphone charges" }
                        strong { "{impact.phone_charges}" }
                    }
                    div { class: "stat-row",
                        span { "Hours of light bulb usage" }
                        strong { "{impact.bulb_hours}" }
                    }
                }
            }

            div { class: "card",
                h3 { "Your Carbon Footprint vs Global Average" }
                IllustrativeNote {}
                div { class: "stat-row",
                    span { "Your Average" }
                    strong { "{user_average} kg CO₂" }
                }
                div { class: "stat-row",
                    span { "Global Average" }
                    strong { "{global_average} kg CO₂" }
                }
                ProgressBar { percentage: gap_width, tone: gap_tone.to_string() }
                p { class: "muted",
                    if above {
                        "You're emitting {difference}% more than the global average"
                    } else {
                        "You're emitting {difference}% less than the global average"
                    }
                }
            }

            div { class: "card green-card",
                h3 { "Green Score" }
                IllustrativeNote {}
                div { class: "score", "{score}" }
                span { class: "badge badge--{badge_tone}", "{badge_name}" }
            }

            div { class: "card",
                h3 { "Emission Sources" }
                for (label, value) in sources {
                    BarRow { label: label.to_string(), value, max: source_max }
                }
            }
        }

        div { class: "card",
            h3 { "Platform Comparison" }
            if platforms.is_empty() {
                p { class: "muted", "No platform data yet." }
            } else {
                table { class: "table",
                    thead {
                        tr {
                            th { "Platform" }
                            th { "Orders" }
                            th { "Total Emission" }
                            th { "Average per Order" }
                        }
                    }
                    tbody {
                        for (name, stats) in platforms {
                            tr { key: "{name}",
                                td { "{name}" }
                                td { "{stats.order_count}" }
                                td { {safe_fixed(stats.total_emission, 2)} " kg CO₂" }
                                td { {safe_fixed(stats.average_emission, 2)} " kg CO₂" }
                            }
                        }
                    }
                }
            }
        }

        div { class: "card",
            div { class: "card-header",
                Icon { icon: FaChartLine, width: 16, height: 16 }
                h3 { "Emission Timeline" }
            }
            p { class: "muted", "Track how your carbon footprint has changed over time" }
            if timeline.is_empty() {
                p { class: "muted", "Not enough data to show trends yet." }
            }
            for (month, value) in timeline {
                BarRow { key: "{month}", label: month.clone(), value, max: timeline_max }
            }
        }

        if !suggestions.is_empty() {
            div { class: "card",
                div { class: "card-header",
                    Icon { icon: FaLightbulb, width: 16, height: 16 }
                    h3 { "Suggestions" }
                }
                for suggestion in suggestions {
                    div { class: "suggestion",
                        h4 { {suggestion.title()} }
                        p { "{suggestion.message}" }
                        if let Some(savings) = suggestion.potential_savings {
                            span { class: "chip", "Potential savings: {savings}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FoodTab(summary: Summary) -> Element {
    let split = food_split(&summary);
    let split_max = split.iter().map(|(_, v)| *v).fold(0.0, f64::max);
    let detailed = detailed_food_categories(&summary);
    let detailed_max = detailed.iter().map(|(_, v)| *v).fold(0.0, f64::max);

    rsx! {
        div { class: "grid-2",
            div { class: "card",
                h3 { "Food Category Breakdown" }
                IllustrativeNote {}
                for (label, value) in split {
                    BarRow { label: label.to_string(), value, max: split_max }
                }
            }
            div { class: "card",
                h3 { "Category Details" }
                IllustrativeNote {}
                for (label, value) in detailed {
                    BarRow { key: "{label}", label: label.clone(), value, max: detailed_max }
                }
            }
        }

        div { class: "grid-3",
            FoodOptions {
                title: "Low Carbon Options",
                tone: "green",
                options: vec![
                    "Vegetable curry (0.5 kg CO₂)".to_string(),
                    "Dal and rice (0.7 kg CO₂)".to_string(),
                    "Vegetable biryani (0.9 kg CO₂)".to_string(),
                ],
            }
            FoodOptions {
                title: "Medium Carbon Options",
                tone: "yellow",
                options: vec![
                    "Chicken curry (1.2 kg CO₂)".to_string(),
                    "Fish curry (1.4 kg CO₂)".to_string(),
                    "Egg biryani (1.1 kg CO₂)".to_string(),
                ],
            }
            FoodOptions {
                title: "High Carbon Options",
                tone: "red",
                options: vec![
                    "Beef curry (2.5 kg CO₂)".to_string(),
                    "Lamb biryani (2.3 kg CO₂)".to_string(),
                    "Pork curry (1.8 kg CO₂)".to_string(),
                ],
            }
        }
    }
}

#[component]
fn FoodOptions(title: String, tone: String, options: Vec<String>) -> Element {
    rsx! {
        div { class: "card card--{tone}",
            h4 { "{title}" }
            ul {
                for entry in options {
                    li { "{entry}" }
                }
            }
        }
    }
}

#[component]
fn SeasonalTab(summary: Summary) -> Element {
    let seasons = seasonal_impact(&summary);
    let max = seasons.iter().map(|(_, v)| *v).fold(0.0, f64::max);

    rsx! {
        div { class: "grid-2",
            div { class: "card",
                h3 { "Seasonal Distribution" }
                IllustrativeNote {}
                for (label, value) in seasons {
                    BarRow { label: label.to_string(), value, max }
                }
            }
            div { class: "card",
                h3 { "Seasonal Insights" }
                div { class: "season",
                    h4 { "Summer (March - June)" }
                    p { class: "muted", "Cold drinks and desserts add packaging; favour fresh local produce." }
                }
                div { class: "season",
                    h4 { "Monsoon (July - September)" }
                    p { class: "muted", "Longer delivery routes in the rain; order from closer restaurants." }
                }
                div { class: "season",
                    h4 { "Winter (October - February)" }
                    p { class: "muted", "Heavier meals peak; seasonal vegetables keep the footprint down." }
                }
            }
        }
    }
}

#[component]
fn SavingsTab(summary: Summary) -> Element {
    let savings = CostSavings::from_summary(&summary);
    let goals = goals(&summary);

    rsx! {
        div { class: "grid-2",
            div { class: "card",
                h3 { "Current Savings" }
                IllustrativeNote {}
                if let Some(savings) = savings {
                    div { class: "stat-row",
                        span { "Offset cost of your footprint" }
                        strong { "$" {safe_fixed(Some(savings.current), 2)} }
                    }
                    h4 { "Potential Savings" }
                    for (label, value) in savings.strategies {
                        div { class: "stat-row",
                            span { "{label}" }
                            strong { "$" {safe_fixed(Some(value), 2)} }
                        }
                    }
                } else {
                    p { class: "muted", "Add some orders to estimate savings." }
                }
            }

            div { class: "card",
                h3 { "Goals" }
                IllustrativeNote {}
                for goal in goals {
                    div { class: "goal",
                        div { class: "stat-row",
                            span { "{goal.name} Goal" }
                            span { class: "muted",
                                {safe_fixed(Some(goal.current), 2)}
                                " / "
                                {safe_fixed(Some(goal.target), 2)}
                                " kg CO₂"
                            }
                        }
                        ProgressBar { percentage: Some(goal.progress()) }
                    }
                }
            }
        }

        div { class: "grid-3",
            FoodOptions {
                title: "Food Choices",
                tone: "green",
                options: vec![
                    "Choose vegetarian options (up to 2.5kg CO₂ saved per meal)".to_string(),
                    "Order seasonal ingredients (reduces transport emissions)".to_string(),
                    "Avoid beef and lamb (highest carbon footprint)".to_string(),
                ],
            }
            FoodOptions {
                title: "Delivery Options",
                tone: "blue",
                options: vec![
                    "Order from restaurants within 2km (0.13kg CO₂ saved per order)".to_string(),
                    "Choose eco-friendly delivery options when available".to_string(),
                    "Combine multiple items in a single order".to_string(),
                ],
            }
            FoodOptions {
                title: "Packaging",
                tone: "yellow",
                options: vec![
                    "Request minimal packaging (0.2kg CO₂ saved per order)".to_string(),
                    "Support restaurants using biodegradable packaging".to_string(),
                    "Recycle or reuse packaging materials".to_string(),
                ],
            }
        }
    }
}
