//! Small building blocks shared by the page views.

use dioxus::prelude::*;

use crate::format::{bar_width, safe_fixed};
use crate::icons::FaTriangleExclamation;
use crate::Icon;

#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "banner banner--error", role: "alert",
            Icon { icon: FaTriangleExclamation, width: 14, height: 14 }
            span { "{message}" }
        }
    }
}

/// Headline figure with an optional share bar underneath.
#[component]
pub fn StatTile(
    label: String,
    value: Option<f64>,
    #[props(default = "kg CO₂".to_string())] unit: String,
    #[props(default = 2)] decimals: usize,
    #[props(!optional)] percentage: Option<f64>,
    #[props(default = "green".to_string())] tone: String,
) -> Element {
    let value = safe_fixed(value, decimals);
    let share = safe_fixed(percentage, 1);

    rsx! {
        div { class: "tile tile--{tone}",
            span { class: "tile-label", "{label}" }
            span { class: "tile-value", "{value} " small { "{unit}" } }
            if let Some(pct) = percentage {
                ProgressBar { percentage: Some(pct), tone: tone.clone() }
                span { class: "tile-caption", "{share}% of total" }
            }
        }
    }
}

#[component]
pub fn ProgressBar(
    #[props(!optional)] percentage: Option<f64>,
    #[props(default = "green".to_string())] tone: String,
) -> Element {
    let width = bar_width(percentage);

    rsx! {
        div { class: "bar",
            div { class: "bar-fill bar-fill--{tone}", style: "width: {width}" }
        }
    }
}

/// Label, value and a bar sized relative to `max`.
#[component]
pub fn BarRow(label: String, value: f64, max: f64, #[props(default = 2)] decimals: usize) -> Element {
    let percentage = if max > 0.0 { Some(value / max * 100.0) } else { None };
    let shown = safe_fixed(Some(value), decimals);

    rsx! {
        div { class: "bar-row",
            div { class: "bar-row-label",
                span { "{label}" }
                span { class: "muted", "{shown} kg" }
            }
            ProgressBar { percentage }
        }
    }
}
