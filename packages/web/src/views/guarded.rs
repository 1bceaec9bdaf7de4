//! Pages that need a signed-in user.

use dioxus::prelude::*;
use ui::views::{DashboardView, InsightsView, OrdersView, ProfileView, SuggestionsView};
use ui::PrivateRoute;

use crate::Route;

#[component]
fn Guarded(children: Element) -> Element {
    let nav = use_navigator();

    rsx! {
        PrivateRoute {
            on_denied: move |_| {
                nav.replace(Route::Login {});
            },
            {children}
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    let nav = use_navigator();

    rsx! {
        Guarded {
            DashboardView {
                on_add_order: move |_| {
                    nav.push(Route::Orders {});
                },
                quick_actions: rsx! {
                    Link { to: Route::Orders {}, class: "btn btn--outline btn--block", "Add New Order" }
                    Link { to: Route::Insights {}, class: "btn btn--outline btn--block", "View Insights" }
                    Link { to: Route::Suggestions {}, class: "btn btn--outline btn--block", "Get Suggestions" }
                },
            }
        }
    }
}

#[component]
pub fn Orders() -> Element {
    rsx! {
        Guarded { OrdersView {} }
    }
}

#[component]
pub fn Insights() -> Element {
    rsx! {
        Guarded { InsightsView {} }
    }
}

#[component]
pub fn Suggestions() -> Element {
    rsx! {
        Guarded { SuggestionsView {} }
    }
}

#[component]
pub fn Profile() -> Element {
    rsx! {
        Guarded { ProfileView {} }
    }
}
