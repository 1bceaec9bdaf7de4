use dioxus::prelude::*;
use ui::use_auth;
use ui::views::HomepageView;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let authenticated = auth.session().is_authenticated();

    rsx! {
        HomepageView {
            actions: rsx! {
                if authenticated {
                    Link { to: Route::Dashboard {}, class: "btn btn--primary", "Go to Dashboard" }
                } else {
                    Link { to: Route::Register {}, class: "btn btn--primary", "Get Started" }
                    Link { to: Route::Login {}, class: "btn btn--outline", "Sign in" }
                }
            },
        }
    }
}

/// Any unknown path goes back to the landing page.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();

    use_effect(move || {
        tracing::debug!("no route for /{}, going home", segments.join("/"));
        nav.replace(Route::Home {});
    });

    rsx! {}
}
