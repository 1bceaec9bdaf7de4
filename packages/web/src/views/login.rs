//! Login page view.

use dioxus::prelude::*;
use ui::views::LoginView;

use crate::Route;

/// Login page component. Signed-in users go on to the dashboard.
#[component]
pub fn Login() -> Element {
    let nav = use_navigator();

    rsx! {
        LoginView {
            on_authenticated: move |_| {
                nav.replace(Route::Dashboard {});
            },
            footer: rsx! {
                "Don't have an account? "
                Link { to: Route::Register {}, "Sign up" }
            },
        }
    }
}
