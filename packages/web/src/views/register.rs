use dioxus::prelude::*;
use ui::views::RegisterView;

use crate::Route;

#[component]
pub fn Register() -> Element {
    let nav = use_navigator();

    rsx! {
        RegisterView {
            on_authenticated: move |_| {
                nav.replace(Route::Dashboard {});
            },
            footer: rsx! {
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            },
        }
    }
}
