//! App-wide layout: query cache, session and navigation bar.

use dioxus::prelude::*;
use ui::{use_auth, use_query_cache_provider, AuthProvider, LogoutButton, Navbar};

use crate::Route;

/// Layout wrapping every route.
///
/// The session is resolved once, against the path the app was opened on. If
/// that path needs a login and there is no valid token, the user is sent to
/// `/login` without leaving a history entry.
#[component]
pub fn Shell() -> Element {
    use_query_cache_provider();
    let nav = use_navigator();
    let current_path = use_route::<Route>().to_string();

    rsx! {
        AuthProvider {
            current_path,
            on_login_required: move |_| {
                nav.replace(Route::Login {});
            },
            AppNavbar {}
            main { Outlet::<Route> {} }
        }
    }
}

#[component]
fn AppNavbar() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let authenticated = auth.session().is_authenticated();

    rsx! {
        Navbar {
            brand: rsx! {
                Link { to: Route::Home {}, "CarbonTrack" }
            },
            if authenticated {
                Link { to: Route::Dashboard {}, active_class: "active", "Dashboard" }
                Link { to: Route::Orders {}, active_class: "active", "Orders" }
                Link { to: Route::Insights {}, active_class: "active", "Insights" }
                Link { to: Route::Suggestions {}, active_class: "active", "Suggestions" }
                Link { to: Route::Profile {}, active_class: "active", "Profile" }
                LogoutButton {
                    class: "btn btn--outline",
                    on_logout: move |_| {
                        tracing::info!("signed out");
                        nav.push(Route::Login {});
                    },
                }
            } else {
                Link { to: Route::Login {}, active_class: "active", "Login" }
                Link { to: Route::Register {}, class: "btn btn--primary", "Register" }
            }
        }
    }
}
