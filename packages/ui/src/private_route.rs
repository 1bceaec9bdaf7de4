use api::session::access;
use api::Access;
use dioxus::prelude::*;

use crate::auth::use_auth;

/// Renders `children` only for an authenticated session.
///
/// While the session is still resolving a spinner is shown. An anonymous
/// session fires `on_denied`, which the router turns into a replace-navigation
/// to the login page.
#[component]
pub fn PrivateRoute(on_denied: EventHandler<()>, children: Element) -> Element {
    let auth = use_auth();
    let decision = access(&auth.session());

    use_effect(move || {
        if access(&auth.session()) == Access::Denied {
            on_denied.call(());
        }
    });

    match decision {
        Access::Pending => rsx! { Spinner {} },
        Access::Granted => rsx! { {children} },
        Access::Denied => rsx! {},
    }
}

#[component]
pub fn Spinner(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "spinner-wrap",
            div { class: "spinner", role: "status" }
            span { class: "sr-only", "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use api::{Session, User};
    use dioxus::prelude::*;

    use super::*;
    use crate::auth::AuthProvider;

    static DENIED_WHEN_SIGNED_IN: AtomicUsize = AtomicUsize::new(0);
    static DENIED_WHEN_ANONYMOUS: AtomicUsize = AtomicUsize::new(0);

    #[component]
    fn UnresolvedPage() -> Element {
        rsx! {
            AuthProvider {
                current_path: "/dashboard".to_string(),
                on_login_required: move |_| {},
                session: Session::Unresolved,
                PrivateRoute {
                    on_denied: move |_| {},
                    p { "secret dashboard" }
                }
            }
        }
    }

    #[component]
    fn SignedInPage() -> Element {
        let user = User {
            id: "u1".to_string(),
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            created_at: None,
            preferences: None,
        };
        rsx! {
            AuthProvider {
                current_path: "/dashboard".to_string(),
                on_login_required: move |_| {},
                session: Session::Authenticated(user),
                PrivateRoute {
                    on_denied: move |_| {
                        DENIED_WHEN_SIGNED_IN.fetch_add(1, Ordering::SeqCst);
                    },
                    p { "secret dashboard" }
                }
            }
        }
    }

    #[component]
    fn AnonymousPage() -> Element {
        rsx! {
            AuthProvider {
                current_path: "/dashboard".to_string(),
                on_login_required: move |_| {},
                session: Session::Anonymous,
                PrivateRoute {
                    on_denied: move |_| {
                        DENIED_WHEN_ANONYMOUS.fetch_add(1, Ordering::SeqCst);
                    },
                    p { "secret dashboard" }
                }
            }
        }
    }

    /// Render, then give effects a moment to run.
    async fn settle(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let _ = tokio::time::timeout(Duration::from_millis(100), async {
            loop {
                dom.wait_for_work().await;
                dom.render_immediate(&mut dioxus_core::NoOpMutations);
            }
        })
        .await;
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_unresolved_session_renders_spinner() {
        let mut dom = VirtualDom::new(UnresolvedPage);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("spinner"));
        assert!(!html.contains("secret dashboard"));
        assert_eq!(access(&Session::default()), Access::Pending);
    }

    #[tokio::test]
    async fn test_authenticated_session_renders_children() {
        let html = settle(SignedInPage).await;

        assert!(html.contains("secret dashboard"));
        assert!(!html.contains("spinner"));
        assert_eq!(DENIED_WHEN_SIGNED_IN.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_anonymous_session_is_denied_once() {
        let html = settle(AnonymousPage).await;

        assert!(!html.contains("secret dashboard"));
        assert!(!html.contains("spinner"));
        assert_eq!(DENIED_WHEN_ANONYMOUS.load(Ordering::SeqCst), 1);
    }
}
