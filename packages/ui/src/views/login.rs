use api::Credentials;
use dioxus::prelude::*;

use super::widgets::ErrorBanner;
use crate::icons::FaLeaf;
use crate::{use_auth, Icon};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Email and password sign-in.
///
/// `on_authenticated` fires once the session holds a user, whether that came
/// from this form or from a token restored on load. `footer` sits under the
/// form; the web crate puts the link to registration there.
#[component]
pub fn LoginView(on_authenticated: EventHandler<()>, footer: Element) -> Element {
    let auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let watcher = auth.clone();
    use_effect(move || {
        if watcher.session().is_authenticated() {
            on_authenticated.call(());
        }
    });

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let credentials = Credentials {
            email: email().trim().to_string(),
            password: password(),
        };
        if credentials.email.is_empty() || credentials.password.is_empty() {
            error.set(Some("Please enter your email and password".to_string()));
            return;
        }
        let auth = auth.clone();
        spawn(async move {
            busy.set(true);
            error.set(None);
            if let Err(e) = auth.login(credentials).await {
                tracing::warn!("login failed: {e}");
                error.set(Some(e.user_message("Login failed")));
            }
            busy.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        div { class: "auth-page",
            div { class: "card auth-card",
                div { class: "auth-brand",
                    Icon { icon: FaLeaf, width: 24, height: 24 }
                    h1 { "Welcome back" }
                }
                p { class: "muted", "Sign in to keep tracking your food delivery footprint." }

                if let Some(message) = error() {
                    ErrorBanner { message }
                }

                form { onsubmit: submit,
                    div { class: "field",
                        label { r#for: "email", "Email" }
                        input {
                            id: "email",
                            r#type: "email",
                            autocomplete: "email",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    div { class: "field",
                        label { r#for: "password", "Password" }
                        input {
                            id: "password",
                            r#type: "password",
                            autocomplete: "current-password",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn--primary btn--block",
                        disabled: busy(),
                        if busy() { "Signing in..." } else { "Sign in" }
                    }
                }

                div { class: "auth-footer", {footer} }
            }
        }
    }
}
