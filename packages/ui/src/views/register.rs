use api::Registration;
use dioxus::prelude::*;

use super::widgets::ErrorBanner;
use crate::icons::FaLeaf;
use crate::{use_auth, Icon};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

const MIN_PASSWORD_LEN: usize = 6;

/// First problem with the sign-up form, if any.
fn check_registration(registration: &Registration, confirm: &str) -> Result<(), &'static str> {
    if registration.name.trim().is_empty() {
        return Err("Please enter your name");
    }
    if !registration.email.contains('@') {
        return Err("Please enter a valid email address");
    }
    if registration.password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters");
    }
    if registration.password != confirm {
        return Err("Passwords do not match");
    }
    Ok(())
}

/// Account creation. Behaves like [`super::LoginView`] once the account exists.
#[component]
pub fn RegisterView(on_authenticated: EventHandler<()>, footer: Element) -> Element {
    let auth = use_auth();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
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
        let registration = Registration {
            name: name().trim().to_string(),
            email: email().trim().to_string(),
            password: password(),
        };
        if let Err(problem) = check_registration(&registration, &confirm()) {
            error.set(Some(problem.to_string()));
            return;
        }
        let auth = auth.clone();
        spawn(async move {
            busy.set(true);
            error.set(None);
            if let Err(e) = auth.register(registration).await {
                tracing::warn!("registration failed: {e}");
                error.set(Some(e.user_message("Registration failed")));
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
                    h1 { "Create your account" }
                }
                p { class: "muted", "Start measuring the carbon footprint of your food deliveries." }

                if let Some(message) = error() {
                    ErrorBanner { message }
                }

                form { onsubmit: submit,
                    div { class: "field",
                        label { r#for: "name", "Name" }
                        input {
                            id: "name",
                            r#type: "text",
                            autocomplete: "name",
                            value: "{name}",
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }
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
                            autocomplete: "new-password",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }
                    div { class: "field",
                        label { r#for: "confirm", "Confirm Password" }
                        input {
                            id: "confirm",
                            r#type: "password",
                            autocomplete: "new-password",
                            value: "{confirm}",
                            oninput: move |evt| confirm.set(evt.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn--primary btn--block",
                        disabled: busy(),
                        if busy() { "Creating account..." } else { "Create Account" }
                    }
                }

                div { class: "auth-footer", {footer} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(name: &str, email: &str, password: &str) -> Registration {
        Registration {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_check_registration() {
        let ok = registration("Asha", "asha@example.com", "secret1");
        assert_eq!(check_registration(&ok, "secret1"), Ok(()));
        assert_eq!(
            check_registration(&registration(" ", "a@b.c", "secret1"), "secret1"),
            Err("Please enter your name")
        );
        assert_eq!(
            check_registration(&registration("Asha", "asha", "secret1"), "secret1"),
            Err("Please enter a valid email address")
        );
        assert_eq!(
            check_registration(&registration("Asha", "a@b.c", "123"), "123"),
            Err("Password must be at least 6 characters")
        );
        assert_eq!(
            check_registration(&ok, "secret2"),
            Err("Passwords do not match")
        );
    }
}
