//! Order import widget.
//!
//! Picking a platform first asks the backend whether it holds a session with
//! that platform. If it does, the backend fetches the order history and the
//! JSON lands in the text box for review; otherwise the user gets step-by-step
//! instructions for copying it out of the browser by hand. Either way the
//! import itself goes through [`api::ApiClient::import_pasted`].

use api::{ApiError, ImportPlatform};
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::icons::{FaCircleCheck, FaCircleInfo, FaCloudArrowUp, FaTriangleExclamation, FaXmark};
use crate::queries::{use_query_cache, QueryKey};
use crate::Icon;

#[component]
pub fn OrderImport() -> Element {
    let auth = use_auth();
    let cache = use_query_cache();

    let mut platform = use_signal(|| Option::<ImportPlatform>::None);
    let mut orders_text = use_signal(String::new);
    let mut show_manual = use_signal(|| false);
    let mut show_instructions = use_signal(|| false);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);

    let mut start = {
        let auth = auth.clone();
        move |chosen: ImportPlatform| {
            let auth = auth.clone();
            error.set(None);
            success.set(None);
            orders_text.set(String::new());
            platform.set(Some(chosen));
            spawn(async move {
                busy.set(true);
                let client = auth.client().clone();
                match client.check_platform_login(chosen).await {
                    Ok(login) if login.is_logged_in => {
                        match client.fetch_platform_orders(chosen).await {
                            Ok(pretty) => orders_text.set(pretty),
                            Err(e) => {
                                report(&auth, &e, &format!("Failed to fetch {chosen} orders"), error)
                            }
                        }
                    }
                    Ok(_) => {}
                    Err(e) => report(
                        &auth,
                        &e,
                        &format!("Failed to check {chosen} login status"),
                        error,
                    ),
                }
                show_manual.set(true);
                show_instructions.set(true);
                busy.set(false);
            });
        }
    };
    let mut start_swiggy = start.clone();

    let handle_import = move |_| {
        let Some(chosen) = platform() else {
            return;
        };
        let auth = auth.clone();
        spawn(async move {
            busy.set(true);
            error.set(None);
            success.set(None);
            match auth.client().import_pasted(chosen, &orders_text()).await {
                Ok(result) => {
                    success.set(Some(chosen.success_message(result.imported_count)));
                    show_manual.set(false);
                    show_instructions.set(false);
                    orders_text.set(String::new());
                    platform.set(None);
                    cache.invalidate(&QueryKey::ORDER_DEPENDENT);
                }
                Err(e) => {
                    if let api::ImportError::Api(api_error) = &e {
                        auth.handle_error(api_error);
                    }
                    error.set(Some(e.user_message(chosen)));
                }
            }
            busy.set(false);
        });
    };

    let platform_label = platform().map(|p| p.label()).unwrap_or("Zomato");

    rsx! {
        div { class: "card import",
            div { class: "card-header",
                Icon { icon: FaCloudArrowUp, width: 18, height: 18 }
                h3 { "Import Orders" }
            }
            p { class: "muted",
                "Bring in your order history from food delivery platforms to see its carbon footprint."
            }

            div { class: "import-buttons",
                button {
                    class: "btn btn--zomato",
                    disabled: busy(),
                    onclick: move |_| start(ImportPlatform::Zomato),
                    "Import from Zomato"
                }
                button {
                    class: "btn btn--swiggy",
                    disabled: busy(),
                    onclick: move |_| start_swiggy(ImportPlatform::Swiggy),
                    "Import from Swiggy"
                }
            }

            if let Some(message) = success() {
                div { class: "banner banner--success",
                    Icon { icon: FaCircleCheck, width: 14, height: 14 }
                    span { "{message}" }
                }
            }
            if let Some(message) = error() {
                div { class: "banner banner--error",
                    Icon { icon: FaTriangleExclamation, width: 14, height: 14 }
                    span { "{message}" }
                }
            }

            if let (true, Some(chosen)) = (show_instructions(), platform()) {
                div { class: "instructions",
                    div { class: "instructions-header",
                        Icon { icon: FaCircleInfo, width: 14, height: 14 }
                        h4 { "How to import your {chosen} orders" }
                        button {
                            class: "icon-btn",
                            title: "Hide instructions",
                            onclick: move |_| show_instructions.set(false),
                            Icon { icon: FaXmark, width: 12, height: 12 }
                        }
                    }
                    ol {
                        for step in chosen.instructions() {
                            li { "{step}" }
                        }
                    }
                }
            }

            if show_manual() {
                div { class: "manual-input",
                    label { r#for: "orders-data", "Paste your {platform_label} orders data" }
                    textarea {
                        id: "orders-data",
                        rows: 8,
                        placeholder: "{{ ... }}",
                        value: "{orders_text}",
                        oninput: move |evt: FormEvent| orders_text.set(evt.value()),
                    }
                    div { class: "form-actions",
                        button {
                            class: "btn btn--primary",
                            disabled: busy(),
                            onclick: handle_import,
                            if busy() { "Importing..." } else { "Import Orders" }
                        }
                        button {
                            class: "btn btn--outline",
                            onclick: move |_| {
                                show_manual.set(false);
                                show_instructions.set(false);
                                orders_text.set(String::new());
                            },
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}

fn report(
    auth: &crate::auth::AuthContext,
    e: &ApiError,
    fallback: &str,
    mut error: Signal<Option<String>>,
) {
    tracing::error!("{fallback}: {e}");
    auth.handle_error(e);
    error.set(Some(fallback.to_string()));
}
