use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::Icon;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card or the close button triggers `on_close`.
#[component]
pub fn ModalOverlay(
    title: String,
    on_close: EventHandler<()>,
    #[props(default)] wide: bool,
    children: Element,
) -> Element {
    let card_class = if wide { "modal-card modal-card--wide" } else { "modal-card" };

    rsx! {
        div {
            class: "modal-backdrop",
            style: "z-index: 2000",
            onclick: move |_| on_close.call(()),
            div {
                class: "{card_class}",
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div { class: "modal-header",
                    h3 { "{title}" }
                    button {
                        class: "icon-btn",
                        title: "Close",
                        onclick: move |_| on_close.call(()),
                        Icon { icon: FaXmark, width: 14, height: 14 }
                    }
                }
                div { class: "modal-body", {children} }
            }
        }
    }
}
