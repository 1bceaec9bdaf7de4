use dioxus::prelude::*;

use crate::icons::{FaBars, FaLeaf, FaXmark};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Top bar with the brand and a menu that collapses behind a toggle on
/// narrow screens. The caller supplies the menu entries as children.
#[component]
pub fn Navbar(brand: Element, children: Element) -> Element {
    let mut open = use_signal(|| false);
    let menu_class = if open() { "navbar-menu navbar-menu--open" } else { "navbar-menu" };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        nav {
            class: "navbar",
            div { class: "navbar-brand",
                Icon { icon: FaLeaf, width: 20, height: 20 }
                {brand}
            }
            button {
                class: "navbar-toggle",
                aria_label: "Toggle navigation",
                onclick: move |_| open.set(!open()),
                if open() {
                    Icon { icon: FaXmark, width: 18, height: 18 }
                } else {
                    Icon { icon: FaBars, width: 18, height: 18 }
                }
            }
            div {
                class: "{menu_class}",
                onclick: move |_| open.set(false),
                {children}
            }
        }
    }
}
