use dioxus::prelude::*;

use crate::theme::ThemeToggle;

/// Top bar: `brand` on the left, `children` (route links) and the theme
/// toggle on the right. Platform packages supply the links since they own the
/// router.
#[component]
pub fn Navbar(brand: Element, children: Element) -> Element {
    rsx! {
        nav {
            class: "navbar",
            {brand}
            div {
                class: "navbar-links",
                {children}
                ThemeToggle {}
            }
        }
    }
}
