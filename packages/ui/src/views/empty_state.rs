use dioxus::prelude::*;

/// Placeholder shown in place of an empty list.
#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        p { class: "empty-state", "{message}" }
    }
}
