use dioxus::prelude::*;

use crate::components::{Button, Field};
use crate::context::use_portfolio;
use crate::toast::use_toast;

use super::EditorHeader;

#[component]
pub fn AboutEditor() -> Element {
    let portfolio = use_portfolio();
    let toaster = use_toast();
    let mut form = use_signal(|| portfolio.peek(|doc| doc.about.clone()));

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if portfolio.set_about(form()).is_some() {
            toaster.success("About section updated!");
        }
    };

    rsx! {
        div {
            EditorHeader { title: "About Section", subtitle: "Tell visitors about yourself" }
            form {
                onsubmit,
                Field {
                    label: "Bio",
                    textarea {
                        class: "form-textarea",
                        rows: "6",
                        value: "{form.read().bio}",
                        placeholder: "Write about yourself...",
                        oninput: move |evt| form.write().bio = evt.value(),
                    }
                }
                Field {
                    label: "Profile Image URL (optional)",
                    input {
                        class: "form-input",
                        value: "{form.read().image}",
                        placeholder: "https://example.com/photo.jpg",
                        oninput: move |evt| form.write().image = evt.value(),
                    }
                }
                Button { r#type: "submit", "Save Changes" }
            }
        }
    }
}
