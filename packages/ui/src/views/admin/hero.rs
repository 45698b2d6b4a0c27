use dioxus::prelude::*;

use crate::components::{Button, Field};
use crate::context::use_portfolio;
use crate::toast::use_toast;

use super::EditorHeader;

#[component]
pub fn HeroEditor() -> Element {
    let portfolio = use_portfolio();
    let toaster = use_toast();
    let mut form = use_signal(|| portfolio.peek(|doc| doc.hero.clone()));

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if portfolio.set_hero(form()).is_some() {
            toaster.success("Hero section updated!");
        }
    };

    rsx! {
        div {
            EditorHeader { title: "Hero Section", subtitle: "Edit your hero banner content" }
            form {
                onsubmit,
                Field {
                    label: "Your Name",
                    input {
                        class: "form-input",
                        value: "{form.read().name}",
                        placeholder: "John Doe",
                        oninput: move |evt| form.write().name = evt.value(),
                    }
                }
                Field {
                    label: "Title / Role",
                    input {
                        class: "form-input",
                        value: "{form.read().title}",
                        placeholder: "Full Stack Developer",
                        oninput: move |evt| form.write().title = evt.value(),
                    }
                }
                Field {
                    label: "Tagline",
                    textarea {
                        class: "form-textarea",
                        rows: "3",
                        value: "{form.read().tagline}",
                        placeholder: "A short catchy sentence about you",
                        oninput: move |evt| form.write().tagline = evt.value(),
                    }
                }
                Button { r#type: "submit", "Save Changes" }
            }
        }
    }
}
