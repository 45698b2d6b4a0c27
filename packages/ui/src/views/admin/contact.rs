use dioxus::prelude::*;

use crate::components::{Button, Field};
use crate::context::use_portfolio;
use crate::toast::use_toast;

use super::EditorHeader;

#[component]
pub fn ContactEditor() -> Element {
    let portfolio = use_portfolio();
    let toaster = use_toast();
    let mut form = use_signal(|| portfolio.peek(|doc| doc.contact.clone()));

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if portfolio.set_contact(form()).is_some() {
            toaster.success("Contact info updated!");
        }
    };

    rsx! {
        div {
            EditorHeader { title: "Contact Info", subtitle: "Update your contact details and social links" }
            form {
                onsubmit,
                Field {
                    label: "Email",
                    input {
                        class: "form-input",
                        r#type: "email",
                        value: "{form.read().email}",
                        placeholder: "hello@example.com",
                        oninput: move |evt| form.write().email = evt.value(),
                    }
                }
                Field {
                    label: "GitHub URL",
                    input {
                        class: "form-input",
                        value: "{form.read().github}",
                        placeholder: "https://github.com/username",
                        oninput: move |evt| form.write().github = evt.value(),
                    }
                }
                Field {
                    label: "LinkedIn URL",
                    input {
                        class: "form-input",
                        value: "{form.read().linkedin}",
                        placeholder: "https://linkedin.com/in/username",
                        oninput: move |evt| form.write().linkedin = evt.value(),
                    }
                }
                Field {
                    label: "Twitter URL",
                    input {
                        class: "form-input",
                        value: "{form.read().twitter}",
                        placeholder: "https://twitter.com/username",
                        oninput: move |evt| form.write().twitter = evt.value(),
                    }
                }
                Button { r#type: "submit", "Save Changes" }
            }
        }
    }
}
