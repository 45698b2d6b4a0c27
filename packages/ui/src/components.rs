//! Small form primitives shared by the editors.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Danger,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Danger => "btn btn-danger",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] small: bool,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] title: String,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let class = if small {
        format!("{} btn-sm", variant.class())
    } else {
        variant.class().to_string()
    };

    rsx! {
        button {
            class: "{class}",
            r#type: "{r#type}",
            title: "{title}",
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

/// Label plus control, stacked.
#[component]
pub fn Field(label: String, children: Element) -> Element {
    rsx! {
        div {
            class: "form-group",
            label { class: "form-label", "{label}" }
            {children}
        }
    }
}

/// Inline validation message under a form.
#[component]
pub fn FormErrorText(message: String) -> Element {
    rsx! {
        p { class: "form-error", role: "alert", "{message}" }
    }
}
