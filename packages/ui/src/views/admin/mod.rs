//! The admin editor: a sidebar of section tabs and one editor per section.
//!
//! Singleton sections (hero, about, contact) edit a local copy of the record
//! and write it back on submit. Projects and skills are edited one item at a
//! time through a modal. Every write goes through [`use_portfolio`], so the
//! public page picks up the change as soon as it is committed.

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::context::use_portfolio;
use crate::icons::{
    FaEnvelope, FaFileLines, FaFolderOpen, FaPen, FaRotateLeft, FaTrashCan, FaUser, FaWrench,
    FaXmark,
};
use crate::toast::use_toast;
use crate::views::ConfirmDialog;
use crate::Icon;

mod about;
mod contact;
mod hero;
mod projects;
mod skills;

pub use about::AboutEditor;
pub use contact::ContactEditor;
pub use hero::HeroEditor;
pub use projects::ProjectsEditor;
pub use skills::SkillsEditor;

const ADMIN_CSS: Asset = asset!("/assets/styling/admin.css");

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AdminTab {
    #[default]
    Hero,
    About,
    Projects,
    Skills,
    Contact,
}

impl AdminTab {
    pub const ALL: [AdminTab; 5] = [
        AdminTab::Hero,
        AdminTab::About,
        AdminTab::Projects,
        AdminTab::Skills,
        AdminTab::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AdminTab::Hero => "Hero",
            AdminTab::About => "About",
            AdminTab::Projects => "Projects",
            AdminTab::Skills => "Skills",
            AdminTab::Contact => "Contact",
        }
    }
}

fn tab_icon(tab: AdminTab) -> Element {
    match tab {
        AdminTab::Hero => rsx! { Icon { icon: FaUser, width: 18, height: 18 } },
        AdminTab::About => rsx! { Icon { icon: FaFileLines, width: 18, height: 18 } },
        AdminTab::Projects => rsx! { Icon { icon: FaFolderOpen, width: 18, height: 18 } },
        AdminTab::Skills => rsx! { Icon { icon: FaWrench, width: 18, height: 18 } },
        AdminTab::Contact => rsx! { Icon { icon: FaEnvelope, width: 18, height: 18 } },
    }
}

/// Which modal a list editor has open.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum ListModal<T> {
    Add,
    Edit(T),
}

impl<T> ListModal<T> {
    /// The item being edited, `None` when adding.
    pub(crate) fn entity(&self) -> Option<&T> {
        match self {
            ListModal::Add => None,
            ListModal::Edit(item) => Some(item),
        }
    }
}

#[component]
pub fn AdminView() -> Element {
    let portfolio = use_portfolio();
    let toaster = use_toast();
    let mut active = use_signal(AdminTab::default);
    let mut confirm_reset = use_signal(|| false);
    // Bumped on reset so the open editor remounts and drops its stale form.
    let mut resets = use_signal(|| 0u32);

    let on_reset = move |_: ()| {
        confirm_reset.set(false);
        if portfolio.reset().is_some() {
            toaster.success("Data reset to defaults");
        }
        *resets.write() += 1;
    };

    let tab = active();
    let editor_key = format!("{}-{}", tab.label(), resets());

    rsx! {
        document::Stylesheet { href: ADMIN_CSS }
        div {
            class: "page-wrapper",
            div {
                class: "admin-layout",
                aside {
                    class: "admin-sidebar",
                    p { class: "admin-sidebar-title", "Manage" }
                    nav {
                        class: "admin-nav",
                        for item in AdminTab::ALL {
                            button {
                                key: "{item.label()}",
                                class: if item == tab { "active" } else { "" },
                                onclick: move |_| active.set(item),
                                {tab_icon(item)}
                                "{item.label()}"
                            }
                        }
                        hr { class: "admin-nav-divider" }
                        button {
                            class: "admin-nav-danger",
                            onclick: move |_| confirm_reset.set(true),
                            Icon { icon: FaRotateLeft, width: 18, height: 18 }
                            "Reset All"
                        }
                    }
                }
                main {
                    class: "admin-content",
                    for key in std::iter::once(editor_key) {
                        EditorPane { key: "{key}", tab }
                    }
                }
            }
            if confirm_reset() {
                ConfirmDialog {
                    message: "Reset all data to defaults?",
                    confirm_label: "Reset",
                    on_confirm: on_reset,
                    on_cancel: move |_| confirm_reset.set(false),
                }
            }
        }
    }
}

#[component]
fn EditorPane(tab: AdminTab) -> Element {
    match tab {
        AdminTab::Hero => rsx! { HeroEditor {} },
        AdminTab::About => rsx! { AboutEditor {} },
        AdminTab::Projects => rsx! { ProjectsEditor {} },
        AdminTab::Skills => rsx! { SkillsEditor {} },
        AdminTab::Contact => rsx! { ContactEditor {} },
    }
}

#[component]
pub(crate) fn EditorHeader(title: String, subtitle: String) -> Element {
    rsx! {
        div {
            class: "admin-header",
            h2 { "{title}" }
            p { "{subtitle}" }
        }
    }
}

/// One entry of a list editor with edit and delete buttons.
#[component]
pub(crate) fn ItemRow(
    title: String,
    subtitle: String,
    on_edit: EventHandler<()>,
    on_delete: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "item-row",
            div {
                class: "item-row-info",
                div { class: "item-row-title", "{title}" }
                div { class: "item-row-subtitle", "{subtitle}" }
            }
            div {
                class: "item-row-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    small: true,
                    title: "Edit",
                    onclick: move |_| on_edit.call(()),
                    Icon { icon: FaPen, width: 14, height: 14 }
                }
                Button {
                    variant: ButtonVariant::Danger,
                    small: true,
                    title: "Delete",
                    onclick: move |_| on_delete.call(()),
                    Icon { icon: FaTrashCan, width: 14, height: 14 }
                }
            }
        }
    }
}

/// Title row of a list modal with a close button.
#[component]
pub(crate) fn ModalHeader(title: String, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "modal-header",
            h3 { class: "modal-title", "{title}" }
            Button {
                variant: ButtonVariant::Outline,
                small: true,
                title: "Close",
                onclick: move |_| on_close.call(()),
                Icon { icon: FaXmark, width: 16, height: 16 }
            }
        }
    }
}
