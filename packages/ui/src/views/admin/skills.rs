use dioxus::prelude::*;
use store::{Skill, SkillDraft};

use crate::components::{Button, ButtonVariant, Field, FormErrorText};
use crate::context::use_portfolio;
use crate::forms::{parse_level, FormError, SkillForm};
use crate::icons::FaPlus;
use crate::toast::use_toast;
use crate::views::{ConfirmDialog, ModalOverlay};
use crate::Icon;

use super::{EditorHeader, ItemRow, ListModal, ModalHeader};

#[component]
pub fn SkillsEditor() -> Element {
    let portfolio = use_portfolio();
    let toaster = use_toast();
    let skills = portfolio.with(|doc| doc.skills.clone());
    let mut modal = use_signal(|| None::<ListModal<Skill>>);
    let mut pending_delete = use_signal(|| None::<Skill>);

    let save_portfolio = portfolio.clone();
    let on_save = move |draft: SkillDraft| {
        let editing = (*modal.peek())
            .as_ref()
            .and_then(|m| m.entity().map(|skill| skill.id.clone()));
        match editing {
            Some(id) => match save_portfolio.update_skill(&id, draft.into()) {
                Some(true) => toaster.success("Skill updated!"),
                Some(false) => toaster.error("That skill no longer exists"),
                None => {}
            },
            None => {
                if save_portfolio.add_skill(draft).is_some() {
                    toaster.success("Skill added!");
                }
            }
        }
        modal.set(None);
    };

    let on_confirm_delete = move |_: ()| {
        let target = (*pending_delete.peek()).clone();
        if let Some(skill) = target {
            match portfolio.remove_skill(&skill.id) {
                Some(true) => toaster.success("Skill deleted"),
                Some(false) => toaster.error("That skill no longer exists"),
                None => {}
            }
        }
        pending_delete.set(None);
    };

    rsx! {
        div {
            EditorHeader { title: "Skills", subtitle: "Manage your skills and proficiency levels" }
            div {
                class: "item-list",
                for skill in skills {
                    SkillRow {
                        key: "{skill.id}",
                        skill: skill.clone(),
                        on_edit: move |s| modal.set(Some(ListModal::Edit(s))),
                        on_delete: move |s| pending_delete.set(Some(s)),
                    }
                }
            }
            Button {
                onclick: move |_| modal.set(Some(ListModal::Add)),
                Icon { icon: FaPlus, width: 16, height: 16 }
                " Add Skill"
            }
            if let Some(open) = modal() {
                SkillModal {
                    skill: open.entity().cloned(),
                    on_save,
                    on_close: move |_| modal.set(None),
                }
            }
            if let Some(skill) = pending_delete() {
                ConfirmDialog {
                    message: "Delete \"{skill.name}\"?",
                    confirm_label: "Delete",
                    on_confirm: on_confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}

#[component]
fn SkillRow(skill: Skill, on_edit: EventHandler<Skill>, on_delete: EventHandler<Skill>) -> Element {
    let subtitle = format!("{}% proficiency", skill.level);
    let title = skill.name.clone();
    let edit_target = skill.clone();

    rsx! {
        ItemRow {
            title,
            subtitle,
            on_edit: move |_| on_edit.call(edit_target.clone()),
            on_delete: move |_| on_delete.call(skill.clone()),
        }
    }
}

#[component]
fn SkillModal(
    skill: Option<Skill>,
    on_save: EventHandler<SkillDraft>,
    on_close: EventHandler<()>,
) -> Element {
    let editing = skill.is_some();
    let heading = if editing { "Edit Skill" } else { "Add Skill" };
    let mut form = use_signal(|| skill.as_ref().map(SkillForm::from_skill).unwrap_or_default());
    let mut error = use_signal(|| None::<FormError>);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let result = form.read().to_draft();
        match result {
            Ok(draft) => on_save.call(draft),
            Err(e) => error.set(Some(e)),
        }
    };

    let level = form.read().level;

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            ModalHeader {
                title: "{heading}",
                on_close: move |_| on_close.call(()),
            }
            form {
                onsubmit,
                Field {
                    label: "Skill Name",
                    input {
                        class: "form-input",
                        required: true,
                        value: "{form.read().name}",
                        placeholder: "React",
                        oninput: move |evt| {
                            form.write().name = evt.value();
                            error.set(None);
                        },
                    }
                }
                Field {
                    label: "Proficiency Level: {level}%",
                    input {
                        class: "form-range",
                        r#type: "range",
                        min: "0",
                        max: "100",
                        value: "{level}",
                        oninput: move |evt| {
                            if let Some(level) = parse_level(&evt.value()) {
                                form.write().level = level;
                            }
                        },
                    }
                }
                if let Some(e) = error() {
                    FormErrorText { message: e.to_string() }
                }
                div {
                    class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        r#type: "submit",
                        if editing { "Save Changes" } else { "Add Skill" }
                    }
                }
            }
        }
    }
}
