use dioxus::prelude::*;
use store::{Project, ProjectDraft};

use crate::components::{Button, ButtonVariant, Field, FormErrorText};
use crate::context::use_portfolio;
use crate::forms::{join_tech_list, FormError, ProjectForm};
use crate::icons::FaPlus;
use crate::toast::use_toast;
use crate::views::{ConfirmDialog, ModalOverlay};
use crate::Icon;

use super::{EditorHeader, ItemRow, ListModal, ModalHeader};

#[component]
pub fn ProjectsEditor() -> Element {
    let portfolio = use_portfolio();
    let toaster = use_toast();
    let projects = portfolio.with(|doc| doc.projects.clone());
    let mut modal = use_signal(|| None::<ListModal<Project>>);
    let mut pending_delete = use_signal(|| None::<Project>);

    let save_portfolio = portfolio.clone();
    let on_save = move |draft: ProjectDraft| {
        let editing = (*modal.peek())
            .as_ref()
            .and_then(|m| m.entity().map(|project| project.id.clone()));
        match editing {
            Some(id) => match save_portfolio.update_project(&id, draft.into()) {
                Some(true) => toaster.success("Project updated!"),
                Some(false) => toaster.error("That project no longer exists"),
                None => {}
            },
            None => {
                if save_portfolio.add_project(draft).is_some() {
                    toaster.success("Project added!");
                }
            }
        }
        modal.set(None);
    };

    let on_confirm_delete = move |_: ()| {
        let target = (*pending_delete.peek()).clone();
        if let Some(project) = target {
            match portfolio.remove_project(&project.id) {
                Some(true) => toaster.success("Project deleted"),
                Some(false) => toaster.error("That project no longer exists"),
                None => {}
            }
        }
        pending_delete.set(None);
    };

    rsx! {
        div {
            EditorHeader { title: "Projects", subtitle: "Manage your portfolio projects" }
            div {
                class: "item-list",
                for project in projects {
                    ProjectRow {
                        key: "{project.id}",
                        project: project.clone(),
                        on_edit: move |p| modal.set(Some(ListModal::Edit(p))),
                        on_delete: move |p| pending_delete.set(Some(p)),
                    }
                }
            }
            Button {
                onclick: move |_| modal.set(Some(ListModal::Add)),
                Icon { icon: FaPlus, width: 16, height: 16 }
                " Add Project"
            }
            if let Some(open) = modal() {
                ProjectModal {
                    project: open.entity().cloned(),
                    on_save,
                    on_close: move |_| modal.set(None),
                }
            }
            if let Some(project) = pending_delete() {
                ConfirmDialog {
                    message: "Delete \"{project.title}\"?",
                    confirm_label: "Delete",
                    on_confirm: on_confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}

#[component]
fn ProjectRow(
    project: Project,
    on_edit: EventHandler<Project>,
    on_delete: EventHandler<Project>,
) -> Element {
    let subtitle = join_tech_list(&project.tech);
    let title = project.title.clone();
    let edit_target = project.clone();

    rsx! {
        ItemRow {
            title,
            subtitle,
            on_edit: move |_| on_edit.call(edit_target.clone()),
            on_delete: move |_| on_delete.call(project.clone()),
        }
    }
}

/// Add or edit form for one project. `project` is `None` when adding.
#[component]
fn ProjectModal(
    project: Option<Project>,
    on_save: EventHandler<ProjectDraft>,
    on_close: EventHandler<()>,
) -> Element {
    let editing = project.is_some();
    let heading = if editing { "Edit Project" } else { "Add Project" };
    let mut form = use_signal(|| {
        project
            .as_ref()
            .map(ProjectForm::from_project)
            .unwrap_or_default()
    });
    let mut error = use_signal(|| None::<FormError>);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let result = form.read().to_draft();
        match result {
            Ok(draft) => on_save.call(draft),
            Err(e) => error.set(Some(e)),
        }
    };

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
                    label: "Title",
                    input {
                        class: "form-input",
                        required: true,
                        value: "{form.read().title}",
                        placeholder: "My Awesome Project",
                        oninput: move |evt| {
                            form.write().title = evt.value();
                            error.set(None);
                        },
                    }
                }
                Field {
                    label: "Description",
                    textarea {
                        class: "form-textarea",
                        rows: "3",
                        value: "{form.read().description}",
                        placeholder: "What does this project do?",
                        oninput: move |evt| form.write().description = evt.value(),
                    }
                }
                Field {
                    label: "Technologies (comma-separated)",
                    input {
                        class: "form-input",
                        value: "{form.read().tech}",
                        placeholder: "React, Node.js, MongoDB",
                        oninput: move |evt| form.write().tech = evt.value(),
                    }
                }
                Field {
                    label: "Live URL",
                    input {
                        class: "form-input",
                        value: "{form.read().link}",
                        placeholder: "https://myproject.com",
                        oninput: move |evt| form.write().link = evt.value(),
                    }
                }
                Field {
                    label: "GitHub URL",
                    input {
                        class: "form-input",
                        value: "{form.read().github}",
                        placeholder: "https://github.com/user/repo",
                        oninput: move |evt| form.write().github = evt.value(),
                    }
                }
                Field {
                    label: "Image URL (optional)",
                    input {
                        class: "form-input",
                        value: "{form.read().image}",
                        placeholder: "https://example.com/screenshot.png",
                        oninput: move |evt| form.write().image = evt.value(),
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
                        if editing { "Save Changes" } else { "Add Project" }
                    }
                }
            }
        }
    }
}
