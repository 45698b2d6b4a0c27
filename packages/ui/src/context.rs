//! Portfolio store context for the UI.
//!
//! [`PortfolioProvider`] opens the platform store once, subscribes a reactive
//! snapshot to it, and hands a [`PortfolioHandle`] to every view below it.
//! Views read through the snapshot (so they re-render after each change) and
//! write through the handle's methods, which forward to the store.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use store::{
    About, Contact, Hero, Portfolio, PortfolioStore, Project, ProjectDraft, ProjectPatch, Skill,
    SkillDraft, SkillPatch,
};

use crate::storage::{make_storage, PlatformStorage};
use crate::toast::{use_toast, Toaster};

type SharedStore = Rc<RefCell<PortfolioStore<PlatformStorage>>>;

/// Access to the portfolio store from components.
///
/// Mutations return `None` when the change could not be persisted. The change
/// is still live for this session and an error toast has already been shown.
#[derive(Clone)]
pub struct PortfolioHandle {
    store: SharedStore,
    document: Signal<Portfolio>,
    toaster: Toaster,
}

impl PartialEq for PortfolioHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

impl PortfolioHandle {
    /// Read the current document. Subscribes the calling component.
    pub fn with<R>(&self, f: impl FnOnce(&Portfolio) -> R) -> R {
        f(&self.document.read())
    }

    /// Read the current document without subscribing.
    pub fn peek<R>(&self, f: impl FnOnce(&Portfolio) -> R) -> R {
        f(&self.document.peek())
    }

    pub fn set_hero(&self, hero: Hero) -> Option<()> {
        self.run(|store| store.set_hero(hero))
    }

    pub fn set_about(&self, about: About) -> Option<()> {
        self.run(|store| store.set_about(about))
    }

    pub fn set_contact(&self, contact: Contact) -> Option<()> {
        self.run(|store| store.set_contact(contact))
    }

    pub fn add_project(&self, draft: ProjectDraft) -> Option<Project> {
        self.run(|store| store.add_project(draft))
    }

    /// `Some(false)` when no project has that id.
    pub fn update_project(&self, id: &str, patch: ProjectPatch) -> Option<bool> {
        self.run(|store| store.update_project(id, patch))
    }

    pub fn remove_project(&self, id: &str) -> Option<bool> {
        self.run(|store| store.remove_project(id))
    }

    pub fn add_skill(&self, draft: SkillDraft) -> Option<Skill> {
        self.run(|store| store.add_skill(draft))
    }

    /// `Some(false)` when no skill has that id.
    pub fn update_skill(&self, id: &str, patch: SkillPatch) -> Option<bool> {
        self.run(|store| store.update_skill(id, patch))
    }

    pub fn remove_skill(&self, id: &str) -> Option<bool> {
        self.run(|store| store.remove_skill(id))
    }

    pub fn reset(&self) -> Option<()> {
        self.run(|store| store.reset())
    }

    fn run<T>(
        &self,
        op: impl FnOnce(&mut PortfolioStore<PlatformStorage>) -> store::Result<T>,
    ) -> Option<T> {
        let result = op(&mut self.store.borrow_mut());
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!("Portfolio change not saved: {}", e);
                self.toaster
                    .error(format!("Changes apply to this session only: {e}"));
                None
            }
        }
    }
}

pub fn use_portfolio() -> PortfolioHandle {
    use_context::<PortfolioHandle>()
}

/// Opens the store and provides a [`PortfolioHandle`]. Needs a
/// [`ToastProvider`](crate::ToastProvider) above it.
#[component]
pub fn PortfolioProvider(
    #[props(default = store::DEFAULT_STORAGE_KEY.to_string())] storage_key: String,
    children: Element,
) -> Element {
    let toaster = use_toast();
    let store: SharedStore = use_hook(|| {
        let store = PortfolioStore::open_with_key(make_storage(), storage_key.clone());
        Rc::new(RefCell::new(store))
    });
    let mut document = use_signal(|| store.borrow().document().clone());

    // Held for the provider's lifetime; dropping the hook unsubscribes.
    let _subscription = use_hook(|| {
        let subscription = store
            .borrow()
            .subscribe(move |doc| document.set(doc.clone()));
        Rc::new(subscription)
    });

    use_context_provider(|| PortfolioHandle {
        store: store.clone(),
        document,
        toaster,
    });

    rsx! {
        {children}
    }
}
