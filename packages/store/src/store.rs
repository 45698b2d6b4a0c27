//! # PortfolioStore: the single owner of the portfolio document
//!
//! [`PortfolioStore`] holds the current [`Portfolio`], is the only thing that
//! mutates it, writes it to a [`RecordStorage`] after every change, and tells
//! subscribers about the new state.
//!
//! ## Lifecycle
//!
//! The document is loaded once in [`open`](PortfolioStore::open). A missing
//! record, or one that fails to parse as a [`Portfolio`], yields
//! [`Portfolio::default`]; that fallback is logged and never reported as an
//! error. [`reset`](PortfolioStore::reset) later discards every customization.
//!
//! ## Mutations
//!
//! | Method | Effect |
//! |--------|--------|
//! | [`set_hero`](PortfolioStore::set_hero) / [`set_about`](PortfolioStore::set_about) / [`set_contact`](PortfolioStore::set_contact) | Replace the singleton wholesale. |
//! | [`add_project`](PortfolioStore::add_project) / [`add_skill`](PortfolioStore::add_skill) | Assign a fresh id, append, return the new entity. |
//! | [`update_project`](PortfolioStore::update_project) / [`update_skill`](PortfolioStore::update_skill) | Shallow-merge a patch onto the entity with that id. |
//! | [`remove_project`](PortfolioStore::remove_project) / [`remove_skill`](PortfolioStore::remove_skill) | Remove the entity with that id. |
//! | [`reset`](PortfolioStore::reset) | Replace the whole document with the default. |
//!
//! Each effective mutation runs the same three steps before returning: apply
//! the change in memory, write the serialized document under the store's key,
//! then call every subscriber once with the new document. Update and remove on
//! an unknown id change nothing, so they neither write nor notify; they return
//! `Ok(false)`.
//!
//! A failed write does not roll anything back. Subscribers are still notified
//! (the in-memory document is the session's source of truth) and the failure
//! comes back as [`StoreError::Storage`](crate::StoreError::Storage) for the
//! caller to report.
//!
//! ## Subscriptions
//!
//! [`subscribe`](PortfolioStore::subscribe) registers a handler and returns a
//! [`Subscription`] guard. Dropping the guard unregisters the handler, even if
//! that happens from inside a notification. Delivery is synchronous and happens
//! inside the mutating call; order across subscribers is registration order but
//! callers should not rely on it.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{debug, error, warn};

use crate::error::Result;
use crate::ids::IdGenerator;
use crate::models::{
    About, Contact, Hero, Portfolio, Project, ProjectDraft, ProjectPatch, Skill, SkillDraft,
    SkillPatch,
};
use crate::storage::RecordStorage;

/// Record key used when no other key is configured.
pub const DEFAULT_STORAGE_KEY: &str = "portfolio-data";

type Handler = Box<dyn FnMut(&Portfolio)>;

#[derive(Default)]
struct Subscribers {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
    notifying: bool,
    /// Handlers moved out of `handlers` by the running notification.
    checked_out: usize,
    /// Subscriptions dropped while `handlers` was checked out for a notification.
    cancelled: Vec<u64>,
}

impl Subscribers {
    fn add(&mut self, handler: Handler) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.handlers.push((id, handler));
        id
    }

    fn remove(&mut self, id: u64) {
        if self.notifying {
            self.cancelled.push(id);
        } else {
            self.handlers.retain(|(h, _)| *h != id);
        }
    }

    /// Live handlers, including the ones a running notification has checked out.
    fn len(&self) -> usize {
        (self.handlers.len() + self.checked_out).saturating_sub(self.cancelled.len())
    }

    /// Call every handler once. The list is moved out while handlers run so a
    /// handler may subscribe or drop a subscription without a double borrow.
    fn notify(cell: &RefCell<Self>, document: &Portfolio) {
        let mut handlers = {
            let mut subs = cell.borrow_mut();
            subs.notifying = true;
            let handlers = std::mem::take(&mut subs.handlers);
            subs.checked_out = handlers.len();
            handlers
        };

        for (id, handler) in handlers.iter_mut() {
            if cell.borrow().cancelled.contains(id) {
                continue;
            }
            handler(document);
        }

        let mut subs = cell.borrow_mut();
        subs.notifying = false;
        subs.checked_out = 0;
        // Handlers registered during the notification
        handlers.append(&mut subs.handlers);
        let cancelled = std::mem::take(&mut subs.cancelled);
        handlers.retain(|(id, _)| !cancelled.contains(id));
        subs.handlers = handlers;
    }
}

/// Guard returned by [`PortfolioStore::subscribe`]. Unsubscribes on drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    subscribers: Weak<RefCell<Subscribers>>,
}

impl Subscription {
    /// Explicitly end the subscription. Same as dropping the guard.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            subscribers.borrow_mut().remove(self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

/// Owner of the portfolio document, backed by a RecordStorage.
pub struct PortfolioStore<S: RecordStorage> {
    storage: S,
    key: String,
    document: Portfolio,
    ids: IdGenerator,
    subscribers: Rc<RefCell<Subscribers>>,
}

impl<S: RecordStorage> PortfolioStore<S> {
    /// Load the document stored under [`DEFAULT_STORAGE_KEY`].
    pub fn open(storage: S) -> Self {
        Self::open_with_key(storage, DEFAULT_STORAGE_KEY)
    }

    /// Load the document stored under `key`, or the default if there is no
    /// valid record.
    pub fn open_with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let document = load_document(&storage, &key);
        Self {
            storage,
            key,
            document,
            ids: IdGenerator::new(),
            subscribers: Rc::default(),
        }
    }

    /// Current document. Read-only: all changes go through the store.
    pub fn document(&self) -> &Portfolio {
        &self.document
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.document.projects.iter().find(|p| p.id == id)
    }

    pub fn skill(&self, id: &str) -> Option<&Skill> {
        self.document.skills.iter().find(|s| s.id == id)
    }

    /// Register `handler` to run after every mutation with the new document.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(&Portfolio) + 'static,
    {
        let id = self.subscribers.borrow_mut().add(Box::new(handler));
        Subscription {
            id,
            subscribers: Rc::downgrade(&self.subscribers),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    pub fn set_hero(&mut self, hero: Hero) -> Result<()> {
        self.document.hero = hero;
        debug!("hero updated");
        self.commit()
    }

    pub fn set_about(&mut self, about: About) -> Result<()> {
        self.document.about = about;
        debug!("about updated");
        self.commit()
    }

    pub fn set_contact(&mut self, contact: Contact) -> Result<()> {
        self.document.contact = contact;
        debug!("contact updated");
        self.commit()
    }

    /// Append a new project and return it with its assigned id.
    pub fn add_project(&mut self, draft: ProjectDraft) -> Result<Project> {
        let id = self.fresh_id(|doc, id| doc.projects.iter().any(|p| p.id == id));
        let project = Project::from_draft(id, draft);
        self.document.projects.push(project.clone());
        debug!(id = %project.id, "project added");
        self.commit()?;
        Ok(project)
    }

    /// Merge `patch` onto the project with `id`. `Ok(false)` if there is none.
    pub fn update_project(&mut self, id: &str, patch: ProjectPatch) -> Result<bool> {
        let Some(project) = self.document.projects.iter_mut().find(|p| p.id == id) else {
            debug!(id, "update ignored, no such project");
            return Ok(false);
        };
        project.apply(patch);
        debug!(id, "project updated");
        self.commit()?;
        Ok(true)
    }

    /// Remove the project with `id`. `Ok(false)` if there is none.
    pub fn remove_project(&mut self, id: &str) -> Result<bool> {
        let Some(index) = self.document.projects.iter().position(|p| p.id == id) else {
            debug!(id, "remove ignored, no such project");
            return Ok(false);
        };
        self.document.projects.remove(index);
        debug!(id, "project removed");
        self.commit()?;
        Ok(true)
    }

    /// Append a new skill and return it with its assigned id.
    ///
    /// The level is clamped to `0..=100`.
    pub fn add_skill(&mut self, draft: SkillDraft) -> Result<Skill> {
        let id = self.fresh_id(|doc, id| doc.skills.iter().any(|s| s.id == id));
        let skill = Skill::from_draft(id, draft);
        self.document.skills.push(skill.clone());
        debug!(id = %skill.id, "skill added");
        self.commit()?;
        Ok(skill)
    }

    /// Merge `patch` onto the skill with `id`. `Ok(false)` if there is none.
    pub fn update_skill(&mut self, id: &str, patch: SkillPatch) -> Result<bool> {
        let Some(skill) = self.document.skills.iter_mut().find(|s| s.id == id) else {
            debug!(id, "update ignored, no such skill");
            return Ok(false);
        };
        skill.apply(patch);
        debug!(id, "skill updated");
        self.commit()?;
        Ok(true)
    }

    /// Remove the skill with `id`. `Ok(false)` if there is none.
    pub fn remove_skill(&mut self, id: &str) -> Result<bool> {
        let Some(index) = self.document.skills.iter().position(|s| s.id == id) else {
            debug!(id, "remove ignored, no such skill");
            return Ok(false);
        };
        self.document.skills.remove(index);
        debug!(id, "skill removed");
        self.commit()?;
        Ok(true)
    }

    /// Throw away every customization and go back to the default document.
    pub fn reset(&mut self) -> Result<()> {
        self.document = Portfolio::default();
        debug!("portfolio reset to defaults");
        self.commit()
    }

    fn fresh_id(&mut self, taken: impl Fn(&Portfolio, &str) -> bool) -> String {
        loop {
            let id = self.ids.next_id();
            if !taken(&self.document, &id) {
                return id;
            }
        }
    }

    /// Persist, then notify. Subscribers hear about the change even when the
    /// write failed.
    fn commit(&mut self) -> Result<()> {
        let persisted = self.persist();
        if let Err(e) = &persisted {
            error!(key = %self.key, "Failed to persist portfolio: {}", e);
        }
        Subscribers::notify(&self.subscribers, &self.document);
        persisted
    }

    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string(&self.document)?;
        self.storage.write(&self.key, &json)
    }
}

fn load_document<S: RecordStorage>(storage: &S, key: &str) -> Portfolio {
    match storage.read(key) {
        Ok(Some(raw)) => match serde_json::from_str::<Portfolio>(&raw) {
            Ok(document) => document.normalized(),
            Err(e) => {
                warn!(key, "Saved portfolio is malformed, using defaults: {}", e);
                Portfolio::default()
            }
        },
        Ok(None) => {
            debug!(key, "No saved portfolio, using defaults");
            Portfolio::default()
        }
        Err(e) => {
            warn!(key, "Could not read saved portfolio, using defaults: {}", e);
            Portfolio::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::HashSet;

    use serde_json::json;

    use super::*;
    use crate::error::StoreError;
    use crate::memory::MemoryStorage;

    fn project_draft(title: &str) -> ProjectDraft {
        ProjectDraft {
            title: title.to_string(),
            description: format!("{title} description"),
            tech: vec!["Rust".to_string(), "Dioxus".to_string()],
            link: "https://example.com".to_string(),
            github: "https://github.com/example".to_string(),
            image: String::new(),
        }
    }

    fn skill_draft(name: &str, level: u8) -> SkillDraft {
        SkillDraft {
            name: name.to_string(),
            level,
        }
    }

    #[test]
    fn test_open_without_record_uses_default() {
        let store = PortfolioStore::open(MemoryStorage::new());
        assert_eq!(store.document(), &Portfolio::default());
        assert_eq!(store.key(), "portfolio-data");
    }

    #[test]
    fn test_corrupt_record_falls_back_to_default() {
        let storage = MemoryStorage::new();
        storage.write(DEFAULT_STORAGE_KEY, "{not json").unwrap();
        let store = PortfolioStore::open(storage.clone());
        assert_eq!(store.document(), &Portfolio::default());

        // Valid JSON, wrong shape
        storage
            .write(DEFAULT_STORAGE_KEY, r#"{"hero": {"name": "only"}, "skills": 3}"#)
            .unwrap();
        let store = PortfolioStore::open(storage);
        assert_eq!(store.document(), &Portfolio::default());
    }

    #[test]
    fn test_roundtrip_across_reopen() {
        let storage = MemoryStorage::new();
        let mut store = PortfolioStore::open(storage.clone());

        store
            .set_hero(Hero {
                name: "Ada".to_string(),
                title: "Engineer".to_string(),
                tagline: "Analytical engines".to_string(),
            })
            .unwrap();
        store
            .set_about(About {
                bio: "Bio".to_string(),
                image: "https://example.com/me.png".to_string(),
            })
            .unwrap();
        store.add_project(project_draft("Engine")).unwrap();
        store.add_skill(skill_draft("Math", 99)).unwrap();
        store
            .set_contact(Contact {
                email: "ada@example.com".to_string(),
                twitter: "https://twitter.com/ada".to_string(),
                ..Default::default()
            })
            .unwrap();

        // Simulate a fresh start
        let reopened = PortfolioStore::open(storage);
        assert_eq!(reopened.document(), store.document());
    }

    #[test]
    fn test_custom_key() {
        let storage = MemoryStorage::new();
        let mut store = PortfolioStore::open_with_key(storage.clone(), "site-a");
        store.add_skill(skill_draft("Go", 70)).unwrap();

        assert!(storage.read(DEFAULT_STORAGE_KEY).unwrap().is_none());
        assert!(storage.read("site-a").unwrap().is_some());

        // Default key still sees the untouched default
        let other = PortfolioStore::open(storage);
        assert_eq!(other.document(), &Portfolio::default());
    }

    #[test]
    fn test_add_project_assigns_unique_ids() {
        let mut store = PortfolioStore::open(MemoryStorage::new());
        let mut ids = HashSet::new();

        for i in 0..25 {
            let draft = project_draft(&format!("Project {i}"));
            let project = store.add_project(draft.clone()).unwrap();
            assert_eq!(ProjectDraft::from(&project), draft);
            assert!(ids.insert(project.id.clone()));
        }

        // Default project + 25 added, in insertion order
        assert_eq!(store.document().projects.len(), 26);
        assert_eq!(store.document().projects[0].id, "1");
        assert_eq!(store.document().projects[25].title, "Project 24");
        assert!(!ids.contains("1"));
    }

    #[test]
    fn test_add_skill_assigns_unique_ids() {
        let mut store = PortfolioStore::open(MemoryStorage::new());
        let added: Vec<Skill> = (0..25)
            .map(|i| store.add_skill(skill_draft(&format!("S{i}"), i)).unwrap())
            .collect();

        let ids: HashSet<&str> = store.document().skills.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), 29);
        for (i, skill) in added.iter().enumerate() {
            assert_eq!(skill.name, format!("S{i}"));
            assert_eq!(usize::from(skill.level), i);
        }
    }

    #[test]
    fn test_update_project_targets_one_field() {
        let mut store = PortfolioStore::open(MemoryStorage::new());
        let a = store.add_project(project_draft("A")).unwrap();
        let b = store.add_project(project_draft("B")).unwrap();
        let before = store.document().clone();

        let changed = store
            .update_project(
                &a.id,
                ProjectPatch {
                    title: Some("X".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(changed);

        let updated = store.project(&a.id).unwrap();
        assert_eq!(updated.title, "X");
        assert_eq!(
            Project {
                title: a.title.clone(),
                ..updated.clone()
            },
            a
        );
        assert_eq!(store.project(&b.id), Some(&b));
        assert_eq!(store.document().projects[0], before.projects[0]);
        assert_eq!(store.document().skills, before.skills);
        assert_eq!(store.document().hero, before.hero);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let storage = MemoryStorage::new();
        let mut store = PortfolioStore::open(storage.clone());
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let _sub = store.subscribe(move |_| counter.set(counter.get() + 1));

        let patch = ProjectPatch {
            title: Some("X".to_string()),
            ..Default::default()
        };
        assert!(!store.update_project("nope", patch).unwrap());
        assert!(!store
            .update_skill(
                "nope",
                SkillPatch {
                    level: Some(1),
                    ..Default::default()
                }
            )
            .unwrap());

        assert_eq!(store.document(), &Portfolio::default());
        assert_eq!(calls.get(), 0);
        // Nothing was written either
        assert!(storage.read(DEFAULT_STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_remove_project() {
        let mut store = PortfolioStore::open(MemoryStorage::new());
        let a = store.add_project(project_draft("A")).unwrap();
        let b = store.add_project(project_draft("B")).unwrap();
        assert_eq!(store.document().projects.len(), 3);

        assert!(store.remove_project(&a.id).unwrap());
        assert_eq!(store.document().projects.len(), 2);
        assert!(store.project(&a.id).is_none());
        assert_eq!(store.project(&b.id), Some(&b));

        // Unknown id
        assert!(!store.remove_project(&a.id).unwrap());
        assert_eq!(store.document().projects.len(), 2);
    }

    #[test]
    fn test_remove_last_project_leaves_empty_sequence() {
        let storage = MemoryStorage::new();
        let mut store = PortfolioStore::open(storage.clone());
        assert!(store.remove_project("1").unwrap());
        assert!(store.document().projects.is_empty());

        // Empty sequence persists as such, not as the default
        let reopened = PortfolioStore::open(storage);
        assert!(reopened.document().projects.is_empty());
    }

    #[test]
    fn test_reset_restores_default() {
        let storage = MemoryStorage::new();
        let mut store = PortfolioStore::open(storage.clone());
        store.add_project(project_draft("A")).unwrap();
        store.remove_skill("1").unwrap();
        store
            .set_hero(Hero {
                name: "Someone".to_string(),
                ..Default::default()
            })
            .unwrap();
        assert_ne!(store.document(), &Portfolio::default());

        store.reset().unwrap();
        assert_eq!(store.document(), &Portfolio::default());
        assert_eq!(PortfolioStore::open(storage).document(), &Portfolio::default());
    }

    #[test]
    fn test_skill_scenario_add_update_remove() {
        let mut store = PortfolioStore::open(MemoryStorage::new());
        let original = store.document().skills.clone();

        let go = store.add_skill(skill_draft("Go", 70)).unwrap();
        assert_eq!(store.document().skills.len(), 5);
        assert_eq!(store.document().skills.last(), Some(&go));
        assert_eq!(go.name, "Go");
        assert_eq!(go.level, 70);

        store
            .update_skill(
                &go.id,
                SkillPatch {
                    level: Some(95),
                    ..Default::default()
                },
            )
            .unwrap();
        let updated = store.skill(&go.id).unwrap();
        assert_eq!(updated.level, 95);
        assert_eq!(updated.name, "Go");

        store.remove_skill(&go.id).unwrap();
        assert_eq!(store.document().skills, original);
    }

    // Levels are clamped by the store rather than trusted from the caller.
    #[test]
    fn test_skill_level_clamped_by_store() {
        let storage = MemoryStorage::new();
        let mut store = PortfolioStore::open(storage.clone());

        let skill = store.add_skill(skill_draft("Overconfident", 180)).unwrap();
        assert_eq!(skill.level, 100);

        store
            .update_skill(
                &skill.id,
                SkillPatch {
                    level: Some(255),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(store.skill(&skill.id).unwrap().level, 100);

        // Out-of-range levels in a saved record are clamped on load
        let mut raw: serde_json::Value =
            serde_json::from_str(&storage.read(DEFAULT_STORAGE_KEY).unwrap().unwrap()).unwrap();
        raw["skills"][0]["level"] = serde_json::json!(150);
        storage
            .write(DEFAULT_STORAGE_KEY, &raw.to_string())
            .unwrap();
        let reopened = PortfolioStore::open(storage);
        assert_eq!(reopened.document().skills[0].level, 100);
    }

    #[test]
    fn test_saved_level_outside_u8_keeps_rest_of_document() {
        for (saved, expected) in [(json!(256), 100), (json!(-5), 0), (json!(85.0), 85)] {
            let storage = MemoryStorage::new();
            let mut store = PortfolioStore::open(storage.clone());
            store
                .set_hero(Hero {
                    name: "Ada".to_string(),
                    ..Hero::default()
                })
                .unwrap();
            let project = store.add_project(project_draft("Engine")).unwrap();

            let mut raw: serde_json::Value =
                serde_json::from_str(&storage.read(DEFAULT_STORAGE_KEY).unwrap().unwrap()).unwrap();
            raw["skills"][0]["level"] = saved.clone();
            storage
                .write(DEFAULT_STORAGE_KEY, &raw.to_string())
                .unwrap();

            let reopened = PortfolioStore::open(storage);
            let doc = reopened.document();
            assert_eq!(doc.skills[0].level, expected, "saved level {saved}");
            assert_eq!(doc.hero.name, "Ada", "saved level {saved}");
            assert_eq!(reopened.project(&project.id), Some(&project));
            assert_eq!(doc.skills.len(), Portfolio::default().skills.len());
        }
    }

    #[test]
    fn test_each_mutation_notifies_each_subscriber_once() {
        let mut store = PortfolioStore::open(MemoryStorage::new());
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let (f, s) = (first.clone(), second.clone());
        let _a = store.subscribe(move |_| f.set(f.get() + 1));
        let _b = store.subscribe(move |_| s.set(s.get() + 1));

        store.set_hero(Hero::default()).unwrap();
        store.set_about(About::default()).unwrap();
        store.set_contact(Contact::default()).unwrap();
        let p = store.add_project(project_draft("A")).unwrap();
        store.update_project(&p.id, ProjectPatch::default()).unwrap();
        store.remove_project(&p.id).unwrap();
        let s = store.add_skill(skill_draft("B", 1)).unwrap();
        store.update_skill(&s.id, SkillPatch::default()).unwrap();
        store.remove_skill(&s.id).unwrap();
        store.reset().unwrap();

        assert_eq!(first.get(), 10);
        assert_eq!(second.get(), 10);
    }

    #[test]
    fn test_notification_follows_write_with_new_document() {
        let storage = MemoryStorage::new();
        let mut store = PortfolioStore::open(storage.clone());

        let seen = Rc::new(RefCell::new(Vec::<(Portfolio, Option<String>)>::new()));
        let sink = seen.clone();
        let reader = storage.clone();
        let _sub = store.subscribe(move |doc| {
            let persisted = reader.read(DEFAULT_STORAGE_KEY).unwrap();
            sink.borrow_mut().push((doc.clone(), persisted));
        });

        let skill = store.add_skill(skill_draft("Go", 70)).unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        let (doc, persisted) = &seen[0];
        assert_eq!(doc.skills.last(), Some(&skill));
        let persisted: Portfolio = serde_json::from_str(persisted.as_deref().unwrap()).unwrap();
        assert_eq!(&persisted, doc);
    }

    #[test]
    fn test_dropped_subscription_not_notified() {
        let mut store = PortfolioStore::open(MemoryStorage::new());
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let sub = store.subscribe(move |_| counter.set(counter.get() + 1));
        assert_eq!(store.subscriber_count(), 1);

        store.reset().unwrap();
        sub.unsubscribe();
        assert_eq!(store.subscriber_count(), 0);
        store.reset().unwrap();

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_unsubscribe_from_inside_handler() {
        let mut store = PortfolioStore::open(MemoryStorage::new());
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::default();
        let calls = Rc::new(Cell::new(0));

        let (inner_slot, counter) = (slot.clone(), calls.clone());
        let sub = store.subscribe(move |_| {
            counter.set(counter.get() + 1);
            // One-shot: drop our own guard
            drop(inner_slot.borrow_mut().take());
        });
        *slot.borrow_mut() = Some(sub);

        store.reset().unwrap();
        store.reset().unwrap();
        assert_eq!(calls.get(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_count_during_notification_includes_running_handlers() {
        let cell: Rc<RefCell<Subscribers>> = Rc::default();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let mut ids = Vec::new();
        for _ in 0..3 {
            let (weak, seen) = (Rc::downgrade(&cell), seen.clone());
            let id = cell.borrow_mut().add(Box::new(move |_| {
                if let Some(cell) = weak.upgrade() {
                    seen.borrow_mut().push(cell.borrow().len());
                }
            }));
            ids.push(id);
        }
        Subscribers::notify(&cell, &Portfolio::default());
        assert_eq!(*seen.borrow(), vec![3, 3, 3]);

        // A subscription dropped mid-notification stops counting right away
        let last = ids[2];
        let weak = Rc::downgrade(&cell);
        let counts = seen.clone();
        cell.borrow_mut().add(Box::new(move |_| {
            if let Some(cell) = weak.upgrade() {
                cell.borrow_mut().remove(last);
                counts.borrow_mut().push(cell.borrow().len());
            }
        }));
        seen.borrow_mut().clear();
        Subscribers::notify(&cell, &Portfolio::default());
        assert_eq!(*seen.borrow(), vec![4, 4, 4, 3]);
        assert_eq!(cell.borrow().len(), 3);
    }

    #[test]
    fn test_subscription_outlives_store() {
        let store = PortfolioStore::open(MemoryStorage::new());
        let sub = store.subscribe(|_| {});
        drop(store);
        drop(sub);
    }

    #[test]
    fn test_write_failure_is_reported_but_applied() {
        // Big enough for nothing but tiny records
        let storage = MemoryStorage::new().with_quota(16);
        let mut store = PortfolioStore::open(storage.clone());
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let _sub = store.subscribe(move |_| counter.set(counter.get() + 1));

        let err = store.add_skill(skill_draft("Go", 70)).unwrap_err();
        assert!(matches!(err, StoreError::Storage(_)));

        // Change is live in memory and subscribers heard about it
        assert_eq!(store.document().skills.len(), 5);
        assert_eq!(calls.get(), 1);

        // Nothing reached storage
        assert!(storage.read(DEFAULT_STORAGE_KEY).unwrap().is_none());
    }
}
