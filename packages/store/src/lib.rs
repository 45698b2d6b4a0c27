pub mod config;
pub mod error;
pub mod ids;
pub mod models;
pub mod storage;
pub mod store;

mod memory;
pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use config::PortfolioConfig;
pub use error::{Result, StoreError};
pub use models::{
    About, Contact, Hero, Portfolio, Project, ProjectDraft, ProjectPatch, Skill, SkillDraft,
    SkillPatch, MAX_LEVEL,
};
pub use storage::RecordStorage;
pub use store::{PortfolioStore, Subscription, DEFAULT_STORAGE_KEY};
