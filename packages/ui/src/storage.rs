//! Shared storage and config constructors for all platforms.
//!
//! Returns the [`store::RecordStorage`] backend for the current target:
//! - **Web** (WASM + `web` feature): browser local storage via [`store::LocalStorage`]
//! - **Desktop** (native): files under `<data_dir>/portfolio/` via [`store::FileStorage`]
//! - **WASM without `web`**: [`store::MemoryStorage`], nothing survives a reload

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStorage = store::LocalStorage;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStorage = store::MemoryStorage;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStorage = store::FileStorage;

/// Create the platform-appropriate record storage.
pub fn make_storage() -> PlatformStorage {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorage::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStorage::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        store::FileStorage::new(data_dir())
    }
}

/// Load the site configuration for this platform.
///
/// Native builds read `portfolio.toml` next to the stored records; the web has
/// no config file and always uses the defaults.
pub fn load_config() -> store::PortfolioConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        store::PortfolioConfig::load_or_default(&data_dir())
    }
    #[cfg(target_arch = "wasm32")]
    {
        store::PortfolioConfig::default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn data_dir() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("portfolio")
}
