//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}
pub mod brand_icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::*;
}

mod storage;
pub use storage::{load_config, make_storage, PlatformStorage};

pub mod views;

pub const THEME_CSS: Asset = asset!("/assets/styling/theme.css");

mod navbar;
pub use navbar::Navbar;

mod theme;
pub use theme::{
    apply_theme, load_theme_from_storage, use_theme, Theme, ThemeHandle, ThemeProvider,
    ThemeToggle,
};

pub mod toast;
pub use toast::{use_toast, ToastProvider, Toaster};

mod context;
pub use context::{use_portfolio, PortfolioHandle, PortfolioProvider};

pub mod forms;
