mod modal_overlay;
pub use modal_overlay::{ConfirmDialog, ModalOverlay};

mod empty_state;
pub use empty_state::EmptyState;

mod portfolio;
pub use portfolio::{contact_link, project_link, PortfolioView};

pub mod admin;
pub use admin::AdminView;
