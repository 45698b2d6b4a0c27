mod shell;
pub use shell::Shell;

pub use ui::views::AdminView as Admin;
pub use ui::views::PortfolioView as Home;
