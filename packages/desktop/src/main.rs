use dioxus::prelude::*;

use views::{Admin, Home, Shell};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/admin")]
        Admin {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("Starting portfolio (desktop)");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Read once from `<data_dir>/portfolio/portfolio.toml`, defaults when absent.
    let config: store::PortfolioConfig = use_hook(ui::load_config);
    tracing::debug!("Portfolio record key: {}", config.storage.key);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ui::ThemeProvider {
            theme_key: config.storage.theme_key.clone(),
            default_theme: config.theme.default.clone(),
            ui::ToastProvider {
                duration_ms: config.notifications.toast_duration_ms,
                ui::PortfolioProvider {
                    storage_key: config.storage.key.clone(),
                    Router::<Route> {}
                }
            }
        }
    }
}
