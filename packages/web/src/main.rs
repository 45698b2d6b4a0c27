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

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("Starting portfolio (web)");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Browsers have no config file; this is always the defaults.
    let config: store::PortfolioConfig = use_hook(ui::load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
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
