use dioxus::prelude::*;
use ui::icons::FaCode;
use ui::Icon;

use crate::Route;

/// Navbar over whichever page the router picked.
#[component]
pub fn Shell() -> Element {
    rsx! {
        ui::Navbar {
            brand: rsx! {
                Link {
                    class: "navbar-brand",
                    to: Route::Home {},
                    Icon { icon: FaCode, width: 20, height: 20 }
                    " portfolio"
                }
            },
            Link { to: Route::Home {}, active_class: "active", "Home" }
            Link { to: Route::Admin {}, active_class: "active", "Admin" }
        }
        Outlet::<Route> {}
    }
}
