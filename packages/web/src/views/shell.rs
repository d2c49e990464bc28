use dioxus::prelude::*;
use ui::{ActivityLogPanel, ActivityLogToggle, Navbar};

use crate::Route;

/// Navbar above every page, activity panel floating over it.
#[component]
pub fn Shell() -> Element {
    rsx! {
        Navbar {
            Link { to: Route::Products {}, active_class: "active", "Products" }
            Link { to: Route::Users {}, active_class: "active", "Users" }
            ActivityLogToggle {}
        }
        main {
            Outlet::<Route> {}
        }
        ActivityLogPanel {}
    }
}
