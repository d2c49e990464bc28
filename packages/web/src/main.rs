use dioxus::prelude::*;

use ui::BackendProvider;
use views::{Products, Shell, Users};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[layout(Shell)]
        #[route("/products")]
        Products {},
        #[route("/users")]
        Users {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("starting admin dashboard");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(ui::ActivityLog::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        BackendProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/products`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Products {});
    rsx! {}
}
