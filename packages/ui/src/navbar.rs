use dioxus::prelude::*;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Top bar; the web crate fills it with its route links.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        nav {
            class: "navbar",
            span { class: "navbar-brand", "Admin Dashboard" }
            {children}
        }
    }
}
