use dioxus::prelude::*;

/// A full-screen overlay that centers a titled form card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                h3 { class: "modal-title", "{title}" }
                {children}
            }
        }
    }
}
