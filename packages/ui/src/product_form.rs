use dioxus::prelude::*;
use store::{ModalKind, OpenModal, Product};

use crate::form_field::{FormActions, TextField};

/// Title and price fields bound to the product working copy.
///
/// The price input keeps the raw text so a half-typed number is not
/// clobbered; the working copy only changes when the text parses.
#[component]
pub fn ProductForm(
    modal: OpenModal<Product>,
    on_change: EventHandler<Product>,
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let initial_price = modal.working.price.to_string();
    let mut price_text = use_signal(move || initial_price);
    let mut price_error = use_signal(|| Option::<String>::None);

    let submit_label = match modal.kind {
        ModalKind::Draft => "Add Product",
        ModalKind::Edit => "Save Changes",
    };
    let busy = modal.submitting;
    let title_source = modal.working.clone();
    let price_source = modal.working.clone();

    rsx! {
        div {
            class: "modal-form",
            if let Some(err) = &modal.error {
                p { class: "form-error", "{err}" }
            }
            TextField {
                id: "product-title",
                label: "Title",
                value: modal.working.title.clone(),
                disabled: busy,
                on_input: move |value: String| {
                    let mut next = title_source.clone();
                    next.title = value;
                    on_change.call(next);
                },
            }
            TextField {
                id: "product-price",
                label: "Price",
                kind: "number",
                value: price_text(),
                disabled: busy,
                error: price_error(),
                on_input: move |value: String| {
                    let mut next = price_source.clone();
                    match next.set_price_input(&value) {
                        Ok(()) => {
                            price_error.set(None);
                            on_change.call(next);
                        }
                        Err(e) => price_error.set(Some(e)),
                    }
                    price_text.set(value);
                },
            }
            FormActions {
                submit_label,
                busy,
                blocked: price_error().is_some(),
                on_submit: move |_| on_submit.call(()),
                on_cancel: move |_| on_cancel.call(()),
            }
        }
    }
}
