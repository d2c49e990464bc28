use dioxus::prelude::*;

/// Labelled single-line input.
#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "text")] kind: &'static str,
    #[props(default)] disabled: bool,
    #[props(default)] error: Option<String>,
) -> Element {
    rsx! {
        div {
            class: "form-field",
            label { r#for: id, "{label}" }
            input {
                id: id,
                r#type: kind,
                value: "{value}",
                disabled: disabled,
                oninput: move |evt: FormEvent| on_input.call(evt.value()),
            }
            if let Some(message) = error {
                p { class: "field-error", "{message}" }
            }
        }
    }
}

/// Cancel / submit row at the bottom of a modal form.
#[component]
pub fn FormActions(
    submit_label: &'static str,
    busy: bool,
    #[props(default)] blocked: bool,
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "form-actions",
            button {
                class: "secondary",
                disabled: busy,
                onclick: move |_| on_cancel.call(()),
                "Cancel"
            }
            button {
                class: "primary",
                disabled: busy || blocked,
                onclick: move |_| on_submit.call(()),
                if busy { "Saving..." } else { "{submit_label}" }
            }
        }
    }
}
