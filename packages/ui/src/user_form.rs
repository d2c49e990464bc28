use dioxus::prelude::*;
use store::{ModalKind, OpenModal, User};

use crate::form_field::{FormActions, TextField};

/// Account fields bound to the user working copy.
#[component]
pub fn UserForm(
    modal: OpenModal<User>,
    on_change: EventHandler<User>,
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let submit_label = match modal.kind {
        ModalKind::Draft => "Add User",
        ModalKind::Edit => "Save Changes",
    };
    let busy = modal.submitting;
    let working = modal.working.clone();

    // Handler writing one field of a copy of the working record.
    let edit = move |apply: fn(&mut User, String)| {
        let source = working.clone();
        move |value: String| {
            let mut next = source.clone();
            apply(&mut next, value);
            on_change.call(next);
        }
    };

    rsx! {
        div {
            class: "modal-form",
            if let Some(err) = &modal.error {
                p { class: "form-error", "{err}" }
            }
            div {
                class: "form-row",
                TextField {
                    id: "user-first-name",
                    label: "First name",
                    value: modal.working.first_name.clone(),
                    disabled: busy,
                    on_input: edit(|u, v| u.first_name = v),
                }
                TextField {
                    id: "user-last-name",
                    label: "Last name",
                    value: modal.working.last_name.clone(),
                    disabled: busy,
                    on_input: edit(|u, v| u.last_name = v),
                }
            }
            TextField {
                id: "user-email",
                label: "Email",
                kind: "email",
                value: modal.working.email.clone(),
                disabled: busy,
                on_input: edit(|u, v| u.email = v),
            }
            TextField {
                id: "user-username",
                label: "Username",
                value: modal.working.username.clone(),
                disabled: busy,
                on_input: edit(|u, v| u.username = v),
            }
            TextField {
                id: "user-password",
                label: "Password",
                kind: "password",
                value: modal.working.password.clone(),
                disabled: busy,
                on_input: edit(|u, v| u.password = v),
            }
            TextField {
                id: "user-phone",
                label: "Phone",
                kind: "tel",
                value: modal.working.phone.clone(),
                disabled: busy,
                on_input: edit(|u, v| u.phone = v),
            }
            FormActions {
                submit_label,
                busy,
                on_submit: move |_| on_submit.call(()),
                on_cancel: move |_| on_cancel.call(()),
            }
        }
    }
}
