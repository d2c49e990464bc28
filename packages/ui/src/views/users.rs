use dioxus::prelude::*;
use store::User;

use super::{modal_title, ModalOverlay};
use crate::icons::{FaPen, FaPlus, FaTrashCan};
use crate::page::use_collection_page;
use crate::{Icon, NoticeBanner, UserForm};

/// Users table with add, edit and delete. Passwords are never listed.
#[component]
pub fn UsersView() -> Element {
    let page = use_collection_page::<User>();
    let state = page.view.read();
    let users = state.snapshot().to_vec();
    let modal = state.modal.open().cloned();
    let notice = state.notice().cloned();
    let loading = state.is_loading() && !state.is_loaded();
    drop(state);

    rsx! {
        div {
            class: "collection-page",
            h2 { class: "collection-title", "Users" }

            if let Some(notice) = notice {
                NoticeBanner { notice, on_dismiss: move |_| page.dismiss_notice() }
            }

            div {
                class: "collection-toolbar",
                button {
                    class: "primary",
                    onclick: move |_| page.open_add(),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    " Add User"
                }
            }

            table {
                class: "collection-table",
                thead {
                    tr {
                        th { "First name" }
                        th { "Last name" }
                        th { "Email" }
                        th { "Username" }
                        th { "Phone" }
                        th { "Actions" }
                    }
                }
                tbody {
                    if loading {
                        tr { td { colspan: "6", class: "collection-empty", "Loading..." } }
                    } else if users.is_empty() {
                        tr { td { colspan: "6", class: "collection-empty", "No users yet." } }
                    }
                    for user in users {
                        UserRow {
                            key: "{user.id}",
                            user: user.clone(),
                            on_edit: move |u: User| page.open_edit(u),
                            on_delete: move |id: String| page.delete(id),
                        }
                    }
                }
            }

            if let Some(open) = modal {
                ModalOverlay {
                    title: modal_title(open.kind, "User"),
                    on_close: move |_| page.cancel(),
                    UserForm {
                        modal: open,
                        on_change: move |u: User| page.set_working(u),
                        on_submit: move |_| page.submit(),
                        on_cancel: move |_| page.cancel(),
                    }
                }
            }
        }
    }
}

#[component]
fn UserRow(user: User, on_edit: EventHandler<User>, on_delete: EventHandler<String>) -> Element {
    let edit_target = user.clone();
    let delete_id = user.id.clone();

    rsx! {
        tr {
            td { "{user.first_name}" }
            td { "{user.last_name}" }
            td { "{user.email}" }
            td { "{user.username}" }
            td { "{user.phone}" }
            td {
                class: "row-actions",
                button {
                    class: "edit",
                    title: "Edit {user.display_name()}",
                    onclick: move |_| on_edit.call(edit_target.clone()),
                    Icon { icon: FaPen, width: 12, height: 12 }
                    " Edit"
                }
                button {
                    class: "danger",
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    Icon { icon: FaTrashCan, width: 12, height: 12 }
                    " Delete"
                }
            }
        }
    }
}
