use dioxus::prelude::*;
use store::Product;

use super::{modal_title, ModalOverlay};
use crate::icons::{FaPen, FaPlus, FaTrashCan};
use crate::page::use_collection_page;
use crate::{Icon, NoticeBanner, ProductForm};

/// Products table with search, add, edit and delete.
#[component]
pub fn ProductsView() -> Element {
    let page = use_collection_page::<Product>();
    let view = page.view;
    let filtered = use_memo(move || view.read().filtered());

    let state = view.read();
    let modal = state.modal.open().cloned();
    let notice = state.notice().cloned();
    let loading = state.is_loading() && !state.is_loaded();
    let query = state.query.clone();
    let total = state.snapshot().len();
    drop(state);

    rsx! {
        div {
            class: "collection-page",
            h2 { class: "collection-title", "Products" }

            if let Some(notice) = notice {
                NoticeBanner { notice, on_dismiss: move |_| page.dismiss_notice() }
            }

            div {
                class: "collection-toolbar",
                input {
                    class: "collection-search",
                    r#type: "text",
                    placeholder: "Search products...",
                    value: "{query}",
                    oninput: move |evt: FormEvent| page.set_query(evt.value()),
                }
                button {
                    class: "primary",
                    onclick: move |_| page.open_add(),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    " Add Product"
                }
            }

            table {
                class: "collection-table",
                thead {
                    tr {
                        th { "Title" }
                        th { "Price" }
                        th { "Actions" }
                    }
                }
                tbody {
                    if loading {
                        tr { td { colspan: "3", class: "collection-empty", "Loading..." } }
                    } else if filtered().is_empty() {
                        tr {
                            td {
                                colspan: "3",
                                class: "collection-empty",
                                if total == 0 { "No products yet." } else { "No products match \"{query}\"." }
                            }
                        }
                    }
                    for product in filtered() {
                        ProductRow {
                            key: "{product.id}",
                            product: product.clone(),
                            on_edit: move |p: Product| page.open_edit(p),
                            on_delete: move |id: String| page.delete(id),
                        }
                    }
                }
            }

            if let Some(open) = modal {
                ModalOverlay {
                    title: modal_title(open.kind, "Product"),
                    on_close: move |_| page.cancel(),
                    ProductForm {
                        modal: open,
                        on_change: move |p: Product| page.set_working(p),
                        on_submit: move |_| page.submit(),
                        on_cancel: move |_| page.cancel(),
                    }
                }
            }
        }
    }
}

#[component]
fn ProductRow(product: Product, on_edit: EventHandler<Product>, on_delete: EventHandler<String>) -> Element {
    let edit_target = product.clone();
    let delete_id = product.id.clone();

    rsx! {
        tr {
            td { "{product.title}" }
            td { class: "numeric", "{product.display_price()}" }
            td {
                class: "row-actions",
                button {
                    class: "edit",
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
