use store::ModalKind;

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod products;
pub use products::ProductsView;

mod users;
pub use users::UsersView;

/// "Add Product" or "Edit Product".
fn modal_title(kind: ModalKind, noun: &str) -> String {
    match kind {
        ModalKind::Draft => format!("Add {noun}"),
        ModalKind::Edit => format!("Edit {noun}"),
    }
}
