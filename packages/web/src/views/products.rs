use dioxus::prelude::*;
use ui::views::ProductsView;

#[component]
pub fn Products() -> Element {
    rsx! {
        ProductsView {}
    }
}
