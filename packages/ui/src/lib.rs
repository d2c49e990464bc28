//! This crate contains all shared UI for the dashboard.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

mod page;
pub use page::{use_backend, use_collection_page, BackendProvider, CollectionPage};

mod confirm;
pub use confirm::confirm;

mod navbar;
pub use navbar::Navbar;

mod notice_banner;
pub use notice_banner::NoticeBanner;

mod form_field;
pub use form_field::{FormActions, TextField};

mod product_form;
pub use product_form::ProductForm;

mod user_form;
pub use user_form::UserForm;

pub mod activity_log;
pub use activity_log::{ActivityLog, LogLevel, log_activity, use_activity_log};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};
