use dioxus::prelude::*;

use crate::activity_log::{LogLevel, use_activity_log};

const ACTIVITY_LOG_CSS: Asset = asset!("/assets/styling/activity_log.css");

/// Floating panel listing backend activity, newest first.
#[component]
pub fn ActivityLogPanel() -> Element {
    let mut log = use_activity_log();

    if !log().visible {
        return rsx! {};
    }

    let entries = log().entries.clone();

    rsx! {
        document::Stylesheet { href: ACTIVITY_LOG_CSS }

        div {
            class: "activity-log-panel",
            div {
                class: "activity-log-header",
                span { "Backend activity" }
                div {
                    class: "activity-log-header-actions",
                    button {
                        onclick: move |_| log.write().entries.clear(),
                        "Clear"
                    }
                    button {
                        onclick: move |_| log.write().visible = false,
                        "Close"
                    }
                }
            }
            div {
                class: "activity-log-entries",
                if entries.is_empty() {
                    div { class: "activity-log-empty", "No requests yet." }
                }
                for entry in entries.iter().rev() {
                    div {
                        class: match entry.level {
                            LogLevel::Error => "activity-log-entry error",
                            LogLevel::Warning => "activity-log-entry warning",
                            LogLevel::Success => "activity-log-entry success",
                        },
                        span { class: "activity-log-time", "{entry.timestamp}" }
                        span { " {entry.message}" }
                    }
                }
            }
        }
    }
}

/// Navbar button opening the panel; turns red once an error is logged.
#[component]
pub fn ActivityLogToggle() -> Element {
    let mut log = use_activity_log();
    let errors = log().error_count();

    rsx! {
        button {
            class: if errors > 0 { "activity-log-toggle has-errors" } else { "activity-log-toggle" },
            onclick: move |_| {
                let visible = log().visible;
                log.write().visible = !visible;
            },
            title: "Backend activity",
            if errors > 0 {
                "{errors} failed"
            } else {
                "Activity"
            }
        }
    }
}
