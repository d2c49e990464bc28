use dioxus::prelude::*;
use store::{Notice, NoticeLevel};

use crate::Icon;
use crate::icons::{FaCircleCheck, FaTriangleExclamation, FaXmark};

/// Dismissable message above a table.
#[component]
pub fn NoticeBanner(notice: Notice, on_dismiss: EventHandler<()>) -> Element {
    let class = match notice.level {
        NoticeLevel::Success => "notice notice--success",
        NoticeLevel::Error => "notice notice--error",
    };

    rsx! {
        div {
            class: "{class}",
            role: "alert",
            if notice.level == NoticeLevel::Success {
                Icon { icon: FaCircleCheck, width: 16, height: 16 }
            } else {
                Icon { icon: FaTriangleExclamation, width: 16, height: 16 }
            }
            div {
                class: "notice-body",
                strong { "{notice.title}" }
                p { "{notice.message}" }
            }
            button {
                class: "notice-dismiss",
                title: "Dismiss",
                onclick: move |_| on_dismiss.call(()),
                Icon { icon: FaXmark, width: 14, height: 14 }
            }
        }
    }
}
