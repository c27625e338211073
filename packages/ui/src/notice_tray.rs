use dioxus::prelude::*;

use crate::notices::{use_notices, NoticeLevel};

const NOTICES_CSS: Asset = asset!("/assets/styling/notices.css");

#[component]
pub fn NoticeTray() -> Element {
    let mut log = use_notices();
    let entries = log().entries.clone();

    rsx! {
        document::Stylesheet { href: NOTICES_CSS }

        if !entries.is_empty() {
            div {
                class: "notice-tray",
                for notice in entries.iter() {
                    div {
                        key: "{notice.id}",
                        class: match notice.level {
                            NoticeLevel::Error => "notice error",
                            NoticeLevel::Warning => "notice warning",
                            NoticeLevel::Success => "notice success",
                            NoticeLevel::Info => "notice info",
                        },
                        span { class: "notice-time", "{notice.timestamp}" }
                        span { class: "notice-message", "{notice.message}" }
                        button {
                            class: "notice-dismiss",
                            title: "Dismiss",
                            onclick: {
                                let id = notice.id;
                                move |_| log.write().dismiss(id)
                            },
                            "×"
                        }
                    }
                }
            }
        }
    }
}
