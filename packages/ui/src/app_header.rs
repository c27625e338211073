use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaDownload, FaFileLines, FaPrint};
use crate::Icon;

const BUILDER_CSS: Asset = asset!("/assets/styling/builder.css");

#[component]
pub fn AppHeader(on_print: EventHandler<()>, on_download: EventHandler<()>) -> Element {
    rsx! {
        document::Stylesheet { href: BUILDER_CSS }
        header {
            class: "app-header",
            div {
                class: "app-header-brand",
                div {
                    class: "app-header-logo",
                    Icon { icon: FaFileLines, width: 22, height: 22 }
                }
                div {
                    h1 { "OptiHire Resume Builder" }
                    p { "Create ATS-friendly professional resumes" }
                }
            }
            div {
                class: "app-header-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_print.call(()),
                    Icon { icon: FaPrint, width: 14, height: 14 }
                    "Print"
                }
                Button {
                    onclick: move |_| on_download.call(()),
                    Icon { icon: FaDownload, width: 14, height: 14 }
                    "Download PDF"
                }
            }
        }
    }
}
