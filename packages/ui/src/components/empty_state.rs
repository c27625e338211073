use dioxus::prelude::*;

/// Dashed placeholder shown by an editor whose list is empty.
#[component]
pub fn EmptyState(
    icon: Element,
    message: String,
    #[props(default = VNode::empty())] children: Element,
) -> Element {
    rsx! {
        div {
            class: "empty-state",
            div { class: "empty-state-icon", {icon} }
            p { "{message}" }
            {children}
        }
    }
}
