use dioxus::prelude::*;
use ui::BuilderView;

#[component]
pub fn Builder() -> Element {
    rsx! {
        BuilderView {}
    }
}
