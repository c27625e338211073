use dioxus::prelude::*;
use resume::{Wizard, WizardStep};

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaChevronLeft, FaChevronRight};
use crate::Icon;

/// Numbered progress bar across the top of the form.
#[component]
pub fn StepIndicator(wizard: Wizard) -> Element {
    rsx! {
        nav {
            class: "step-indicator",
            for step in WizardStep::ALL {
                div {
                    key: "{step.index()}",
                    class: wizard.status_of(step).css_class(),
                    span { class: "step-number", "{step.index() + 1}" }
                    span { class: "step-title", "{step.title()}" }
                    if step.index() < Wizard::LAST {
                        span {
                            class: "step-separator",
                            Icon { icon: FaChevronRight, width: 12, height: 12 }
                        }
                    }
                }
            }
        }
    }
}

/// Previous / Next buttons. Disabled at either end rather than erroring.
#[component]
pub fn WizardNav(wizard: Wizard, on_previous: EventHandler<()>, on_next: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "wizard-nav",
            Button {
                variant: ButtonVariant::Outline,
                disabled: !wizard.can_go_previous(),
                onclick: move |_| on_previous.call(()),
                Icon { icon: FaChevronLeft, width: 14, height: 14 }
                "Previous"
            }
            Button {
                disabled: !wizard.can_go_next(),
                onclick: move |_| on_next.call(()),
                "Next"
                Icon { icon: FaChevronRight, width: 14, height: 14 }
            }
        }
    }
}
