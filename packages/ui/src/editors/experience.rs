use dioxus::prelude::*;
use resume::section::ExperiencePatch;
use resume::{add_entry, remove_entry, update_entry, Experience};

use crate::components::{Button, ButtonVariant, Checkbox, EmptyState, Field, Input, Textarea};
use crate::icons::{FaBriefcase, FaPlus, FaTrashCan};
use crate::Icon;

#[component]
pub fn ExperienceEditor(entries: Vec<Experience>, on_change: EventHandler<Vec<Experience>>) -> Element {
    let add = {
        let entries = entries.clone();
        move |_: MouseEvent| on_change.call(add_entry(&entries))
    };

    rsx! {
        div {
            class: "editor",
            div {
                class: "editor-heading with-action",
                div {
                    h2 { "Work Experience" }
                    p { "Add your professional experience" }
                }
                Button {
                    onclick: add.clone(),
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    "Add Experience"
                }
            }

            if entries.is_empty() {
                EmptyState {
                    icon: rsx! { Icon { icon: FaBriefcase, width: 40, height: 40 } },
                    message: "No experience added yet",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: add,
                        "Add Your First Experience"
                    }
                }
            } else {
                for (index, exp) in entries.iter().enumerate() {
                    ExperienceCard {
                        key: "{exp.id}",
                        number: index + 1,
                        entry: exp.clone(),
                        on_update: {
                            let entries = entries.clone();
                            let id = exp.id.clone();
                            move |patch: ExperiencePatch| on_change.call(update_entry(&entries, &id, patch))
                        },
                        on_remove: {
                            let entries = entries.clone();
                            let id = exp.id.clone();
                            move |_| on_change.call(remove_entry(&entries, &id))
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn ExperienceCard(
    number: usize,
    entry: Experience,
    on_update: EventHandler<ExperiencePatch>,
    on_remove: EventHandler<()>,
) -> Element {
    let id = entry.id.clone();

    rsx! {
        div {
            class: "editor-card",
            div {
                class: "editor-card-head",
                h3 { "Experience #{number}" }
                Button {
                    variant: ButtonVariant::Destructive,
                    title: "Remove experience",
                    onclick: move |_| on_remove.call(()),
                    Icon { icon: FaTrashCan, width: 14, height: 14 }
                }
            }

            div {
                class: "editor-grid",
                Field { label: "Company", required: true,
                    Input {
                        value: entry.company.clone(),
                        placeholder: "Tech Corp",
                        oninput: move |v: String| on_update.call(ExperiencePatch {
                            company: Some(v),
                            ..Default::default()
                        }),
                    }
                }
                Field { label: "Position", required: true,
                    Input {
                        value: entry.position.clone(),
                        placeholder: "Software Engineer",
                        oninput: move |v: String| on_update.call(ExperiencePatch {
                            position: Some(v),
                            ..Default::default()
                        }),
                    }
                }
                Field { label: "Location",
                    Input {
                        value: entry.location.clone(),
                        placeholder: "San Francisco, CA",
                        oninput: move |v: String| on_update.call(ExperiencePatch {
                            location: Some(v),
                            ..Default::default()
                        }),
                    }
                }
                Field { label: "Start Date", required: true,
                    Input {
                        kind: "month",
                        value: entry.start_date.clone(),
                        oninput: move |v: String| on_update.call(ExperiencePatch {
                            start_date: Some(v),
                            ..Default::default()
                        }),
                    }
                }
                Field { label: "End Date",
                    Input {
                        kind: "month",
                        value: entry.end_date.clone(),
                        disabled: entry.current,
                        oninput: move |v: String| on_update.call(ExperiencePatch {
                            end_date: Some(v),
                            ..Default::default()
                        }),
                    }
                }
                Checkbox {
                    id: "current-{id}",
                    checked: entry.current,
                    label: "Currently working here",
                    onchange: move |checked: bool| on_update.call(ExperiencePatch {
                        current: Some(checked),
                        ..Default::default()
                    }),
                }
            }

            Field { label: "Description", required: true,
                Textarea {
                    value: entry.description.clone(),
                    placeholder: "• Led development of key features\n• Collaborated with cross-functional teams\n• Improved system performance by 40%",
                    oninput: move |v: String| on_update.call(ExperiencePatch {
                        description: Some(v),
                        ..Default::default()
                    }),
                }
            }
        }
    }
}
