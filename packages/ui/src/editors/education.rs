use dioxus::prelude::*;
use resume::section::EducationPatch;
use resume::{add_entry, remove_entry, update_entry, Education};

use crate::components::{Button, ButtonVariant, EmptyState, Field, Input};
use crate::icons::{FaGraduationCap, FaPlus, FaTrashCan};
use crate::Icon;

#[component]
pub fn EducationEditor(entries: Vec<Education>, on_change: EventHandler<Vec<Education>>) -> Element {
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
                    h2 { "Education" }
                    p { "Add your educational background" }
                }
                Button {
                    onclick: add.clone(),
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    "Add Education"
                }
            }

            if entries.is_empty() {
                EmptyState {
                    icon: rsx! { Icon { icon: FaGraduationCap, width: 40, height: 40 } },
                    message: "No education added yet",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: add,
                        "Add Your Education"
                    }
                }
            } else {
                for (index, edu) in entries.iter().enumerate() {
                    EducationCard {
                        key: "{edu.id}",
                        number: index + 1,
                        entry: edu.clone(),
                        on_update: {
                            let entries = entries.clone();
                            let id = edu.id.clone();
                            move |patch: EducationPatch| on_change.call(update_entry(&entries, &id, patch))
                        },
                        on_remove: {
                            let entries = entries.clone();
                            let id = edu.id.clone();
                            move |_| on_change.call(remove_entry(&entries, &id))
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn EducationCard(
    number: usize,
    entry: Education,
    on_update: EventHandler<EducationPatch>,
    on_remove: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "editor-card",
            div {
                class: "editor-card-head",
                h3 { "Education #{number}" }
                Button {
                    variant: ButtonVariant::Destructive,
                    title: "Remove education",
                    onclick: move |_| on_remove.call(()),
                    Icon { icon: FaTrashCan, width: 14, height: 14 }
                }
            }

            div {
                class: "editor-grid",
                Field { label: "Institution", required: true,
                    Input {
                        value: entry.institution.clone(),
                        placeholder: "University Name",
                        oninput: move |v: String| on_update.call(EducationPatch {
                            institution: Some(v),
                            ..Default::default()
                        }),
                    }
                }
                Field { label: "Degree", required: true,
                    Input {
                        value: entry.degree.clone(),
                        placeholder: "Bachelor of Science",
                        oninput: move |v: String| on_update.call(EducationPatch {
                            degree: Some(v),
                            ..Default::default()
                        }),
                    }
                }
                Field { label: "Field of Study", required: true,
                    Input {
                        value: entry.field.clone(),
                        placeholder: "Computer Science",
                        oninput: move |v: String| on_update.call(EducationPatch {
                            field: Some(v),
                            ..Default::default()
                        }),
                    }
                }
                Field { label: "Location",
                    Input {
                        value: entry.location.clone(),
                        placeholder: "Boston, MA",
                        oninput: move |v: String| on_update.call(EducationPatch {
                            location: Some(v),
                            ..Default::default()
                        }),
                    }
                }
                Field { label: "Start Date", required: true,
                    Input {
                        kind: "month",
                        value: entry.start_date.clone(),
                        oninput: move |v: String| on_update.call(EducationPatch {
                            start_date: Some(v),
                            ..Default::default()
                        }),
                    }
                }
                Field { label: "End Date", required: true,
                    Input {
                        kind: "month",
                        value: entry.end_date.clone(),
                        oninput: move |v: String| on_update.call(EducationPatch {
                            end_date: Some(v),
                            ..Default::default()
                        }),
                    }
                }
                Field { label: "GPA (Optional)",
                    Input {
                        value: entry.gpa.clone().unwrap_or_default(),
                        placeholder: "3.8/4.0",
                        oninput: move |v: String| on_update.call(EducationPatch {
                            gpa: Some(v),
                            ..Default::default()
                        }),
                    }
                }
            }
        }
    }
}
