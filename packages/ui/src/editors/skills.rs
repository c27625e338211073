use dioxus::prelude::*;
use resume::section::SkillPatch;
use resume::{add_entry, remove_entry, update_entry, Skill, SkillLevel};

use crate::components::{Button, ButtonVariant, EmptyState, Input, Select};
use crate::icons::{FaCode, FaPlus, FaTrashCan};
use crate::Icon;

fn level_options() -> Vec<(String, String)> {
    SkillLevel::ALL
        .iter()
        .map(|level| (level.as_str().to_string(), level.label().to_string()))
        .collect()
}

#[component]
pub fn SkillsEditor(entries: Vec<Skill>, on_change: EventHandler<Vec<Skill>>) -> Element {
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
                    h2 { "Skills" }
                    p { "Highlight your key skills and expertise" }
                }
                Button {
                    onclick: add.clone(),
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    "Add Skill"
                }
            }

            if entries.is_empty() {
                EmptyState {
                    icon: rsx! { Icon { icon: FaCode, width: 40, height: 40 } },
                    message: "No skills added yet",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: add,
                        "Add Your First Skill"
                    }
                }
            } else {
                div {
                    class: "skill-rows",
                    for skill in entries.iter() {
                        SkillRow {
                            key: "{skill.id}",
                            entry: skill.clone(),
                            on_update: {
                                let entries = entries.clone();
                                let id = skill.id.clone();
                                move |patch: SkillPatch| on_change.call(update_entry(&entries, &id, patch))
                            },
                            on_remove: {
                                let entries = entries.clone();
                                let id = skill.id.clone();
                                move |_| on_change.call(remove_entry(&entries, &id))
                            },
                        }
                    }
                }
            }
        }
    }
}

/// Skills are short enough to edit inline: name, level, remove.
#[component]
fn SkillRow(entry: Skill, on_update: EventHandler<SkillPatch>, on_remove: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "skill-row",
            Input {
                class: "grow",
                value: entry.name.clone(),
                placeholder: "e.g., JavaScript, Leadership",
                oninput: move |v: String| on_update.call(SkillPatch {
                    name: Some(v),
                    ..Default::default()
                }),
            }
            Select {
                value: entry.level.as_str().to_string(),
                options: level_options(),
                onchange: move |v: String| on_update.call(SkillPatch {
                    level: Some(SkillLevel::from_label(&v)),
                    ..Default::default()
                }),
            }
            Button {
                variant: ButtonVariant::Destructive,
                title: "Remove skill",
                onclick: move |_| on_remove.call(()),
                Icon { icon: FaTrashCan, width: 14, height: 14 }
            }
        }
    }
}
