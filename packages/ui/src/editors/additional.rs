use dioxus::prelude::*;
use resume::section::{CertificationPatch, LanguagePatch, ProjectPatch};
use resume::{
    add_entry, remove_entry, update_entry, Certification, Language, Proficiency, Project,
};

use crate::components::{Button, ButtonVariant, EmptyState, Input, Select, Textarea};
use crate::icons::{FaAward, FaFolderOpen, FaLanguage, FaPlus, FaTrashCan};
use crate::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Certifications,
    Projects,
    Languages,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Certifications, Tab::Projects, Tab::Languages];

    fn label(&self) -> &'static str {
        match self {
            Tab::Certifications => "Certifications",
            Tab::Projects => "Projects",
            Tab::Languages => "Languages",
        }
    }
}

/// Last wizard step: three independent lists behind tabs.
///
/// The active tab is local UI state and resets to Certifications whenever
/// the step is re-entered.
#[component]
pub fn AdditionalSections(
    certifications: Vec<Certification>,
    projects: Vec<Project>,
    languages: Vec<Language>,
    on_certifications_change: EventHandler<Vec<Certification>>,
    on_projects_change: EventHandler<Vec<Project>>,
    on_languages_change: EventHandler<Vec<Language>>,
) -> Element {
    let mut active = use_signal(|| Tab::Certifications);

    rsx! {
        div {
            class: "editor",
            div {
                class: "editor-heading",
                h2 { "Additional Sections" }
                p { "Enhance your resume with certifications, projects, and languages" }
            }

            div {
                class: "tabs",
                role: "tablist",
                for tab in Tab::ALL {
                    button {
                        key: "{tab.label()}",
                        class: if active() == tab { "tab active" } else { "tab" },
                        role: "tab",
                        onclick: move |_| active.set(tab),
                        "{tab.label()}"
                    }
                }
            }

            {match active() {
                Tab::Certifications => rsx! {
                    CertificationsPanel { entries: certifications, on_change: on_certifications_change }
                },
                Tab::Projects => rsx! {
                    ProjectsPanel { entries: projects, on_change: on_projects_change }
                },
                Tab::Languages => rsx! {
                    LanguagesPanel { entries: languages, on_change: on_languages_change }
                },
            }}
        }
    }
}

#[component]
fn PanelHead(hint: String, onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div {
            class: "panel-head",
            p { class: "editor-hint", "{hint}" }
            Button {
                variant: ButtonVariant::Outline,
                onclick: move |evt| onclick.call(evt),
                Icon { icon: FaPlus, width: 14, height: 14 }
                "Add"
            }
        }
    }
}

#[component]
fn CertificationsPanel(
    entries: Vec<Certification>,
    on_change: EventHandler<Vec<Certification>>,
) -> Element {
    let add = {
        let entries = entries.clone();
        move |_: MouseEvent| on_change.call(add_entry(&entries))
    };

    rsx! {
        div {
            class: "tab-panel",
            PanelHead { hint: "Add professional certifications", onclick: add }

            if entries.is_empty() {
                EmptyState {
                    icon: rsx! { Icon { icon: FaAward, width: 32, height: 32 } },
                    message: "No certifications added",
                }
            } else {
                for cert in entries.iter() {
                    CertificationCard {
                        key: "{cert.id}",
                        entry: cert.clone(),
                        on_update: {
                            let entries = entries.clone();
                            let id = cert.id.clone();
                            move |patch: CertificationPatch| on_change.call(update_entry(&entries, &id, patch))
                        },
                        on_remove: {
                            let entries = entries.clone();
                            let id = cert.id.clone();
                            move |_| on_change.call(remove_entry(&entries, &id))
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn CertificationCard(
    entry: Certification,
    on_update: EventHandler<CertificationPatch>,
    on_remove: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "editor-card compact",
            div {
                class: "editor-card-row",
                div {
                    class: "editor-grid grow",
                    Input {
                        value: entry.name.clone(),
                        placeholder: "Certification Name",
                        oninput: move |v: String| on_update.call(CertificationPatch {
                            name: Some(v),
                            ..Default::default()
                        }),
                    }
                    Input {
                        value: entry.issuer.clone(),
                        placeholder: "Issuing Organization",
                        oninput: move |v: String| on_update.call(CertificationPatch {
                            issuer: Some(v),
                            ..Default::default()
                        }),
                    }
                    Input {
                        kind: "month",
                        value: entry.date.clone(),
                        oninput: move |v: String| on_update.call(CertificationPatch {
                            date: Some(v),
                            ..Default::default()
                        }),
                    }
                    Input {
                        value: entry.credential_id.clone().unwrap_or_default(),
                        placeholder: "Credential ID (Optional)",
                        oninput: move |v: String| on_update.call(CertificationPatch {
                            credential_id: Some(v),
                            ..Default::default()
                        }),
                    }
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    title: "Remove certification",
                    onclick: move |_| on_remove.call(()),
                    Icon { icon: FaTrashCan, width: 14, height: 14 }
                }
            }
        }
    }
}

#[component]
fn ProjectsPanel(entries: Vec<Project>, on_change: EventHandler<Vec<Project>>) -> Element {
    let add = {
        let entries = entries.clone();
        move |_: MouseEvent| on_change.call(add_entry(&entries))
    };

    rsx! {
        div {
            class: "tab-panel",
            PanelHead { hint: "Showcase your projects", onclick: add }

            if entries.is_empty() {
                EmptyState {
                    icon: rsx! { Icon { icon: FaFolderOpen, width: 32, height: 32 } },
                    message: "No projects added",
                }
            } else {
                for project in entries.iter() {
                    ProjectCard {
                        key: "{project.id}",
                        entry: project.clone(),
                        on_update: {
                            let entries = entries.clone();
                            let id = project.id.clone();
                            move |patch: ProjectPatch| on_change.call(update_entry(&entries, &id, patch))
                        },
                        on_remove: {
                            let entries = entries.clone();
                            let id = project.id.clone();
                            move |_| on_change.call(remove_entry(&entries, &id))
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(entry: Project, on_update: EventHandler<ProjectPatch>, on_remove: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "editor-card compact",
            div {
                class: "editor-card-row",
                div {
                    class: "stack grow",
                    div {
                        class: "editor-grid",
                        Input {
                            value: entry.name.clone(),
                            placeholder: "Project Name",
                            oninput: move |v: String| on_update.call(ProjectPatch {
                                name: Some(v),
                                ..Default::default()
                            }),
                        }
                        Input {
                            kind: "month",
                            value: entry.date.clone(),
                            oninput: move |v: String| on_update.call(ProjectPatch {
                                date: Some(v),
                                ..Default::default()
                            }),
                        }
                    }
                    Textarea {
                        value: entry.description.clone(),
                        placeholder: "Brief description of the project",
                        rows: 3,
                        oninput: move |v: String| on_update.call(ProjectPatch {
                            description: Some(v),
                            ..Default::default()
                        }),
                    }
                    Input {
                        value: entry.technologies.clone(),
                        placeholder: "Technologies used (e.g., React, Node.js, MongoDB)",
                        oninput: move |v: String| on_update.call(ProjectPatch {
                            technologies: Some(v),
                            ..Default::default()
                        }),
                    }
                    Input {
                        value: entry.link.clone().unwrap_or_default(),
                        placeholder: "Project Link (Optional)",
                        oninput: move |v: String| on_update.call(ProjectPatch {
                            link: Some(v),
                            ..Default::default()
                        }),
                    }
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    title: "Remove project",
                    onclick: move |_| on_remove.call(()),
                    Icon { icon: FaTrashCan, width: 14, height: 14 }
                }
            }
        }
    }
}

fn proficiency_options() -> Vec<(String, String)> {
    Proficiency::ALL
        .iter()
        .map(|p| (p.as_str().to_string(), p.label().to_string()))
        .collect()
}

#[component]
fn LanguagesPanel(entries: Vec<Language>, on_change: EventHandler<Vec<Language>>) -> Element {
    let add = {
        let entries = entries.clone();
        move |_: MouseEvent| on_change.call(add_entry(&entries))
    };

    rsx! {
        div {
            class: "tab-panel",
            PanelHead { hint: "Languages you speak", onclick: add }

            if entries.is_empty() {
                EmptyState {
                    icon: rsx! { Icon { icon: FaLanguage, width: 32, height: 32 } },
                    message: "No languages added",
                }
            } else {
                for lang in entries.iter() {
                    div {
                        key: "{lang.id}",
                        class: "skill-row",
                        Input {
                            class: "grow",
                            value: lang.name.clone(),
                            placeholder: "Language",
                            oninput: {
                                let entries = entries.clone();
                                let id = lang.id.clone();
                                move |v: String| on_change.call(update_entry(&entries, &id, LanguagePatch {
                                    name: Some(v),
                                    ..Default::default()
                                }))
                            },
                        }
                        Select {
                            value: lang.proficiency.as_str().to_string(),
                            options: proficiency_options(),
                            onchange: {
                                let entries = entries.clone();
                                let id = lang.id.clone();
                                move |v: String| on_change.call(update_entry(&entries, &id, LanguagePatch {
                                    proficiency: Some(Proficiency::from_label(&v)),
                                    ..Default::default()
                                }))
                            },
                        }
                        Button {
                            variant: ButtonVariant::Destructive,
                            title: "Remove language",
                            onclick: {
                                let entries = entries.clone();
                                let id = lang.id.clone();
                                move |_| on_change.call(remove_entry(&entries, &id))
                            },
                            Icon { icon: FaTrashCan, width: 14, height: 14 }
                        }
                    }
                }
            }
        }
    }
}
