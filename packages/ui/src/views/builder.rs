use dioxus::prelude::*;
use resume::{read_photo, PhotoSource, SectionSlice, Wizard, WizardStep};

use crate::editors::{
    AdditionalSections, EducationEditor, ExperienceEditor, PersonalInfoEditor, SkillsEditor,
};
use crate::export::{download_pdf, print_resume, scroll_to_top};
use crate::notices::{push_notice, use_notices, NoticeLevel};
use crate::photo::SelectedPhoto;
use crate::state::{replace_slice, use_builder_config, use_resume};
use crate::{AppHeader, NoticeTray, ResumePreview, StepIndicator, WizardNav};

/// The whole builder: header, step form on the left, live preview on the right.
///
/// Owns the wizard position. Every editor callback lands here and is turned
/// into a slice replacement on the shared store.
#[component]
pub fn BuilderView() -> Element {
    let mut store = use_resume();
    let mut wizard = use_signal(Wizard::new);
    let mut notices = use_notices();
    let config = use_builder_config();

    let data = store.read().get().clone();
    let page_width = config.preview.page_width.clone();
    let photo_config = config.photo.clone();

    let on_photo_selected = move |photo: SelectedPhoto| {
        let photo_config = photo_config.clone();
        spawn(async move {
            match read_photo(&photo, &photo_config).await {
                Ok(uri) => {
                    tracing::info!(file = photo.name(), bytes = uri.len(), "photo loaded");
                    store.write().set_photo(Some(uri));
                }
                Err(e) => {
                    tracing::warn!("photo rejected: {e}");
                    push_notice(&mut notices, NoticeLevel::Warning, &e.to_string());
                }
            }
        });
    };

    let form = match wizard().step() {
        WizardStep::PersonalInfo => rsx! {
            PersonalInfoEditor {
                info: data.personal_info.clone(),
                on_change: move |info| replace_slice(&mut store, SectionSlice::PersonalInfo(info)),
                on_photo_selected: on_photo_selected,
            }
        },
        WizardStep::Experience => rsx! {
            ExperienceEditor {
                entries: data.experience.clone(),
                on_change: move |v| replace_slice(&mut store, SectionSlice::Experience(v)),
            }
        },
        WizardStep::Education => rsx! {
            EducationEditor {
                entries: data.education.clone(),
                on_change: move |v| replace_slice(&mut store, SectionSlice::Education(v)),
            }
        },
        WizardStep::Skills => rsx! {
            SkillsEditor {
                entries: data.skills.clone(),
                on_change: move |v| replace_slice(&mut store, SectionSlice::Skills(v)),
            }
        },
        WizardStep::Additional => rsx! {
            AdditionalSections {
                certifications: data.certifications.clone(),
                projects: data.projects.clone(),
                languages: data.languages.clone(),
                on_certifications_change: move |v| replace_slice(&mut store, SectionSlice::Certifications(v)),
                on_projects_change: move |v| replace_slice(&mut store, SectionSlice::Projects(v)),
                on_languages_change: move |v| replace_slice(&mut store, SectionSlice::Languages(v)),
            }
        },
    };

    rsx! {
        div {
            class: "builder",
            AppHeader {
                on_print: move |_| print_resume(&mut notices),
                on_download: move |_| download_pdf(&mut notices),
            }

            main {
                class: "builder-body",
                section {
                    class: "builder-form",
                    StepIndicator { wizard: wizard() }
                    div { class: "builder-card", {form} }
                    WizardNav {
                        wizard: wizard(),
                        on_previous: move |_| {
                            if wizard.write().previous() {
                                scroll_to_top();
                            }
                        },
                        on_next: move |_| {
                            if wizard.write().next() {
                                scroll_to_top();
                            }
                        },
                    }
                }

                section {
                    class: "builder-preview",
                    div {
                        class: "builder-preview-heading",
                        h2 { "Live Preview" }
                        span { "Updates in real-time" }
                    }
                    ResumePreview { data: data.clone(), page_width }
                }
            }

            NoticeTray {}
        }
    }
}
