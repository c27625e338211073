use dioxus::prelude::*;
use resume::PersonalInfo;

use crate::components::{Button, ButtonVariant, Field, Input, Textarea};
use crate::icons::{FaUpload, FaUser};
use crate::photo::SelectedPhoto;
use crate::Icon;

/// Singleton editor: every change hands back a whole updated `PersonalInfo`.
///
/// Photo files are passed up unread through `on_photo_selected`; reading and
/// merging happen at the controller so a slow read cannot overwrite edits
/// made while it was pending.
#[component]
pub fn PersonalInfoEditor(
    info: PersonalInfo,
    on_change: EventHandler<PersonalInfo>,
    on_photo_selected: EventHandler<SelectedPhoto>,
) -> Element {
    // Each field closure needs its own copy of the current value.
    let merge = {
        let info = info.clone();
        move |update: fn(&mut PersonalInfo, String)| {
            let info = info.clone();
            move |value: String| {
                let mut next = info.clone();
                update(&mut next, value);
                on_change.call(next);
            }
        }
    };

    let handle_photo = move |evt: FormEvent| {
        if let Some(photo) = evt.files().and_then(SelectedPhoto::from_engine) {
            on_photo_selected.call(photo);
        }
    };

    let remove_photo = {
        let info = info.clone();
        move |_: MouseEvent| {
            on_change.call(PersonalInfo {
                photo: None,
                ..info.clone()
            })
        }
    };

    rsx! {
        div {
            class: "editor",
            div {
                class: "editor-heading",
                h2 { "Personal Information" }
                p { "Let's start with your basic details" }
            }

            div {
                class: "photo-picker",
                div {
                    class: "photo-frame",
                    if let Some(photo) = &info.photo {
                        img { src: "{photo}", alt: "Profile" }
                    } else {
                        Icon { icon: FaUser, width: 48, height: 48 }
                    }
                }
                label {
                    class: "photo-upload",
                    title: "Upload photo",
                    Icon { icon: FaUpload, width: 14, height: 14 }
                    input {
                        r#type: "file",
                        accept: "image/*",
                        class: "hidden",
                        onchange: handle_photo,
                    }
                }
                p { class: "editor-hint", "Upload your professional photo" }
                if info.photo.is_some() {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: remove_photo,
                        "Remove photo"
                    }
                }
            }

            div {
                class: "editor-grid",
                Field { label: "Full Name", html_for: "fullName", required: true,
                    Input {
                        id: "fullName",
                        value: info.full_name.clone(),
                        placeholder: "John Doe",
                        oninput: merge(|i, v| i.full_name = v),
                    }
                }
                Field { label: "Email", html_for: "email", required: true,
                    Input {
                        id: "email",
                        kind: "email",
                        value: info.email.clone(),
                        placeholder: "john.doe@example.com",
                        oninput: merge(|i, v| i.email = v),
                    }
                }
                Field { label: "Phone", html_for: "phone", required: true,
                    Input {
                        id: "phone",
                        kind: "tel",
                        value: info.phone.clone(),
                        placeholder: "+1 (555) 123-4567",
                        oninput: merge(|i, v| i.phone = v),
                    }
                }
                Field { label: "Location", html_for: "location", required: true,
                    Input {
                        id: "location",
                        value: info.location.clone(),
                        placeholder: "New York, NY",
                        oninput: merge(|i, v| i.location = v),
                    }
                }
                Field { label: "LinkedIn", html_for: "linkedin",
                    Input {
                        id: "linkedin",
                        value: info.linkedin.clone().unwrap_or_default(),
                        placeholder: "linkedin.com/in/johndoe",
                        oninput: merge(|i, v| i.linkedin = Some(v)),
                    }
                }
                Field { label: "Portfolio/Website", html_for: "portfolio",
                    Input {
                        id: "portfolio",
                        value: info.portfolio.clone().unwrap_or_default(),
                        placeholder: "johndoe.com",
                        oninput: merge(|i, v| i.portfolio = Some(v)),
                    }
                }
            }

            Field { label: "Professional Summary", html_for: "summary", required: true,
                Textarea {
                    id: "summary",
                    value: info.summary.clone(),
                    placeholder: "Write a brief summary about yourself and your career goals...",
                    oninput: merge(|i, v| i.summary = v),
                }
            }
        }
    }
}
