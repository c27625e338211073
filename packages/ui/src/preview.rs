use dioxus::prelude::*;
use resume::preview::{
    ContactKind, LevelItem, Link, LinkKind, PreviewHeader, PreviewSection, SectionBody, SectionKind,
};
use resume::{render, ResumeData};

use crate::brand_icons::FaLinkedin;
use crate::icons::{
    FaAward, FaCalendar, FaCode, FaEnvelope, FaFolderOpen, FaGlobe, FaLanguage, FaLocationDot,
    FaPhone,
};
use crate::Icon;

const PREVIEW_CSS: Asset = asset!("/assets/styling/preview.css");

/// The printable resume. Re-rendered from scratch on every edit.
#[component]
pub fn ResumePreview(
    data: ResumeData,
    #[props(default = "8.5in".to_string())] page_width: String,
) -> Element {
    let doc = render(&data);

    rsx! {
        document::Stylesheet { href: PREVIEW_CSS }
        div {
            id: "resume-preview",
            class: "resume-page",
            style: "max-width: {page_width}",
            {header(&doc.header)}
            for section in doc.sections.iter() {
                {section_block(section)}
            }
        }
    }
}

fn header(header: &PreviewHeader) -> Element {
    rsx! {
        div {
            class: "resume-header",
            if let Some(photo) = &header.photo {
                img { class: "resume-photo", src: "{photo}", alt: "{header.name}" }
            } else {
                div { class: "resume-initials", "{header.initials}" }
            }
            div {
                class: "resume-identity",
                h1 {
                    class: if header.name_is_placeholder { "resume-name placeholder" } else { "resume-name" },
                    "{header.name}"
                }
                if !header.contacts.is_empty() {
                    div {
                        class: "resume-contacts",
                        for contact in header.contacts.iter() {
                            span {
                                class: "resume-contact",
                                {contact_icon(contact.kind)}
                                "{contact.text}"
                            }
                        }
                    }
                }
                if !header.links.is_empty() {
                    div {
                        class: "resume-links",
                        for link in header.links.iter() {
                            {link_anchor(link)}
                        }
                    }
                }
            }
        }
    }
}

fn contact_icon(kind: ContactKind) -> Element {
    match kind {
        ContactKind::Email => rsx! { Icon { icon: FaEnvelope, width: 12, height: 12 } },
        ContactKind::Phone => rsx! { Icon { icon: FaPhone, width: 12, height: 12 } },
        ContactKind::Location => rsx! { Icon { icon: FaLocationDot, width: 12, height: 12 } },
    }
}

fn link_anchor(link: &Link) -> Element {
    let icon = match link.kind {
        LinkKind::LinkedIn => rsx! { Icon { icon: FaLinkedin, width: 12, height: 12 } },
        LinkKind::Portfolio => rsx! { Icon { icon: FaGlobe, width: 12, height: 12 } },
        LinkKind::Project => rsx! {},
    };
    rsx! {
        a {
            class: "resume-link",
            href: "{link.href}",
            target: "_blank",
            rel: "noopener noreferrer",
            {icon}
            "{link.text}"
        }
    }
}

fn section_icon(kind: SectionKind) -> Element {
    match kind {
        SectionKind::Skills => rsx! { Icon { icon: FaCode, width: 16, height: 16 } },
        SectionKind::Projects => rsx! { Icon { icon: FaFolderOpen, width: 16, height: 16 } },
        SectionKind::Certifications => rsx! { Icon { icon: FaAward, width: 16, height: 16 } },
        SectionKind::Languages => rsx! { Icon { icon: FaLanguage, width: 16, height: 16 } },
        SectionKind::Summary | SectionKind::Experience | SectionKind::Education => rsx! {},
    }
}

fn section_block(section: &PreviewSection) -> Element {
    rsx! {
        section {
            class: "resume-section",
            h2 {
                {section_icon(section.kind)}
                "{section.kind.heading()}"
            }
            {section_body(&section.body)}
        }
    }
}

fn dates(text: &str) -> Element {
    rsx! {
        span {
            class: "resume-dates",
            Icon { icon: FaCalendar, width: 10, height: 10 }
            "{text}"
        }
    }
}

fn level_grid(items: &[LevelItem]) -> Element {
    rsx! {
        div {
            class: "resume-level-grid",
            for item in items.iter() {
                div {
                    key: "{item.id}",
                    class: "resume-level",
                    span { class: "resume-level-name", "{item.name}" }
                    span { class: "resume-level-label", "({item.label})" }
                    span {
                        class: "resume-level-dots",
                        for n in 1..=4u8 {
                            span { class: if n <= item.weight { "dot filled" } else { "dot" } }
                        }
                    }
                }
            }
        }
    }
}

fn section_body(body: &SectionBody) -> Element {
    match body {
        SectionBody::Summary(text) => rsx! {
            p { class: "resume-summary", "{text}" }
        },
        SectionBody::Experience(items) => rsx! {
            for item in items.iter() {
                div {
                    key: "{item.id}",
                    class: "resume-entry",
                    div {
                        class: "resume-entry-head",
                        div {
                            h3 { "{item.position}" }
                            p { "{item.employer}" }
                        }
                        {dates(&item.dates)}
                    }
                    p { class: "resume-description", "{item.description}" }
                }
            }
        },
        SectionBody::Education(items) => rsx! {
            for item in items.iter() {
                div {
                    key: "{item.id}",
                    class: "resume-entry",
                    div {
                        class: "resume-entry-head",
                        div {
                            h3 { "{item.title}" }
                            p { "{item.school}" }
                            if let Some(gpa) = &item.gpa {
                                p { class: "resume-muted", "{gpa}" }
                            }
                        }
                        {dates(&item.dates)}
                    }
                }
            }
        },
        SectionBody::Skills(items) | SectionBody::Languages(items) => level_grid(items),
        SectionBody::Projects(items) => rsx! {
            for item in items.iter() {
                div {
                    key: "{item.id}",
                    class: "resume-entry",
                    div {
                        class: "resume-entry-head",
                        h3 { "{item.name}" }
                        if let Some(date) = &item.date {
                            span { class: "resume-dates", "{date}" }
                        }
                    }
                    p { class: "resume-description", "{item.description}" }
                    p {
                        class: "resume-muted",
                        strong { "Technologies:" }
                        " {item.technologies}"
                    }
                    if let Some(link) = &item.link {
                        {link_anchor(link)}
                    }
                }
            }
        },
        SectionBody::Certifications(items) => rsx! {
            for item in items.iter() {
                div {
                    key: "{item.id}",
                    class: "resume-entry resume-entry-head",
                    div {
                        h3 { "{item.name}" }
                        p { "{item.issuer}" }
                        if let Some(credential) = &item.credential {
                            p { class: "resume-muted", "{credential}" }
                        }
                    }
                    if let Some(date) = &item.date {
                        span { class: "resume-dates", "{date}" }
                    }
                }
            }
        },
    }
}
