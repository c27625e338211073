//! # Preview renderer
//!
//! [`render`] turns a [`ResumeData`] into a [`PreviewDocument`]: a display-ready
//! description of the printed resume with every string already formatted.
//! The UI walks the document and emits markup; it makes no formatting
//! decisions of its own.
//!
//! Rendering rules:
//!
//! - A list section appears only when its list is non-empty. The summary
//!   appears only when it is non-empty.
//! - An empty name is shown as [`PLACEHOLDER_NAME`].
//! - Dates go through [`format_month`]; ongoing experience ends in "Present".
//! - Links keep their typed text; only the `href` gains a scheme.
//!
//! `render` holds no state, so rendering the same data twice gives equal
//! documents. The live preview simply re-renders after every edit.

use crate::format::{date_range, format_month, initials, link_href};
use crate::models::{PersonalInfo, ResumeData};

pub const PLACEHOLDER_NAME: &str = "Your Name";

/// Sections in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Languages,
}

impl SectionKind {
    pub fn heading(&self) -> &'static str {
        match self {
            SectionKind::Summary => "Professional Summary",
            SectionKind::Experience => "Work Experience",
            SectionKind::Education => "Education",
            SectionKind::Skills => "Skills",
            SectionKind::Projects => "Projects",
            SectionKind::Certifications => "Certifications",
            SectionKind::Languages => "Languages",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PreviewDocument {
    pub header: PreviewHeader,
    pub sections: Vec<PreviewSection>,
}

impl PreviewDocument {
    pub fn headings(&self) -> Vec<&'static str> {
        self.sections.iter().map(|s| s.kind.heading()).collect()
    }

    pub fn section(&self, kind: SectionKind) -> Option<&PreviewSection> {
        self.sections.iter().find(|s| s.kind == kind)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PreviewHeader {
    pub name: String,
    /// True when `name` is the placeholder rather than user input.
    pub name_is_placeholder: bool,
    pub initials: String,
    pub photo: Option<String>,
    pub contacts: Vec<Contact>,
    pub links: Vec<Link>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Contact {
    pub kind: ContactKind,
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    LinkedIn,
    Portfolio,
    Project,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Link {
    pub kind: LinkKind,
    /// As typed by the user.
    pub text: String,
    pub href: String,
}

impl Link {
    fn new(kind: LinkKind, text: &str) -> Self {
        Link {
            kind,
            text: text.to_string(),
            href: link_href(text),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PreviewSection {
    pub kind: SectionKind,
    pub body: SectionBody,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SectionBody {
    Summary(String),
    Experience(Vec<ExperienceItem>),
    Education(Vec<EducationItem>),
    Skills(Vec<LevelItem>),
    Projects(Vec<ProjectItem>),
    Certifications(Vec<CertificationItem>),
    Languages(Vec<LevelItem>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExperienceItem {
    pub id: String,
    pub position: String,
    /// `"Company, Location"`, or just the company.
    pub employer: String,
    pub dates: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EducationItem {
    pub id: String,
    /// `"Degree in Field"`.
    pub title: String,
    pub school: String,
    pub gpa: Option<String>,
    pub dates: String,
}

/// A skill or language with its level.
#[derive(Clone, Debug, PartialEq)]
pub struct LevelItem {
    pub id: String,
    pub name: String,
    pub label: &'static str,
    /// 1 (lowest) to 4.
    pub weight: u8,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectItem {
    pub id: String,
    pub name: String,
    pub date: Option<String>,
    pub description: String,
    pub technologies: String,
    pub link: Option<Link>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CertificationItem {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub credential: Option<String>,
    pub date: Option<String>,
}

pub fn render(data: &ResumeData) -> PreviewDocument {
    let mut sections = Vec::new();

    if !data.personal_info.summary.is_empty() {
        sections.push(PreviewSection {
            kind: SectionKind::Summary,
            body: SectionBody::Summary(data.personal_info.summary.clone()),
        });
    }

    if !data.experience.is_empty() {
        let items = data
            .experience
            .iter()
            .map(|exp| ExperienceItem {
                id: exp.id.clone(),
                position: exp.position.clone(),
                employer: join_place(&exp.company, &exp.location),
                dates: date_range(&exp.start_date, &exp.end_date, exp.current),
                description: exp.description.clone(),
            })
            .collect();
        sections.push(PreviewSection {
            kind: SectionKind::Experience,
            body: SectionBody::Experience(items),
        });
    }

    if !data.education.is_empty() {
        let items = data
            .education
            .iter()
            .map(|edu| EducationItem {
                id: edu.id.clone(),
                title: format!("{} in {}", edu.degree, edu.field),
                school: join_place(&edu.institution, &edu.location),
                gpa: non_empty(edu.gpa.as_deref()).map(|gpa| format!("GPA: {gpa}")),
                dates: date_range(&edu.start_date, &edu.end_date, false),
            })
            .collect();
        sections.push(PreviewSection {
            kind: SectionKind::Education,
            body: SectionBody::Education(items),
        });
    }

    if !data.skills.is_empty() {
        let items = data
            .skills
            .iter()
            .map(|skill| LevelItem {
                id: skill.id.clone(),
                name: skill.name.clone(),
                label: skill.level.label(),
                weight: skill.level.weight(),
            })
            .collect();
        sections.push(PreviewSection {
            kind: SectionKind::Skills,
            body: SectionBody::Skills(items),
        });
    }

    if !data.projects.is_empty() {
        let items = data
            .projects
            .iter()
            .map(|project| ProjectItem {
                id: project.id.clone(),
                name: project.name.clone(),
                date: non_empty(Some(project.date.as_str())).map(format_month),
                description: project.description.clone(),
                technologies: project.technologies.clone(),
                link: non_empty(project.link.as_deref()).map(|l| Link::new(LinkKind::Project, l)),
            })
            .collect();
        sections.push(PreviewSection {
            kind: SectionKind::Projects,
            body: SectionBody::Projects(items),
        });
    }

    if !data.certifications.is_empty() {
        let items = data
            .certifications
            .iter()
            .map(|cert| CertificationItem {
                id: cert.id.clone(),
                name: cert.name.clone(),
                issuer: cert.issuer.clone(),
                credential: non_empty(cert.credential_id.as_deref()).map(|id| format!("ID: {id}")),
                date: non_empty(Some(cert.date.as_str())).map(format_month),
            })
            .collect();
        sections.push(PreviewSection {
            kind: SectionKind::Certifications,
            body: SectionBody::Certifications(items),
        });
    }

    if !data.languages.is_empty() {
        let items = data
            .languages
            .iter()
            .map(|lang| LevelItem {
                id: lang.id.clone(),
                name: lang.name.clone(),
                label: lang.proficiency.label(),
                weight: lang.proficiency.weight(),
            })
            .collect();
        sections.push(PreviewSection {
            kind: SectionKind::Languages,
            body: SectionBody::Languages(items),
        });
    }

    PreviewDocument {
        header: render_header(&data.personal_info),
        sections,
    }
}

fn render_header(info: &PersonalInfo) -> PreviewHeader {
    let name_is_placeholder = info.full_name.trim().is_empty();
    let name = if name_is_placeholder {
        PLACEHOLDER_NAME.to_string()
    } else {
        info.full_name.clone()
    };

    let contacts = [
        (ContactKind::Email, &info.email),
        (ContactKind::Phone, &info.phone),
        (ContactKind::Location, &info.location),
    ]
    .into_iter()
    .filter(|(_, text)| !text.is_empty())
    .map(|(kind, text)| Contact {
        kind,
        text: text.clone(),
    })
    .collect();

    let links = [
        (LinkKind::LinkedIn, info.linkedin.as_deref()),
        (LinkKind::Portfolio, info.portfolio.as_deref()),
    ]
    .into_iter()
    .filter_map(|(kind, text)| non_empty(text).map(|t| Link::new(kind, t)))
    .collect();

    PreviewHeader {
        name,
        name_is_placeholder,
        initials: initials(&info.full_name),
        photo: non_empty(info.photo.as_deref()).map(str::to_string),
        contacts,
        links,
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn join_place(name: &str, location: &str) -> String {
    if location.is_empty() {
        name.to_string()
    } else {
        format!("{name}, {location}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Certification, Education, Language, Proficiency, Project, Skill, SkillLevel};
    use crate::section::{add_entry, update_entry, ExperiencePatch};
    use crate::store::{ResumeStore, SectionSlice};

    fn sample() -> ResumeData {
        ResumeData {
            personal_info: PersonalInfo {
                full_name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                phone: String::new(),
                location: "London".to_string(),
                photo: None,
                linkedin: Some("linkedin.com/in/ada".to_string()),
                portfolio: Some(String::new()),
                summary: "Analyst of engines.".to_string(),
            },
            education: vec![Education {
                id: "e1".to_string(),
                institution: "University of London".to_string(),
                degree: "BSc".to_string(),
                field: "Mathematics".to_string(),
                location: String::new(),
                start_date: "1830-09".to_string(),
                end_date: "1833-06".to_string(),
                gpa: Some("4.0".to_string()),
            }],
            skills: vec![Skill {
                id: "s1".to_string(),
                name: "Algorithms".to_string(),
                level: SkillLevel::Expert,
            }],
            projects: vec![Project {
                id: "p1".to_string(),
                name: "Note G".to_string(),
                description: "Bernoulli numbers".to_string(),
                technologies: "Analytical Engine".to_string(),
                link: Some("example.com/note-g".to_string()),
                date: "1843-09".to_string(),
            }],
            languages: vec![Language {
                id: "l1".to_string(),
                name: "French".to_string(),
                proficiency: Proficiency::Fluent,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_resume_has_placeholder_and_no_sections() {
        let doc = render(&ResumeData::default());
        assert_eq!(doc.header.name, "Your Name");
        assert!(doc.header.name_is_placeholder);
        assert_eq!(doc.header.initials, "YN");
        assert!(doc.header.contacts.is_empty());
        assert!(doc.header.links.is_empty());
        assert!(doc.sections.is_empty());
    }

    #[test]
    fn test_render_is_deterministic() {
        let data = sample();
        assert_eq!(render(&data), render(&data));
    }

    #[test]
    fn test_sections_follow_display_order() {
        let doc = render(&sample());
        assert_eq!(
            doc.headings(),
            vec!["Professional Summary", "Education", "Skills", "Projects", "Languages"]
        );
    }

    #[test]
    fn test_certifications_heading_appears_with_first_entry() {
        let mut data = sample();
        assert!(!render(&data).headings().contains(&"Certifications"));

        data.certifications.push(Certification {
            id: "c1".to_string(),
            name: "CKA".to_string(),
            issuer: "CNCF".to_string(),
            date: "2023-06".to_string(),
            credential_id: None,
        });
        let doc = render(&data);
        assert!(doc.headings().contains(&"Certifications"));
        let Some(SectionBody::Certifications(items)) =
            doc.section(SectionKind::Certifications).map(|s| &s.body)
        else {
            panic!("certifications section missing");
        };
        assert_eq!(items[0].date.as_deref(), Some("Jun 2023"));
        assert!(items[0].credential.is_none());
    }

    #[test]
    fn test_header_contacts_and_links() {
        let doc = render(&sample());
        let kinds: Vec<ContactKind> = doc.header.contacts.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![ContactKind::Email, ContactKind::Location]);

        // Empty portfolio is skipped, linkedin gets a scheme for navigation only.
        assert_eq!(doc.header.links.len(), 1);
        assert_eq!(doc.header.links[0].text, "linkedin.com/in/ada");
        assert_eq!(doc.header.links[0].href, "https://linkedin.com/in/ada");
        assert_eq!(doc.header.initials, "AL");
    }

    #[test]
    fn test_entry_formatting() {
        let doc = render(&sample());

        let Some(SectionBody::Education(edu)) = doc.section(SectionKind::Education).map(|s| &s.body)
        else {
            panic!("education section missing");
        };
        assert_eq!(edu[0].title, "BSc in Mathematics");
        assert_eq!(edu[0].school, "University of London");
        assert_eq!(edu[0].gpa.as_deref(), Some("GPA: 4.0"));
        assert_eq!(edu[0].dates, "Sep 1830 - Jun 1833");

        let Some(SectionBody::Projects(projects)) = doc.section(SectionKind::Projects).map(|s| &s.body)
        else {
            panic!("projects section missing");
        };
        assert_eq!(projects[0].date.as_deref(), Some("Sep 1843"));
        let link = projects[0].link.as_ref().unwrap();
        assert_eq!(link.href, "https://example.com/note-g");

        let Some(SectionBody::Skills(skills)) = doc.section(SectionKind::Skills).map(|s| &s.body)
        else {
            panic!("skills section missing");
        };
        assert_eq!(skills[0].label, "Expert");
        assert_eq!(skills[0].weight, 4);
    }

    #[test]
    fn test_render_does_not_touch_stored_links() {
        let data = sample();
        let _ = render(&data);
        assert_eq!(data.personal_info.linkedin.as_deref(), Some("linkedin.com/in/ada"));
    }

    #[test]
    fn test_current_job_end_to_end() {
        let mut store = ResumeStore::new();

        let list = add_entry(&store.get().experience);
        let id = list[0].id.clone();
        store.apply(SectionSlice::Experience(list));

        let list = update_entry(
            &store.get().experience,
            &id,
            ExperiencePatch {
                company: Some("Acme".to_string()),
                start_date: Some("2021-04".to_string()),
                ..Default::default()
            },
        );
        store.apply(SectionSlice::Experience(list));

        let list = update_entry(
            &store.get().experience,
            &id,
            ExperiencePatch {
                current: Some(true),
                ..Default::default()
            },
        );
        store.apply(SectionSlice::Experience(list));

        let doc = render(store.get());
        assert_eq!(doc.headings(), vec!["Work Experience"]);
        let Some(SectionBody::Experience(items)) = doc.section(SectionKind::Experience).map(|s| &s.body)
        else {
            panic!("experience section missing");
        };
        assert_eq!(items[0].employer, "Acme");
        assert!(items[0].dates.ends_with("Present"));
        assert_eq!(items[0].dates, "Apr 2021 - Present");
    }
}
