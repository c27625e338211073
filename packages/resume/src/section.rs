//! # Section CRUD
//!
//! Every list-valued section of a resume is edited through the same three
//! operations. They never mutate their input: each returns the full next
//! value of the slice, which the caller hands back to the
//! [`ResumeStore`](crate::ResumeStore).
//!
//! - [`add_entry`] appends a blank entry with a fresh id.
//! - [`update_entry`] shallow-merges a patch into the entry with a given id.
//! - [`remove_entry`] drops the entry with a given id.
//!
//! Update and remove with an id that is not in the list return the list
//! unchanged.
//!
//! Patches are plain structs of `Option` fields. A `None` leaves the field
//! alone; for optional model fields an empty string clears the value.

use uuid::Uuid;

use crate::models::{
    Certification, Education, Experience, Language, Proficiency, Project, Skill, SkillLevel,
};

/// An entry in a list-valued resume section.
pub trait SectionEntry: Clone {
    type Patch;

    fn id(&self) -> &str;

    /// A new entry with every field at its default.
    fn blank(id: String) -> Self;

    fn apply(&mut self, patch: Self::Patch);
}

/// Generate a fresh entry id.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Append a blank entry with a fresh id.
pub fn add_entry<T: SectionEntry>(list: &[T]) -> Vec<T> {
    add_entry_with_id(list, new_id())
}

/// Append a blank entry with a caller-chosen id.
pub fn add_entry_with_id<T: SectionEntry>(list: &[T], id: String) -> Vec<T> {
    let mut next = list.to_vec();
    next.push(T::blank(id));
    next
}

pub fn update_entry<T: SectionEntry>(list: &[T], id: &str, patch: T::Patch) -> Vec<T> {
    let mut next = list.to_vec();
    if let Some(entry) = next.iter_mut().find(|e| e.id() == id) {
        entry.apply(patch);
    }
    next
}

pub fn remove_entry<T: SectionEntry>(list: &[T], id: &str) -> Vec<T> {
    list.iter().filter(|e| e.id() != id).cloned().collect()
}

/// Empty input clears an optional field.
fn optional(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExperiencePatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// Setting this always clears `end_date` in the same update.
    pub current: Option<bool>,
    pub description: Option<String>,
}

impl SectionEntry for Experience {
    type Patch = ExperiencePatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn blank(id: String) -> Self {
        Experience {
            id,
            ..Default::default()
        }
    }

    fn apply(&mut self, patch: ExperiencePatch) {
        if let Some(v) = patch.company {
            self.company = v;
        }
        if let Some(v) = patch.position {
            self.position = v;
        }
        if let Some(v) = patch.location {
            self.location = v;
        }
        if let Some(v) = patch.start_date {
            self.start_date = v;
        }
        if let Some(v) = patch.end_date {
            self.end_date = v;
        }
        if let Some(current) = patch.current {
            self.current = current;
            self.end_date.clear();
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EducationPatch {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub gpa: Option<String>,
}

impl SectionEntry for Education {
    type Patch = EducationPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn blank(id: String) -> Self {
        Education {
            id,
            ..Default::default()
        }
    }

    fn apply(&mut self, patch: EducationPatch) {
        if let Some(v) = patch.institution {
            self.institution = v;
        }
        if let Some(v) = patch.degree {
            self.degree = v;
        }
        if let Some(v) = patch.field {
            self.field = v;
        }
        if let Some(v) = patch.location {
            self.location = v;
        }
        if let Some(v) = patch.start_date {
            self.start_date = v;
        }
        if let Some(v) = patch.end_date {
            self.end_date = v;
        }
        if let Some(v) = patch.gpa {
            self.gpa = optional(v);
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SkillPatch {
    pub name: Option<String>,
    pub level: Option<SkillLevel>,
}

impl SectionEntry for Skill {
    type Patch = SkillPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn blank(id: String) -> Self {
        Skill {
            id,
            ..Default::default()
        }
    }

    fn apply(&mut self, patch: SkillPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.level {
            self.level = v;
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CertificationPatch {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub credential_id: Option<String>,
}

impl SectionEntry for Certification {
    type Patch = CertificationPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn blank(id: String) -> Self {
        Certification {
            id,
            ..Default::default()
        }
    }

    fn apply(&mut self, patch: CertificationPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.issuer {
            self.issuer = v;
        }
        if let Some(v) = patch.date {
            self.date = v;
        }
        if let Some(v) = patch.credential_id {
            self.credential_id = optional(v);
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<String>,
    pub link: Option<String>,
    pub date: Option<String>,
}

impl SectionEntry for Project {
    type Patch = ProjectPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn blank(id: String) -> Self {
        Project {
            id,
            ..Default::default()
        }
    }

    fn apply(&mut self, patch: ProjectPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
        if let Some(v) = patch.technologies {
            self.technologies = v;
        }
        if let Some(v) = patch.link {
            self.link = optional(v);
        }
        if let Some(v) = patch.date {
            self.date = v;
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LanguagePatch {
    pub name: Option<String>,
    pub proficiency: Option<Proficiency>,
}

impl SectionEntry for Language {
    type Patch = LanguagePatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn blank(id: String) -> Self {
        Language {
            id,
            ..Default::default()
        }
    }

    fn apply(&mut self, patch: LanguagePatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.proficiency {
            self.proficiency = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn three_skills() -> Vec<Skill> {
        let mut list: Vec<Skill> = Vec::new();
        for name in ["Rust", "Go", "SQL"] {
            list = add_entry(&list);
            let id = list.last().unwrap().id.clone();
            list = update_entry(
                &list,
                &id,
                SkillPatch {
                    name: Some(name.to_string()),
                    ..Default::default()
                },
            );
        }
        list
    }

    #[test]
    fn test_add_appends_blank_entry_last() {
        let list: Vec<Experience> = add_entry(&[]);
        assert_eq!(list.len(), 1);
        assert!(!list[0].id.is_empty());
        assert_eq!(list[0].company, "");
        assert!(!list[0].current);

        let list = add_entry(&list);
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].company, "");
    }

    #[test]
    fn test_ids_are_unique_after_many_adds() {
        let mut list: Vec<Certification> = Vec::new();
        for _ in 0..200 {
            list = add_entry(&list);
        }
        let ids: HashSet<&str> = list.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn test_update_merges_only_given_fields() {
        let list = add_entry_with_id::<Education>(&[], "edu".to_string());
        let list = update_entry(
            &list,
            "edu",
            EducationPatch {
                institution: Some("MIT".to_string()),
                degree: Some("BSc".to_string()),
                ..Default::default()
            },
        );
        let list = update_entry(
            &list,
            "edu",
            EducationPatch {
                field: Some("Physics".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(list[0].institution, "MIT");
        assert_eq!(list[0].degree, "BSc");
        assert_eq!(list[0].field, "Physics");
        assert_eq!(list[0].id, "edu");
    }

    #[test]
    fn test_update_is_idempotent() {
        let list = three_skills();
        let id = list[1].id.clone();
        let patch = SkillPatch {
            level: Some(SkillLevel::Expert),
            ..Default::default()
        };
        let once = update_entry(&list, &id, patch.clone());
        let twice = update_entry(&once, &id, patch);
        assert_eq!(once, twice);
        assert_eq!(once[1].level, SkillLevel::Expert);
        assert_eq!(once[0], list[0]);
        assert_eq!(once[2], list[2]);
    }

    #[test]
    fn test_remove_keeps_order_of_the_rest() {
        let list = three_skills();
        let removed = remove_entry(&list, &list[1].id);
        assert_eq!(removed.len(), 2);
        assert_eq!(removed[0], list[0]);
        assert_eq!(removed[1], list[2]);
    }

    #[test]
    fn test_unknown_id_is_a_no_op() {
        let list = three_skills();
        let updated = update_entry(
            &list,
            "missing",
            SkillPatch {
                name: Some("Haskell".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(updated, list);
        assert_eq!(remove_entry(&list, "missing"), list);
    }

    #[test]
    fn test_setting_current_clears_end_date() {
        let list = add_entry_with_id::<Experience>(&[], "job".to_string());
        let list = update_entry(
            &list,
            "job",
            ExperiencePatch {
                end_date: Some("2022-03".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(list[0].end_date, "2022-03");

        let list = update_entry(
            &list,
            "job",
            ExperiencePatch {
                current: Some(true),
                ..Default::default()
            },
        );
        assert!(list[0].current);
        assert_eq!(list[0].end_date, "");

        // An end date supplied together with the flag does not survive it.
        let list = update_entry(
            &list,
            "job",
            ExperiencePatch {
                current: Some(true),
                end_date: Some("2024-01".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(list[0].end_date, "");
    }

    #[test]
    fn test_empty_optional_input_clears_field() {
        let list = add_entry_with_id::<Project>(&[], "p".to_string());
        let list = update_entry(
            &list,
            "p",
            ProjectPatch {
                link: Some("github.com/me/p".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(list[0].link.as_deref(), Some("github.com/me/p"));
        let list = update_entry(
            &list,
            "p",
            ProjectPatch {
                link: Some(String::new()),
                ..Default::default()
            },
        );
        assert!(list[0].link.is_none());
    }

    #[test]
    fn test_language_defaults_and_update() {
        let list = add_entry_with_id::<Language>(&[], "l".to_string());
        assert_eq!(list[0].proficiency, Proficiency::Conversational);
        let list = update_entry(
            &list,
            "l",
            LanguagePatch {
                name: Some("German".to_string()),
                proficiency: Some(Proficiency::Fluent),
            },
        );
        assert_eq!(list[0].name, "German");
        assert_eq!(list[0].proficiency, Proficiency::Fluent);
    }
}
