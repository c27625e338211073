use crate::models::{
    Certification, Education, Experience, Language, PersonalInfo, Project, ResumeData, Skill,
};

/// The full next value of one slice of the aggregate.
#[derive(Clone, Debug, PartialEq)]
pub enum SectionSlice {
    PersonalInfo(PersonalInfo),
    Experience(Vec<Experience>),
    Education(Vec<Education>),
    Skills(Vec<Skill>),
    Certifications(Vec<Certification>),
    Projects(Vec<Project>),
    Languages(Vec<Language>),
}

impl SectionSlice {
    pub fn name(&self) -> &'static str {
        match self {
            SectionSlice::PersonalInfo(_) => "personal_info",
            SectionSlice::Experience(_) => "experience",
            SectionSlice::Education(_) => "education",
            SectionSlice::Skills(_) => "skills",
            SectionSlice::Certifications(_) => "certifications",
            SectionSlice::Projects(_) => "projects",
            SectionSlice::Languages(_) => "languages",
        }
    }
}

impl ResumeData {
    /// A copy of `self` with one slice swapped out.
    pub fn with_slice(&self, slice: SectionSlice) -> ResumeData {
        let mut next = self.clone();
        match slice {
            SectionSlice::PersonalInfo(v) => next.personal_info = v,
            SectionSlice::Experience(v) => next.experience = v,
            SectionSlice::Education(v) => next.education = v,
            SectionSlice::Skills(v) => next.skills = v,
            SectionSlice::Certifications(v) => next.certifications = v,
            SectionSlice::Projects(v) => next.projects = v,
            SectionSlice::Languages(v) => next.languages = v,
        }
        next
    }
}

/// Single owner of the resume aggregate.
///
/// There is no partial-patch API here: callers compute the next whole value
/// (or the next whole slice) and hand it over. `revision` increases by one on
/// every replace.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResumeStore {
    data: ResumeData,
    revision: u64,
}

impl ResumeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: ResumeData) -> Self {
        Self { data, revision: 0 }
    }

    pub fn get(&self) -> &ResumeData {
        &self.data
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn replace(&mut self, data: ResumeData) {
        self.data = data;
        self.revision += 1;
    }

    /// Replace one slice, leaving the rest of the aggregate as it was.
    pub fn apply(&mut self, slice: SectionSlice) {
        let next = self.data.with_slice(slice);
        self.replace(next);
    }

    /// Merge a new photo into the personal info. Used when an async read completes.
    pub fn set_photo(&mut self, photo: Option<String>) {
        let info = PersonalInfo {
            photo,
            ..self.data.personal_info.clone()
        };
        self.apply(SectionSlice::PersonalInfo(info));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::{add_entry, update_entry, ExperiencePatch};

    #[test]
    fn test_new_store_is_empty() {
        let store = ResumeStore::new();
        let data = store.get();
        assert_eq!(data.personal_info, PersonalInfo::default());
        assert!(data.experience.is_empty());
        assert!(data.education.is_empty());
        assert!(data.skills.is_empty());
        assert!(data.certifications.is_empty());
        assert!(data.projects.is_empty());
        assert!(data.languages.is_empty());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_apply_replaces_only_its_slice() {
        let mut store = ResumeStore::new();
        store.apply(SectionSlice::PersonalInfo(PersonalInfo {
            full_name: "Ada Lovelace".to_string(),
            ..Default::default()
        }));
        let experience = add_entry(&store.get().experience);
        store.apply(SectionSlice::Experience(experience.clone()));

        assert_eq!(store.get().personal_info.full_name, "Ada Lovelace");
        assert_eq!(store.get().experience, experience);
        assert!(store.get().skills.is_empty());
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn test_replace_swaps_whole_value() {
        let mut store = ResumeStore::new();
        let skills = add_entry(&store.get().skills);
        store.apply(SectionSlice::Skills(skills));

        store.replace(ResumeData::default());
        assert!(store.get().skills.is_empty());
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn test_set_photo_keeps_other_fields() {
        let mut store = ResumeStore::new();
        store.apply(SectionSlice::PersonalInfo(PersonalInfo {
            full_name: "Grace Hopper".to_string(),
            email: "grace@navy.mil".to_string(),
            ..Default::default()
        }));
        store.set_photo(Some("data:image/png;base64,AAAA".to_string()));
        let info = &store.get().personal_info;
        assert_eq!(info.full_name, "Grace Hopper");
        assert_eq!(info.email, "grace@navy.mil");
        assert_eq!(info.photo.as_deref(), Some("data:image/png;base64,AAAA"));

        store.set_photo(None);
        assert!(store.get().personal_info.photo.is_none());
    }

    #[test]
    fn test_slice_edit_flows_through_store() {
        let mut store = ResumeStore::new();
        let list = add_entry(&store.get().experience);
        let id = list[0].id.clone();
        store.apply(SectionSlice::Experience(list));

        let list = update_entry(
            &store.get().experience,
            &id,
            ExperiencePatch {
                company: Some("Acme".to_string()),
                ..Default::default()
            },
        );
        store.apply(SectionSlice::Experience(list));
        assert_eq!(store.get().experience[0].company, "Acme");
        assert_eq!(store.get().experience[0].id, id);
    }
}
