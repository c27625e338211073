//! One editor per wizard step. Each takes its slice by value and hands back
//! the next full value of that slice; none of them touch the store.

mod additional;
pub use additional::AdditionalSections;

mod education;
pub use education::EducationEditor;

mod experience;
pub use experience::ExperienceEditor;

mod personal_info;
pub use personal_info::PersonalInfoEditor;

mod skills;
pub use skills::SkillsEditor;
