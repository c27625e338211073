pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod photo;
pub mod preview;
pub mod section;
pub mod wizard;

mod store;
pub use store::{ResumeStore, SectionSlice};

pub use config::{BuilderConfig, PhotoConfig, PreviewConfig};
pub use error::{ConfigError, PhotoError};
pub use models::{
    Certification, Education, Experience, Language, PersonalInfo, Proficiency, Project,
    ResumeData, Skill, SkillLevel,
};
pub use photo::{read_photo, MemoryPhoto, PhotoSource};
pub use preview::{render, PreviewDocument};
pub use section::{add_entry, remove_entry, update_entry, SectionEntry};
pub use wizard::{StepStatus, Wizard, WizardStep};
