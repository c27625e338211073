//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;
pub mod editors;
pub mod export;
pub mod notices;
pub mod photo;
pub mod views;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}
pub mod brand_icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::FaLinkedin;
}

pub const THEME_CSS: Asset = asset!("/assets/styling/theme.css");

mod state;
pub use state::{replace_slice, use_builder_config, use_resume, ResumeProvider};

mod app_header;
pub use app_header::AppHeader;

mod notice_tray;
pub use notice_tray::NoticeTray;
pub use notices::{push_notice, use_notices, Notice, NoticeLevel, NoticeLog};

mod preview;
pub use preview::ResumePreview;

mod wizard;
pub use wizard::{StepIndicator, WizardNav};

pub use views::BuilderView;
