//! Resume state context.
//!
//! The aggregate lives in one `Signal<ResumeStore>` provided by
//! [`ResumeProvider`]. Views read it through [`use_resume`]; editors never see
//! it, they get their slice and a callback. All writes go through
//! [`replace_slice`] or [`ResumeStore::set_photo`].

use dioxus::prelude::*;
use resume::{BuilderConfig, ResumeStore, SectionSlice};

pub fn use_resume() -> Signal<ResumeStore> {
    use_context::<Signal<ResumeStore>>()
}

pub fn use_builder_config() -> BuilderConfig {
    use_context::<BuilderConfig>()
}

/// Swap one slice of the aggregate.
pub fn replace_slice(store: &mut Signal<ResumeStore>, slice: SectionSlice) {
    tracing::debug!(section = slice.name(), "replacing resume slice");
    store.write().apply(slice);
}

/// Provides the resume store and builder config to everything below it.
#[component]
pub fn ResumeProvider(#[props(default)] config: BuilderConfig, children: Element) -> Element {
    use_context_provider(|| Signal::new(ResumeStore::new()));
    use_context_provider(move || config);

    rsx! {
        {children}
    }
}
