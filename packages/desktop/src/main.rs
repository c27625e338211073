use std::path::PathBuf;

use dioxus::prelude::*;

use resume::BuilderConfig;
use ui::{NoticeLog, ResumeProvider};
use views::Builder;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Builder {},
}

fn main() {
    dioxus::launch(App);
}

/// `~/.config/resume-builder/resume-builder.toml` or the platform equivalent.
fn config_path() -> Option<PathBuf> {
    Some(
        dirs::config_dir()?
            .join("resume-builder")
            .join(BuilderConfig::filename()),
    )
}

/// Read the builder config, falling back to defaults when the file is
/// missing or malformed.
fn load_config() -> BuilderConfig {
    let Some(path) = config_path() else {
        tracing::debug!("no config directory; using defaults");
        return BuilderConfig::default();
    };

    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!(path = %path.display(), "no config file ({e}); using defaults");
            return BuilderConfig::default();
        }
    };

    match BuilderConfig::from_toml(&text) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "loaded builder config");
            config
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), "ignoring invalid config: {e}");
            BuilderConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(NoticeLog::default()));
    let config = use_hook(load_config);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        ResumeProvider {
            config: config,
            Router::<Route> {}
        }
    }
}

