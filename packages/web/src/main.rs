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

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(NoticeLog::default()));

    // The browser has no config file; the builder runs on defaults.
    let config = use_hook(|| {
        let config = BuilderConfig::default();
        tracing::info!(
            max_photo_bytes = config.photo.max_bytes,
            page_width = %config.preview.page_width,
            "starting resume builder"
        );
        config
    });

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ResumeProvider {
            config: config,
            Router::<Route> {}
        }
    }
}
