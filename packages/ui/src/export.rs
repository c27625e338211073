//! Print and PDF export.
//!
//! Both go through the host's print dialog; "save as PDF" is one of its
//! destinations. The print stylesheet in `preview.css` hides everything
//! except `#resume-preview`.

use dioxus::prelude::*;

use crate::notices::{push_notice, NoticeLevel, NoticeLog};

pub fn open_print_dialog() {
    let _ = document::eval("window.print();");
}

pub fn print_resume(notices: &mut Signal<NoticeLog>) {
    tracing::info!("opening print dialog");
    open_print_dialog();
    push_notice(notices, NoticeLevel::Success, "Print dialog opened!");
}

pub fn download_pdf(notices: &mut Signal<NoticeLog>) {
    tracing::info!("opening print dialog for PDF export");
    open_print_dialog();
    push_notice(
        notices,
        NoticeLevel::Success,
        "Use your browser's 'Save as PDF' option to download!",
    );
}

/// Jump back to the top of the page after a step change.
pub fn scroll_to_top() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}
