use dioxus::prelude::*;

/// How long a notice stays in the tray before dismissing itself (web only).
#[cfg(target_arch = "wasm32")]
const NOTICE_TTL_MS: u32 = 4_000;

/// Oldest notices are dropped once the tray holds this many.
pub const MAX_NOTICES: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub timestamp: String,
    pub level: NoticeLevel,
    pub message: String,
}

/// User-facing messages: export hints, rejected photos.
#[derive(Clone, Debug, Default)]
pub struct NoticeLog {
    pub entries: Vec<Notice>,
    next_id: u64,
}

impl NoticeLog {
    /// Append a notice and return its id, dropping the oldest entries past
    /// [`MAX_NOTICES`].
    pub fn push(&mut self, level: NoticeLevel, message: &str, timestamp: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Notice {
            id,
            timestamp,
            level,
            message: message.to_string(),
        });
        if self.entries.len() > MAX_NOTICES {
            let excess = self.entries.len() - MAX_NOTICES;
            self.entries.drain(..excess);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|n| n.id != id);
    }
}

pub fn use_notices() -> Signal<NoticeLog> {
    use_context::<Signal<NoticeLog>>()
}

pub fn push_notice(log: &mut Signal<NoticeLog>, level: NoticeLevel, message: &str) {
    let id = log.write().push(level, message, current_time());

    #[cfg(target_arch = "wasm32")]
    {
        let mut log = *log;
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(NOTICE_TTL_MS).await;
            log.write().dismiss(id);
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = id;
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut log = NoticeLog::default();
        let a = log.push(NoticeLevel::Info, "one", "10:00:00".to_string());
        let b = log.push(NoticeLevel::Success, "two", "10:00:01".to_string());
        assert!(b > a);
        assert_eq!(log.entries.len(), 2);
        assert_eq!(log.entries[1].message, "two");
    }

    #[test]
    fn test_log_keeps_only_newest_entries() {
        let mut log = NoticeLog::default();
        for n in 0..MAX_NOTICES + 3 {
            log.push(NoticeLevel::Info, &format!("notice {n}"), String::new());
        }
        assert_eq!(log.entries.len(), MAX_NOTICES);
        assert_eq!(log.entries[0].message, "notice 3");
        assert_eq!(
            log.entries.last().map(|n| n.message.as_str()),
            Some(format!("notice {}", MAX_NOTICES + 2).as_str())
        );
    }

    #[test]
    fn test_dismiss_removes_one_entry() {
        let mut log = NoticeLog::default();
        let keep = log.push(NoticeLevel::Info, "keep", String::new());
        let gone = log.push(NoticeLevel::Warning, "drop", String::new());
        log.dismiss(gone);
        log.dismiss(999);
        assert_eq!(log.entries.len(), 1);
        assert_eq!(log.entries[0].id, keep);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_native_timestamp_is_wall_clock() {
        let ts = current_time();
        assert_eq!(ts.len(), 8);
        assert_eq!(ts.matches(':').count(), 2);
    }
}
