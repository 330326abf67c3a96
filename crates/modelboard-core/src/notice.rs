//! User-facing notices (toasts).
//!
//! The form reports one error notice per failed field and one success notice
//! per accepted draft through [`NoticeSink`]. [`NoticeLog`] keeps recent
//! notices for display and drops them once they are older than its TTL.

use std::collections::VecDeque;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

/// How long a notice stays visible by default.
pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_secs(3);

/// Maximum number of notices kept at once; older ones are dropped first.
const MAX_NOTICES: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
    pub raised_at: DateTime<Utc>,
}

/// Receiver of user-facing notices.
pub trait NoticeSink {
    fn notify(&mut self, level: NoticeLevel, text: &str);

    fn error(&mut self, text: &str) {
        self.notify(NoticeLevel::Error, text);
    }

    fn success(&mut self, text: &str) {
        self.notify(NoticeLevel::Success, text);
    }
}

/// Bounded, expiring queue of notices, newest last.
#[derive(Debug, Clone)]
pub struct NoticeLog {
    notices: VecDeque<Notice>,
    ttl: Duration,
}

impl Default for NoticeLog {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_TTL)
    }
}

impl NoticeLog {
    pub fn new(ttl: Duration) -> Self {
        Self {
            notices: VecDeque::new(),
            ttl,
        }
    }

    /// Records a notice raised at `now`.
    pub fn push_at(&mut self, level: NoticeLevel, text: &str, now: DateTime<Utc>) {
        if self.notices.len() == MAX_NOTICES {
            self.notices.pop_front();
        }
        self.notices.push_back(Notice {
            level,
            text: text.to_string(),
            raised_at: now,
        });
    }

    /// Drops notices that have been visible for at least the TTL.
    pub fn expire(&mut self, now: DateTime<Utc>) {
        let ttl = self.ttl;
        self.notices.retain(|n| {
            (now - n.raised_at)
                .to_std()
                .map(|age| age < ttl)
                .unwrap_or(true)
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn clear(&mut self) {
        self.notices.clear();
    }
}

impl NoticeSink for NoticeLog {
    fn notify(&mut self, level: NoticeLevel, text: &str) {
        match level {
            NoticeLevel::Success => info!("notice: {}", text),
            NoticeLevel::Error => warn!("notice: {}", text),
        }
        self.push_at(level, text, Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn sink_helpers_set_level() {
        let mut log = NoticeLog::default();
        log.error("Add Model Name");
        log.success("saved");
        let levels: Vec<NoticeLevel> = log.iter().map(|n| n.level).collect();
        assert_eq!(levels, vec![NoticeLevel::Error, NoticeLevel::Success]);
        assert_eq!(log.iter().next().unwrap().text, "Add Model Name");
    }

    #[test]
    fn expire_drops_notices_older_than_ttl() {
        let mut log = NoticeLog::new(Duration::from_secs(3));
        log.push_at(NoticeLevel::Error, "old", at(0));
        log.push_at(NoticeLevel::Error, "new", at(2));

        log.expire(at(2));
        assert_eq!(log.len(), 2);

        log.expire(at(3));
        let texts: Vec<&str> = log.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["new"]);

        log.expire(at(10));
        assert!(log.is_empty());
    }

    #[test]
    fn notices_from_the_future_are_kept() {
        let mut log = NoticeLog::new(Duration::from_secs(1));
        log.push_at(NoticeLevel::Success, "skewed", at(5));
        log.expire(at(0));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn capacity_drops_oldest() {
        let mut log = NoticeLog::default();
        for i in 0..MAX_NOTICES + 2 {
            log.push_at(NoticeLevel::Error, &i.to_string(), at(0));
        }
        assert_eq!(log.len(), MAX_NOTICES);
        assert_eq!(log.iter().next().unwrap().text, "2");
    }
}
