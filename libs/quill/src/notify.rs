use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{error, info};

/// Handle to an in-progress notice, so a terminal outcome can replace it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeId(pub(crate) u64);

/// Transient user-facing notices: at most one active loading notice per
/// operation, dismissed explicitly or superseded by its outcome. No
/// persistence, no history.
pub trait Notify {
    fn loading(&self, message: &str) -> NoticeId;

    fn success(&self, message: &str);

    fn error(&self, message: &str);

    fn dismiss(&self, id: NoticeId);

    /// Drop any notices still on display.
    fn clear(&self);
}

/// Renders notices through the logging pipeline.
#[derive(Debug, Default)]
pub struct LogNotify {
    next_id: AtomicU64,
}

impl Notify for LogNotify {
    fn loading(&self, message: &str) -> NoticeId {
        info!("{message}");
        NoticeId(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    fn success(&self, message: &str) {
        info!("{message}");
    }

    fn error(&self, message: &str) {
        error!("{message}");
    }

    fn dismiss(&self, _id: NoticeId) {}

    fn clear(&self) {}
}
