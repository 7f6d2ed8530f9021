use crate::{
    abstract_trait::NotifierTrait,
    domain::{Notice, NoticeLevel},
};
use std::sync::{Mutex, MutexGuard};
use tracing::{error, info};

/// Notices waiting to be shown; the presentation layer drains it.
#[derive(Debug, Default)]
pub struct NoticeQueue {
    pending: Mutex<Vec<Notice>>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Notice>> {
        self.pending.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn drain(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.lock())
    }

    pub fn snapshot(&self) -> Vec<Notice> {
        self.lock().clone()
    }
}

impl NotifierTrait for NoticeQueue {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Error => error!("Notice: {}", notice.message),
            NoticeLevel::Success | NoticeLevel::Info => info!("Notice: {}", notice.message),
        }

        self.lock().push(notice);
    }
}
