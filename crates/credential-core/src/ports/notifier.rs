//! Notifier trait (port)

use crate::domain::Notification;

/// Fire-and-forget toast sink
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}
