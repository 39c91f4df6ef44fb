use std::time::Duration;

use serde::Serialize;
use tokio::time::Instant;

/// How long one notification stays visible.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub is_success: bool,
}

/// Single-slot transient notifications: a new `show` replaces whatever is
/// visible, and the slot empties on its own after [`NOTIFICATION_TTL`].
///
/// Expiry is checked on read, so no background task is needed.
#[derive(Default, Debug)]
pub struct Notifier {
    slot: Option<(Notification, Instant)>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>, is_success: bool) {
        let notification = Notification {
            message: message.into(),
            is_success,
        };

        self.slot = Some((notification, Instant::now()));
    }

    pub fn current(&self) -> Option<&Notification> {
        match &self.slot {
            Some((notification, shown_at))
                if shown_at.elapsed() < NOTIFICATION_TTL =>
            {
                Some(notification)
            }
            _ => None,
        }
    }

    pub fn dismiss(&mut self) {
        self.slot = None;
    }
}
