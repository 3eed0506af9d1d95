#[cfg(test)]
#[path = "notifications_test.rs"]
mod tests;

use std::time::Duration;
use std::time::Instant;

use crate::domain::models::Notification;

/// On-screen toasts. Each entry expires `duration` after it was pushed.
pub struct Notifications {
    duration: Duration,
    entries: Vec<(Instant, Notification)>,
}

impl Notifications {
    pub fn new(duration: Duration) -> Notifications {
        return Notifications {
            duration,
            entries: vec![],
        };
    }

    pub fn push(&mut self, notification: Notification) {
        self.push_at(notification, Instant::now());
    }

    pub fn push_at(&mut self, notification: Notification, at: Instant) {
        tracing::debug!(
            kind = ?notification.level,
            title = notification.title.as_str(),
            description = notification.description.as_str(),
            "notification"
        );
        self.entries.push((at, notification));
    }

    pub fn prune(&mut self, now: Instant) {
        let duration = self.duration;
        self.entries.retain(|(at, _)| {
            return now.saturating_duration_since(*at) < duration;
        });
    }

    /// Newest first.
    pub fn visible(&self) -> Vec<&Notification> {
        return self
            .entries
            .iter()
            .rev()
            .map(|(_, notification)| return notification)
            .collect();
    }

    pub fn len(&self) -> usize {
        return self.entries.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.entries.is_empty();
    }
}
