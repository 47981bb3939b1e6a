use std::time::{Duration, Instant};

const INFO_DURATION: Duration = Duration::from_secs(3);
const WARNING_DURATION: Duration = Duration::from_secs(8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub created_at: Instant,
}

impl Notification {
    /// Errors stay until replaced; everything else times out
    pub fn is_expired(&self, now: Instant) -> bool {
        let lifetime = match self.level {
            NotificationLevel::Info => INFO_DURATION,
            NotificationLevel::Warning => WARNING_DURATION,
            NotificationLevel::Error => return false,
        };
        now.duration_since(self.created_at) >= lifetime
    }
}

#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>, level: NotificationLevel) {
        self.current = Some(Notification {
            message: message.into(),
            level,
            created_at: Instant::now(),
        });
    }

    pub fn show_info(&mut self, message: impl Into<String>) {
        self.show(message, NotificationLevel::Info);
    }

    pub fn show_warning(&mut self, message: impl Into<String>) {
        self.show(message, NotificationLevel::Warning);
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.show(message, NotificationLevel::Error);
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn clear_expired(&mut self) {
        self.clear_expired_at(Instant::now());
    }

    pub fn clear_expired_at(&mut self, now: Instant) {
        if self.current.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.current = None;
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
