//! Notification - A single toast record

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Visual flavour of a notification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationVariant {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationVariant::Info => "info",
            NotificationVariant::Success => "success",
            NotificationVariant::Warning => "warning",
            NotificationVariant::Error => "error",
        }
    }
}

/// A notification shown in the queue
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub variant: NotificationVariant,
    /// Whether a close button is shown
    pub closeable: bool,
    /// Auto-dismiss delay; `None` keeps it until closed
    pub timer: Option<Duration>,
    pub created_at: DateTime<Local>,
}

impl Notification {
    /// Create a closeable notification with a fresh id
    pub fn new(title: impl Into<String>, variant: NotificationVariant) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            variant,
            closeable: true,
            timer: None,
            created_at: Local::now(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_timer(mut self, timer: Option<Duration>) -> Self {
        self.timer = timer;
        self
    }

    pub fn closeable(mut self, closeable: bool) -> Self {
        self.closeable = closeable;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Local>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Whether the auto-dismiss timer has elapsed at `now`
    pub fn is_expired(&self, now: DateTime<Local>) -> bool {
        let Some(timer) = self.timer else {
            return false;
        };
        match chrono::Duration::from_std(timer) {
            Ok(timer) => now - self.created_at >= timer,
            Err(_) => false,
        }
    }
}
