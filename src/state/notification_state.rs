//! NotificationState - Notification Queue Reducer

use chrono::{DateTime, Local};
use std::time::Duration;

use crate::domain::notification::{Notification, NotificationVariant};

/// Transitions accepted by [`notification_reducer`]
#[derive(Debug, Clone, PartialEq)]
pub enum NotificationAction {
    /// Show a notification (newest first)
    Add(Notification),
    /// Remove a notification by id
    Remove(String),
    /// Remove everything
    RemoveAll,
}

/// Apply an action to a notification list
///
/// Adding a notification whose id is already present replaces the old entry.
pub fn notification_reducer(
    mut state: Vec<Notification>,
    action: NotificationAction,
) -> Vec<Notification> {
    match action {
        NotificationAction::Add(notification) => {
            tracing::debug!(id = %notification.id, "Notification added: {}", notification.title);
            state.retain(|n| n.id != notification.id);
            state.insert(0, notification);
            state
        }
        NotificationAction::Remove(id) => {
            tracing::debug!(id = %id, "Notification removed");
            state.retain(|n| n.id != id);
            state
        }
        NotificationAction::RemoveAll => {
            tracing::debug!("All notifications removed");
            Vec::new()
        }
    }
}

/// Ordered notification queue with an optional visibility cap
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    /// Oldest entries are dropped beyond this many (None = unlimited)
    max_visible: Option<usize>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_visible(mut self, max: Option<usize>) -> Self {
        self.max_visible = max;
        self.enforce_cap();
        self
    }

    /// Apply an action; returns ids evicted by the visibility cap
    pub fn dispatch(&mut self, action: NotificationAction) -> Vec<String> {
        let items = std::mem::take(&mut self.items);
        self.items = notification_reducer(items, action);
        self.enforce_cap()
    }

    /// Add a new notification and return its id
    pub fn push(
        &mut self,
        title: impl Into<String>,
        variant: NotificationVariant,
        timer: Option<Duration>,
    ) -> String {
        let notification = Notification::new(title, variant).with_timer(timer);
        let id = notification.id.clone();
        self.dispatch(NotificationAction::Add(notification));
        id
    }

    pub fn remove(&mut self, id: &str) {
        self.dispatch(NotificationAction::Remove(id.to_string()));
    }

    pub fn clear(&mut self) {
        self.dispatch(NotificationAction::RemoveAll);
    }

    /// Ids whose auto-dismiss timer has elapsed at `now`
    pub fn expired(&self, now: DateTime<Local>) -> Vec<String> {
        self.items
            .iter()
            .filter(|n| n.is_expired(now))
            .map(|n| n.id.clone())
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    /// Notifications, newest first
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn enforce_cap(&mut self) -> Vec<String> {
        match self.max_visible {
            Some(max) if self.items.len() > max => {
                self.items.split_off(max).into_iter().map(|n| n.id).collect()
            }
            _ => Vec::new(),
        }
    }
}
