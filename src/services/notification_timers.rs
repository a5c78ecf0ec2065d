//! NotificationTimers - Queue Plus Auto-Dismiss Timers
//!
//! Keeps one [`IntervalTimer`] per timed notification in step with the
//! queue. A timer's first tick sends the notification id on the expiry
//! channel; the owner closes it from there.

use std::collections::HashMap;
use std::time::Duration;

use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::domain::notification::{Notification, NotificationVariant};
use crate::services::interval::IntervalTimer;
use crate::state::notification_state::{NotificationAction, NotificationQueue};

/// Notification queue that owns the auto-dismiss timers
#[derive(Debug)]
pub struct NotificationTimers {
    queue: NotificationQueue,
    /// Auto-dismiss timers keyed by notification id
    timers: HashMap<String, IntervalTimer>,
    expired_tx: UnboundedSender<String>,
}

impl NotificationTimers {
    /// Create the queue and the receiver expired ids arrive on
    pub fn new(max_visible: Option<usize>) -> (Self, UnboundedReceiver<String>) {
        let (expired_tx, expired_rx) = mpsc::unbounded();
        let timers = Self {
            queue: NotificationQueue::new().with_max_visible(max_visible),
            timers: HashMap::new(),
            expired_tx,
        };
        (timers, expired_rx)
    }

    pub fn queue(&self) -> &NotificationQueue {
        &self.queue
    }

    pub fn has_timer(&self, id: &str) -> bool {
        self.timers.contains_key(id)
    }

    pub fn timer_count(&self) -> usize {
        self.timers.len()
    }

    /// Apply an action and keep the timers in step with the queue
    pub fn dispatch(&mut self, action: NotificationAction) {
        match &action {
            // Replacing the entry drops the old timer
            NotificationAction::Add(notification) => self.start_timer(notification),
            NotificationAction::Remove(id) => {
                self.timers.remove(id);
            }
            NotificationAction::RemoveAll => self.timers.clear(),
        }

        for id in self.queue.dispatch(action) {
            tracing::debug!(id = %id, "Notification evicted");
            self.timers.remove(&id);
        }
    }

    /// Show a new notification and return its id
    pub fn notify(
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

    /// Close one notification, stopping its timer first. Returns whether it was shown.
    pub fn close(&mut self, id: &str) -> bool {
        if let Some(mut timer) = self.timers.remove(id) {
            timer.set_delay(None);
        }
        if self.queue.get(id).is_none() {
            return false;
        }
        self.dispatch(NotificationAction::Remove(id.to_string()));
        true
    }

    pub fn clear(&mut self) {
        self.dispatch(NotificationAction::RemoveAll);
    }

    fn start_timer(&mut self, notification: &Notification) {
        let Some(delay) = notification.timer else {
            self.timers.remove(&notification.id);
            return;
        };
        let tx = self.expired_tx.clone();
        let id = notification.id.clone();
        let timer = IntervalTimer::new(
            move || {
                let _ = tx.unbounded_send(id.clone());
            },
            Some(delay),
        );
        self.timers.insert(notification.id.clone(), timer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timed(id: &str, ms: u64) -> NotificationAction {
        NotificationAction::Add(
            Notification::new(id, NotificationVariant::Info)
                .with_id(id)
                .with_timer(Some(Duration::from_millis(ms))),
        )
    }

    fn drain(rx: &mut UnboundedReceiver<String>) -> Vec<String> {
        let mut ids = Vec::new();
        while let Ok(Some(id)) = rx.try_next() {
            ids.push(id);
        }
        ids
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_reports_expiry() {
        let (mut timers, mut rx) = NotificationTimers::new(None);
        timers.dispatch(timed("a", 100));
        assert!(timers.has_timer("a"));

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(drain(&mut rx).is_empty());

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(drain(&mut rx), vec!["a".to_string()]);

        assert!(timers.close("a"));
        assert!(timers.queue().is_empty());
        assert_eq!(timers.timer_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_stops_timer() {
        let (mut timers, mut rx) = NotificationTimers::new(None);
        timers.dispatch(timed("a", 100));

        assert!(timers.close("a"));
        assert!(!timers.has_timer("a"));
        assert!(!timers.close("a"));

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_readd_replaces_timer() {
        let (mut timers, mut rx) = NotificationTimers::new(None);
        timers.dispatch(timed("a", 100));

        tokio::time::sleep(Duration::from_millis(60)).await;
        timers.dispatch(timed("a", 100));
        assert_eq!(timers.timer_count(), 1);
        assert_eq!(timers.queue().len(), 1);

        // The first timer would have fired at 100ms
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(drain(&mut rx).is_empty());

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(drain(&mut rx), vec!["a".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_readd_without_timer_drops_old_timer() {
        let (mut timers, mut rx) = NotificationTimers::new(None);
        timers.dispatch(timed("a", 100));
        timers.dispatch(NotificationAction::Add(
            Notification::new("a", NotificationVariant::Info).with_id("a"),
        ));
        assert!(!timers.has_timer("a"));

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_evicted_timer_never_fires() {
        let (mut timers, mut rx) = NotificationTimers::new(Some(1));
        timers.dispatch(timed("old", 100));
        let newest = timers.notify("new", NotificationVariant::Success, None);

        assert!(timers.queue().get("old").is_none());
        assert!(timers.queue().get(&newest).is_some());
        assert!(!timers.has_timer("old"));

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_stops_every_timer() {
        let (mut timers, mut rx) = NotificationTimers::new(None);
        timers.dispatch(timed("a", 100));
        timers.dispatch(timed("b", 150));
        timers.clear();

        assert_eq!(timers.timer_count(), 0);
        assert!(timers.queue().is_empty());
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(drain(&mut rx).is_empty());
    }
}
