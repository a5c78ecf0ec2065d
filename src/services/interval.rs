//! IntervalTimer - Repeating Callback
//!
//! The callback slot is shared with the timer task, so replacing the
//! callback takes effect on the next tick without restarting the timer.
//! Changing the delay restarts it; `None` stops it.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::constants::MIN_INTERVAL_MS;
use crate::services::runtime::spawn_in_tokio;

type Callback = Box<dyn FnMut() + Send>;

/// A cancellable repeating timer
pub struct IntervalTimer {
    callback: Arc<Mutex<Callback>>,
    delay: Option<Duration>,
    task: Option<JoinHandle<()>>,
}

impl IntervalTimer {
    /// Create a timer; it starts ticking when `delay` is `Some`
    pub fn new(callback: impl FnMut() + Send + 'static, delay: Option<Duration>) -> Self {
        let mut timer = Self {
            callback: Arc::new(Mutex::new(Box::new(callback))),
            delay: None,
            task: None,
        };
        timer.set_delay(delay);
        timer
    }

    pub fn delay(&self) -> Option<Duration> {
        self.delay
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Swap the callback; the timer keeps its schedule
    pub fn set_callback(&mut self, callback: impl FnMut() + Send + 'static) {
        let mut slot = self.callback.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Box::new(callback);
    }

    /// Change the delay; restarts only when it actually changed
    pub fn set_delay(&mut self, delay: Option<Duration>) {
        if delay == self.delay && (delay.is_none() || self.is_running()) {
            return;
        }
        self.cancel();
        self.delay = delay;

        let Some(delay) = delay else {
            return;
        };
        let period = delay.max(Duration::from_millis(MIN_INTERVAL_MS));
        let callback = self.callback.clone();

        self.task = spawn_in_tokio(async move {
            // First tick after one full period
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let mut slot = callback.lock().unwrap_or_else(PoisonError::into_inner);
                (*slot)();
            }
        });
    }

    /// Stop ticking
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.delay = None;
    }
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for IntervalTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntervalTimer")
            .field("delay", &self.delay)
            .field("running", &self.is_running())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn counter() -> (Arc<AtomicU32>, impl FnMut() + Send + 'static) {
        let count = Arc::new(AtomicU32::new(0));
        let inner = count.clone();
        (count, move || {
            inner.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_every_period() {
        let (count, callback) = counter();
        let timer = IntervalTimer::new(callback, Some(Duration::from_millis(100)));

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
        assert!(timer.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_none_delay_never_ticks() {
        let (count, callback) = counter();
        let timer = IntervalTimer::new(callback, None);
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(!timer.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_delay_none_stops() {
        let (count, callback) = counter();
        let mut timer = IntervalTimer::new(callback, Some(Duration::from_millis(100)));
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        timer.set_delay(None);
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(timer.delay(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_callback_keeps_schedule() {
        let (first, callback) = counter();
        let mut timer = IntervalTimer::new(callback, Some(Duration::from_millis(100)));
        tokio::time::sleep(Duration::from_millis(150)).await;

        let (second, callback) = counter();
        timer.set_callback(callback);
        // Next tick is still at 200ms, not 250ms
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let (count, callback) = counter();
        let timer = IntervalTimer::new(callback, Some(Duration::from_millis(10)));
        drop(timer);
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_delay_is_clamped() {
        let (count, callback) = counter();
        let _timer = IntervalTimer::new(callback, Some(Duration::ZERO));
        tokio::time::sleep(Duration::from_millis(5)).await;
        assert!(count.load(Ordering::SeqCst) >= 4);
    }
}
