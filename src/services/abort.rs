//! Abort Handles
//!
//! One controller per request. The owner keeps the controller; the request
//! task holds a signal and checks it before publishing any result.

use tokio_util::sync::CancellationToken;

/// Owner side of a cancellation pair
#[derive(Debug, Clone, Default)]
pub struct AbortController {
    cancel: CancellationToken,
}

impl AbortController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal observed by the request task
    pub fn signal(&self) -> AbortSignal {
        AbortSignal {
            cancel: self.cancel.clone(),
        }
    }

    /// Abort; idempotent
    pub fn abort(&self) {
        self.cancel.cancel();
    }

    pub fn is_aborted(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

/// Task side of a cancellation pair
#[derive(Debug, Clone)]
pub struct AbortSignal {
    cancel: CancellationToken,
}

impl AbortSignal {
    pub fn is_aborted(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Resolve once the controller aborts
    pub async fn aborted(&self) {
        self.cancel.cancelled().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_abort_is_idempotent() {
        let controller = AbortController::new();
        let signal = controller.signal();
        assert!(!signal.is_aborted());
        controller.abort();
        controller.abort();
        assert!(signal.is_aborted());
        assert!(controller.is_aborted());
    }

    #[tokio::test]
    async fn test_aborted_wakes_waiter() {
        let controller = AbortController::new();
        let signal = controller.signal();
        let waiter = tokio::spawn(async move { signal.aborted().await });

        tokio::time::sleep(Duration::from_millis(10)).await;
        controller.abort();
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("woken")
            .expect("join");
    }

    #[tokio::test]
    async fn test_aborted_returns_immediately_when_already_aborted() {
        let controller = AbortController::new();
        controller.abort();
        tokio::time::timeout(Duration::from_millis(50), controller.signal().aborted())
            .await
            .expect("already aborted");
    }
}
