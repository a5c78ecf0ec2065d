//! Tokio Runtime Bridge
//!
//! GPUI uses its own executor, but reqwest and tokio timers require tokio.
//! Background work is spawned on the ambient tokio runtime when there is one
//! (tests, embedding hosts) and on a lazily-built global runtime otherwise.
//!
//! ## Pattern
//!
//! ```text
//! GPUI view
//!       │
//!       ▼
//! spawn_in_tokio(async { ... })      ──▶ mpsc::UnboundedSender
//!                                              │
//!                                              ▼
//!                               cx.spawn pump applies result on UI thread
//! ```

use std::future::Future;
use std::sync::OnceLock;
use tokio::runtime::{Handle, Runtime};
use tokio::task::JoinHandle;

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Option<Runtime>> = OnceLock::new();

/// Get or initialize the global tokio runtime
fn global_handle() -> Option<Handle> {
    TOKIO_RUNTIME
        .get_or_init(|| match Runtime::new() {
            Ok(runtime) => Some(runtime),
            Err(e) => {
                tracing::error!("Failed to create tokio runtime: {}", e);
                None
            }
        })
        .as_ref()
        .map(|runtime| runtime.handle().clone())
}

/// Handle to the runtime background work should run on
pub fn runtime_handle() -> Option<Handle> {
    Handle::try_current().ok().or_else(global_handle)
}

/// Spawn a task and keep its handle so the owner can abort it
///
/// Returns `None` only when no runtime could be created.
pub fn spawn_in_tokio<F>(future: F) -> Option<JoinHandle<()>>
where
    F: Future<Output = ()> + Send + 'static,
{
    runtime_handle().map(|handle| handle.spawn(future))
}

/// Spawn a task with a name (for debugging)
pub fn spawn_named_in_tokio<F>(name: &'static str, future: F) -> Option<JoinHandle<()>>
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::debug!("Spawning tokio task: {}", name);
    spawn_in_tokio(async move {
        future.await;
        tracing::debug!("Tokio task completed: {}", name);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_without_ambient_runtime() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let flag = Arc::new(AtomicBool::new(false));
        let flag_clone = flag.clone();

        let handle = spawn_in_tokio(async move {
            flag_clone.store(true, Ordering::SeqCst);
        });
        assert!(handle.is_some());

        // Give the task time to complete
        std::thread::sleep(std::time::Duration::from_millis(100));
        assert!(flag.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_spawn_uses_ambient_runtime() {
        let handle = spawn_named_in_tokio("ambient", async {}).expect("runtime");
        handle.await.expect("join");
    }
}
