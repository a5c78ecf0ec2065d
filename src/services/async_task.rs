//! AsyncTask - Generic Async Operation Hook
//!
//! Like [`FetchResource`](crate::services::fetch::FetchResource) but wraps any
//! future factory instead of an HTTP request. Results come back as
//! [`Completion`]s, either awaited in place with [`AsyncTask::next_settled`]
//! or handed to a UI pump with [`AsyncTask::take_completions`] and applied
//! with [`AsyncTask::settle`].

use futures::{FutureExt, StreamExt};
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::future::BoxFuture;
use std::fmt::Debug;
use std::future::Future;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::error::Error;
use crate::services::fetch::Completion;
use crate::services::runtime::runtime_handle;
use crate::state::fetch_state::{FetchAction, FetchState, FetchStatus, fetch_reducer};

type Factory<T, E> = Arc<dyn Fn() -> BoxFuture<'static, Result<T, E>> + Send + Sync>;

/// Wraps a repeatable async operation with a status lifecycle
pub struct AsyncTask<T, E = String> {
    factory: Factory<T, E>,
    state: FetchState<T, E>,
    task: Option<JoinHandle<()>>,
    generation: u64,
    tx: UnboundedSender<Completion<T, E>>,
    rx: Option<UnboundedReceiver<Completion<T, E>>>,
}

impl<T, E> AsyncTask<T, E>
where
    T: Send + 'static,
    E: Debug + From<Error> + Send + 'static,
{
    /// Wrap `factory`; runs it right away when `immediate`
    pub fn new<F, Fut>(factory: F, immediate: bool) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded();
        let mut task = Self {
            factory: Arc::new(move || factory().boxed()),
            state: FetchState::default(),
            task: None,
            generation: 0,
            tx,
            rx: Some(rx),
        };
        if immediate {
            task.execute();
        }
        task
    }

    pub fn state(&self) -> &FetchState<T, E> {
        &self.state
    }

    pub fn status(&self) -> FetchStatus {
        self.state.status
    }

    pub fn value(&self) -> Option<&T> {
        self.state.data.as_ref()
    }

    pub fn error(&self) -> Option<&E> {
        self.state.error.as_ref()
    }

    /// Run the operation, superseding a previous run
    pub fn execute(&mut self) {
        self.execute_on(runtime_handle());
    }

    fn execute_on(&mut self, runtime: Option<Handle>) {
        self.cancel();
        self.generation += 1;
        let generation = self.generation;
        self.apply(FetchAction::Pending);

        let Some(runtime) = runtime else {
            tracing::error!("No runtime available for async task");
            self.apply(FetchAction::Rejected(E::from(Error::NoRuntime)));
            return;
        };

        let future = (self.factory)();
        let tx = self.tx.clone();
        self.task = Some(runtime.spawn(async move {
            let result = future.await;
            let _ = tx.unbounded_send(Completion { generation, result });
        }));
    }

    /// Abort the running operation; its result is never applied
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Apply a completion. Returns false for stale or cancelled runs.
    pub fn settle(&mut self, completion: Completion<T, E>) -> bool {
        if completion.generation != self.generation || self.task.is_none() {
            tracing::debug!(
                "Dropping async task completion (generation {} of {})",
                completion.generation,
                self.generation
            );
            return false;
        }
        self.task = None;
        match completion.result {
            Ok(value) => self.apply(FetchAction::Resolve(value)),
            Err(error) => self.apply(FetchAction::Rejected(error)),
        }
        true
    }

    /// Wait for the current run to finish and apply its result
    ///
    /// Returns `None` when the receiver was handed out via [`Self::take_completions`].
    pub async fn next_settled(&mut self) -> Option<&FetchState<T, E>> {
        loop {
            let completion = self.rx.as_mut()?.next().await?;
            if self.settle(completion) {
                return Some(&self.state);
            }
        }
    }

    /// Hand the completion receiver to a UI pump
    pub fn take_completions(&mut self) -> Option<UnboundedReceiver<Completion<T, E>>> {
        self.rx.take()
    }

    fn apply(&mut self, action: FetchAction<T, E>) {
        let state = std::mem::take(&mut self.state);
        self.state = fetch_reducer(state, action);
    }
}

impl<T, E> Drop for AsyncTask<T, E> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
