//! FetchResource - Data Fetching Hook
//!
//! Owns one request slot: the lifecycle state, the abort handle of the
//! in-flight request and the channel completions come back on.
//!
//! ```text
//! execute() ──▶ Pending (sync) ──▶ tokio task ──▶ Completion ──▶ settle() ──▶ Success | Error
//!     │                                 ▲
//!     └── aborts previous request ──────┘ (stale completions are dropped)
//! ```
//!
//! The hook variants map onto [`FetchOptions`]: `immediate` fetches
//! on construction and on URL change; `reset_data = false` keeps the previous
//! data visible while a new request is pending.

use futures::StreamExt;
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use tokio::task::JoinHandle;

use crate::error::Error;
use crate::services::abort::AbortController;
use crate::services::http::{RequestOptions, build_url, http_request, request_body};
use crate::services::runtime::spawn_named_in_tokio;
use crate::state::fetch_state::{FetchAction, FetchState, FetchStatus, fetch_reducer};

/// Behaviour switches shared by the fetch hook variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Fetch on construction and whenever the URL changes
    pub immediate: bool,
    /// Clear the previous data when a request starts
    pub reset_data: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            immediate: true,
            reset_data: true,
        }
    }
}

impl FetchOptions {
    /// Manual fetching via `execute` only
    pub fn manual() -> Self {
        Self {
            immediate: false,
            ..Default::default()
        }
    }
}

/// Result of one background run, tagged with the run's generation
#[derive(Debug)]
pub struct Completion<T, E = String> {
    pub(crate) generation: u64,
    pub(crate) result: Result<T, E>,
}

/// A fetch hook instance
pub struct FetchResource<T, P = serde_json::Value> {
    client: Client,
    url: String,
    request: RequestOptions,
    options: FetchOptions,
    state: FetchState<T>,
    /// Abort handle of the in-flight request
    controller: Option<AbortController>,
    task: Option<JoinHandle<()>>,
    generation: u64,
    tx: UnboundedSender<Completion<T>>,
    rx: Option<UnboundedReceiver<Completion<T>>>,
    _params: PhantomData<fn(&P)>,
}

impl<T, P> FetchResource<T, P>
where
    T: DeserializeOwned + Send + 'static,
    P: Serialize,
{
    /// Create a fetch hook with a default HTTP client
    pub fn new(url: impl Into<String>, request: RequestOptions, options: FetchOptions) -> Self {
        Self::with_client(Client::new(), url, request, options)
    }

    /// Create a fetch hook sharing an existing HTTP client
    pub fn with_client(
        client: Client,
        url: impl Into<String>,
        request: RequestOptions,
        options: FetchOptions,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded();
        let mut resource = Self {
            client,
            url: url.into(),
            request,
            options,
            state: FetchState::default(),
            controller: None,
            task: None,
            generation: 0,
            tx,
            rx: Some(rx),
            _params: PhantomData,
        };
        if options.immediate {
            resource.execute(None, None);
        }
        resource
    }

    // ==================== Getters ====================

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn status(&self) -> FetchStatus {
        self.state.status
    }

    pub fn data(&self) -> Option<&T> {
        self.state.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    // ==================== Operations ====================

    /// Start a request, superseding any request still in flight
    ///
    /// `params` becomes the JSON body; `params_url` is appended as a query string.
    pub fn execute(&mut self, params: Option<&P>, params_url: Option<&str>) {
        self.abort();
        self.generation += 1;
        let generation = self.generation;

        let previous = self.state.data.take();
        self.apply(FetchAction::Pending);
        if !self.options.reset_data {
            self.state.data = previous;
        }

        let body = match request_body(params, &self.request) {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Failed to encode request params: {}", e);
                self.apply(FetchAction::Rejected(e.user_message()));
                return;
            }
        };

        let controller = AbortController::new();
        let signal = controller.signal();
        let client = self.client.clone();
        let url = build_url(&self.url, params_url);
        let request = self.request.clone();
        let tx = self.tx.clone();

        let task = spawn_named_in_tokio("fetch", async move {
            let result = http_request::<T>(&client, &url, body, &request, &signal).await;
            if signal.is_aborted() || result.as_ref().is_err_and(|e| e.is_aborted()) {
                tracing::debug!("Request to {} aborted", url);
                return;
            }
            let result = result.map_err(|e| {
                tracing::warn!("Request to {} failed: {}", url, e);
                e.user_message()
            });
            let _ = tx.unbounded_send(Completion { generation, result });
        });

        match task {
            Some(task) => {
                self.controller = Some(controller);
                self.task = Some(task);
            }
            None => self.apply(FetchAction::Rejected(Error::NoRuntime.user_message())),
        }
    }

    /// Abort in-flight work and return to the idle state
    pub fn reset(&mut self) {
        self.abort();
        self.apply(FetchAction::Reset);
    }

    /// Cancel the in-flight request; its result will never be applied
    pub fn abort(&mut self) {
        if let Some(controller) = self.controller.take() {
            controller.abort();
        }
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Point the hook at a new URL, refetching when `immediate`
    pub fn set_url(&mut self, url: impl Into<String>) {
        let url = url.into();
        if url == self.url {
            return;
        }
        self.url = url;
        if self.options.immediate {
            self.execute(None, None);
        }
    }

    /// Replace the request options, refetching when `immediate`
    pub fn set_request(&mut self, request: RequestOptions) {
        self.request = request;
        if self.options.immediate {
            self.execute(None, None);
        }
    }

    // ==================== Completions ====================

    /// Apply a background completion. Returns false for stale or aborted results.
    pub fn settle(&mut self, completion: Completion<T>) -> bool {
        if completion.generation != self.generation {
            tracing::debug!(
                "Dropping stale completion (generation {} != {})",
                completion.generation,
                self.generation
            );
            return false;
        }
        match self.controller.take() {
            Some(controller) if !controller.is_aborted() => {}
            _ => return false,
        }
        self.task = None;

        match completion.result {
            Ok(data) => self.apply(FetchAction::Resolve(data)),
            Err(message) => self.apply(FetchAction::Rejected(message)),
        }
        true
    }

    /// Wait for the next completion and apply it
    ///
    /// Returns `None` when the receiver was handed out via [`Self::take_completions`].
    pub async fn next_settled(&mut self) -> Option<&FetchState<T>> {
        loop {
            let completion = self.rx.as_mut()?.next().await?;
            if self.settle(completion) {
                return Some(&self.state);
            }
        }
    }

    /// Apply every completion already queued. Returns whether the state changed.
    pub fn settle_ready(&mut self) -> bool {
        let mut changed = false;
        while let Some(Ok(Some(completion))) = self.rx.as_mut().map(|rx| rx.try_next()) {
            changed |= self.settle(completion);
        }
        changed
    }

    /// Hand the completion receiver to a UI pump
    pub fn take_completions(&mut self) -> Option<UnboundedReceiver<Completion<T>>> {
        self.rx.take()
    }

    fn apply(&mut self, action: FetchAction<T>) {
        let state = std::mem::take(&mut self.state);
        self.state = fetch_reducer(state, action);
    }
}

impl<T, P> Drop for FetchResource<T, P> {
    fn drop(&mut self) {
        if let Some(controller) = self.controller.take() {
            controller.abort();
        }
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl<T, P> std::fmt::Debug for FetchResource<T, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchResource")
            .field("url", &self.url)
            .field("status", &self.state.status)
            .field("generation", &self.generation)
            .finish()
    }
}
