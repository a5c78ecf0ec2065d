//! Service Layer
//!
//! Async work that runs on tokio and reports back to its owner.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 gpui views (UI thread)                    │
//! │   FetchPanel ── NotificationCenter ── ResizableView       │
//! └──────────────────────────────────────────────────────────┘
//!          │ execute / cancel            ▲ Completion / tick
//!          ▼                             │ (futures mpsc)
//! ┌──────────────────────────────────────────────────────────┐
//! │                 tokio (services::runtime)                 │
//! │   FetchResource  AsyncTask  IntervalTimer  NotifTimers   │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod abort;
pub mod async_task;
pub mod fetch;
pub mod http;
pub mod interval;
pub mod notification_timers;
pub mod runtime;

pub use runtime::*;
