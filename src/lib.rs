//! Hookkit Library
//!
//! Reusable UI state machines for gpui applications: a two-pane resizable
//! split, a request lifecycle around HTTP fetches, cancellable async tasks,
//! interval timers and a notification queue.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;
