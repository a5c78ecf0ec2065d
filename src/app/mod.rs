//! Application Layer
//!
//! Contains app initialization, window management and the demo views.

pub mod application;
pub mod fetch_panel;
pub mod notification_pane;
pub mod workspace;
