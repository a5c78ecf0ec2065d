//! Components - Reusable UI Components
//!
//! Views and elements built on the state layer. The demo views in `app`
//! compose them.

pub mod notification;
pub mod primitives;
pub mod resizable;
pub mod separator;
