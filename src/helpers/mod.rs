//! Helper Utilities
//!
//! Keyboard actions and their bindings.

mod action;

pub use action::*;
