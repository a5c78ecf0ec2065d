//! Primitive Components
//!
//! Basic building blocks.

pub mod button;
