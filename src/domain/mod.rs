//! Domain Layer
//!
//! Plain data types shared by the state machines and views.

pub mod config;
pub mod geometry;
pub mod notification;
