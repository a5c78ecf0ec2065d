//! State - Pure State Machines
//!
//! Synchronous state and reducers. Nothing here touches gpui or tokio, so
//! every transition is unit-tested directly.

pub mod container_size;
pub mod fetch_state;
pub mod notification_state;
pub mod resizable_state;
