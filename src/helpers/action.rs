//! Keyboard Actions and Shortcuts
//!
//! Defines the workspace shortcuts and their key bindings.

use gpui::{Action, KeyBinding};
use schemars::JsonSchema;
use serde::Deserialize;

/// Application-level actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum MenuAction {
    /// Quit the application
    Quit,
}

/// Workspace actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum WorkspaceAction {
    /// Run the configured request again
    Refetch,
    /// Abort the request and return to idle
    ResetFetch,
    /// Push a demo notification
    Notify,
    /// Close every notification
    DismissNotifications,
}

/// Key context the workspace bindings are scoped to
pub const WORKSPACE_CONTEXT: &str = "Workspace";

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    vec![
        // Application
        KeyBinding::new("secondary-q", MenuAction::Quit, None),
        // Fetch
        KeyBinding::new("secondary-r", WorkspaceAction::Refetch, Some(WORKSPACE_CONTEXT)),
        KeyBinding::new(
            "secondary-backspace",
            WorkspaceAction::ResetFetch,
            Some(WORKSPACE_CONTEXT),
        ),
        // Notifications
        KeyBinding::new("secondary-n", WorkspaceAction::Notify, Some(WORKSPACE_CONTEXT)),
        KeyBinding::new(
            "escape",
            WorkspaceAction::DismissNotifications,
            Some(WORKSPACE_CONTEXT),
        ),
    ]
}
