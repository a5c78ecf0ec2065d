//! UI Constants
//!
//! Centralized constants for layout, timers and user-facing messages.

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 750.0;

/// Distance each pane keeps from the container edge while dragging
pub const PANE_EDGE_MARGIN: f32 = 300.0;

/// Separator thickness in pixels
pub const SEPARATOR_THICKNESS: f32 = 6.0;

/// Shortest period an interval timer will run at
pub const MIN_INTERVAL_MS: u64 = 1;

/// Auto-dismiss delay for notifications pushed by the demo
pub const NOTIFICATION_TIMER_MS: u64 = 5000;
/// Maximum notifications kept on screen
pub const NOTIFICATION_MAX_VISIBLE: usize = 5;

/// Default request timeout
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Generic failure message shown for transport errors and unmapped statuses
pub const COMMON_ERROR_MSG: &str = "Unable to process a request, please try again";
/// Shown when a response body is not valid JSON
pub const PARSE_ERROR_MSG: &str = "Unable to parse response";

/// Config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "hookkit.toml";
/// Environment variable overriding the config file path
pub const CONFIG_ENV_VAR: &str = "HOOKKIT_CONFIG";
