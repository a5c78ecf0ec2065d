//! Config - Application Configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::{
    NOTIFICATION_MAX_VISIBLE, NOTIFICATION_TIMER_MS, PANE_EDGE_MARGIN, REQUEST_TIMEOUT_SECS,
};
use crate::domain::geometry::Axis;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Split pane configuration
    pub pane: PaneConfig,
    /// Demo fetch target
    pub fetch: FetchConfig,
    /// Notification queue configuration
    pub notifications: NotificationConfig,
}

/// Split pane configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PaneConfig {
    /// Resize direction
    pub axis: Axis,
    /// Distance each pane keeps from the container edge
    pub edge_margin: f32,
    /// Initial separator position as a fraction of the container extent
    pub initial_ratio: f32,
    /// Disable dragging entirely
    pub disabled: bool,
    /// Measure the position from the far edge
    pub reverse: bool,
}

impl Default for PaneConfig {
    fn default() -> Self {
        Self {
            axis: Axis::X,
            edge_margin: PANE_EDGE_MARGIN,
            initial_ratio: 0.5,
            disabled: false,
            reverse: false,
        }
    }
}

impl PaneConfig {
    /// Limits for a container of the given extent
    ///
    /// Returns `(min, max)`; `max` never drops below `min`.
    pub fn limits_for(&self, extent: f32) -> (f32, f32) {
        let min = self.edge_margin.max(0.0);
        let max = (extent - self.edge_margin).max(min);
        (min, max)
    }
}

/// Demo fetch configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FetchConfig {
    /// Endpoint fetched by the demo
    pub url: String,
    /// Fetch as soon as the view mounts
    pub immediate: bool,
    /// Clear previous data when a request starts
    pub reset_data: bool,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url: "https://jsonplaceholder.typicode.com/todos/1".to_string(),
            immediate: true,
            reset_data: true,
            timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Notification queue configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NotificationConfig {
    /// Auto-dismiss delay in milliseconds (0 = sticky)
    pub timer_ms: u64,
    /// Maximum notifications kept at once (0 = unlimited)
    pub max_visible: usize,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            timer_ms: NOTIFICATION_TIMER_MS,
            max_visible: NOTIFICATION_MAX_VISIBLE,
        }
    }
}

impl NotificationConfig {
    pub fn timer(&self) -> Option<Duration> {
        (self.timer_ms > 0).then(|| Duration::from_millis(self.timer_ms))
    }

    pub fn max_visible(&self) -> Option<usize> {
        (self.max_visible > 0).then_some(self.max_visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_for_wide_container() {
        let pane = PaneConfig::default();
        assert_eq!(pane.limits_for(1200.0), (300.0, 900.0));
    }

    #[test]
    fn test_limits_for_narrow_container() {
        let pane = PaneConfig::default();
        let (min, max) = pane.limits_for(500.0);
        assert_eq!(min, 300.0);
        assert_eq!(max, 300.0);
    }

    #[test]
    fn test_sticky_notifications() {
        let config = NotificationConfig {
            timer_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.timer(), None);
        assert_eq!(
            NotificationConfig::default().timer(),
            Some(Duration::from_millis(5000))
        );
    }

    #[test]
    fn test_zero_max_visible_is_unlimited() {
        let config: NotificationConfig = toml::from_str("max_visible = 0").expect("parse");
        assert_eq!(config.max_visible(), None);
        assert_eq!(NotificationConfig::default().max_visible(), Some(5));
    }
}
