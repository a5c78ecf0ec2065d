//! ResizableState - Split Pane Drag Lifecycle
//!
//! Tracks a single separator between two panes. The host forwards pointer
//! events; this type owns the geometry and the drag state.
//!
//! ```text
//! Idle ──pointer_down──▶ Resizing ──pointer_move──▶ Resizing (position)
//!   ▲                        │
//!   └──────pointer_up────────┘ (end_position = position)
//! ```

use crate::domain::geometry::{Axis, Orientation, Point, Rect};

/// Options for a resizable separator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizableOptions {
    /// Direction of resizing
    pub axis: Axis,
    /// If true, the separator cannot be dragged
    pub disabled: bool,
    /// Initial separator position
    pub initial: f32,
    /// Minimum separator position
    pub min: f32,
    /// Maximum separator position
    pub max: f32,
    /// Measure the position from the far edge of the container
    pub reverse: bool,
}

impl Default for ResizableOptions {
    fn default() -> Self {
        Self {
            axis: Axis::X,
            disabled: false,
            initial: 0.0,
            min: 0.0,
            max: f32::INFINITY,
            reverse: false,
        }
    }
}

impl ResizableOptions {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            ..Default::default()
        }
    }

    pub fn initial(mut self, initial: f32) -> Self {
        self.initial = initial;
        self
    }

    pub fn limits(mut self, min: f32, max: f32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }
}

/// Accessibility attributes for the drag separator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeparatorProps {
    pub role: &'static str,
    pub value_now: f32,
    pub value_min: f32,
    pub value_max: f32,
    pub orientation: Orientation,
    pub disabled: bool,
}

/// State for one resizable separator
#[derive(Debug, Clone)]
pub struct ResizableState {
    options: ResizableOptions,
    /// Live separator position (follows the pointer)
    position: f32,
    /// Position committed at the end of the last drag
    end_position: f32,
    resizing: bool,
}

impl ResizableState {
    /// Create a new state; the initial position is clamped into the limits
    pub fn new(options: ResizableOptions) -> Self {
        let initial = clamp(options.initial, options.min, options.max);
        Self {
            options,
            position: initial,
            end_position: initial,
            resizing: false,
        }
    }

    // ==================== Getters ====================

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn end_position(&self) -> f32 {
        self.end_position
    }

    pub fn is_resizing(&self) -> bool {
        self.resizing
    }

    pub fn axis(&self) -> Axis {
        self.options.axis
    }

    pub fn is_disabled(&self) -> bool {
        self.options.disabled
    }

    pub fn options(&self) -> &ResizableOptions {
        &self.options
    }

    /// Attributes for the drag separator element
    pub fn separator_props(&self) -> SeparatorProps {
        SeparatorProps {
            role: "separator",
            value_now: self.position,
            value_min: self.options.min,
            value_max: self.options.max,
            orientation: self.options.axis.separator_orientation(),
            disabled: self.options.disabled,
        }
    }

    /// Offset of the live separator from the container's leading edge
    ///
    /// With `reverse` the position counts from the far edge, so the offset
    /// needs the container extent and is `None` until it has been measured.
    pub fn handle_offset(&self, extent: Option<f32>) -> Option<f32> {
        if !self.options.reverse {
            return Some(self.position);
        }
        extent.map(|extent| extent - self.position)
    }

    /// Whether `end_position` sizes the trailing pane instead of the leading one
    pub fn sizes_trailing_pane(&self) -> bool {
        self.options.reverse
    }

    // ==================== Pointer Events ====================

    /// Begin a drag. Returns false when disabled.
    pub fn pointer_down(&mut self) -> bool {
        if self.options.disabled {
            return false;
        }
        self.resizing = true;
        tracing::debug!(position = self.position, "Resize started");
        true
    }

    /// Track the pointer during a drag
    ///
    /// `container` is the measured bounds of the pane container; without it
    /// the pointer coordinate is used as-is. Returns whether the position
    /// changed.
    pub fn pointer_move(&mut self, pointer: Point, container: Option<Rect>) -> bool {
        if !self.resizing || self.options.disabled {
            return false;
        }

        let axis = self.options.axis;
        let current = match container {
            Some(rect) => {
                let offset = rect.offset_of(pointer, axis);
                if self.options.reverse {
                    rect.size.along(axis) - offset
                } else {
                    offset
                }
            }
            None => pointer.along(axis),
        };

        let next = clamp(current, self.options.min, self.options.max);
        if next == self.position {
            return false;
        }
        self.position = next;
        true
    }

    /// Finish a drag and commit the position. Returns false if no drag was active.
    pub fn pointer_up(&mut self) -> bool {
        if self.options.disabled || !self.resizing {
            return false;
        }
        self.resizing = false;
        self.end_position = self.position;
        tracing::debug!(position = self.end_position, "Resize ended");
        true
    }

    // ==================== Setters ====================

    /// Replace the limits and re-clamp both positions
    pub fn set_limits(&mut self, min: f32, max: f32) {
        self.options.min = min;
        self.options.max = max;
        self.position = clamp(self.position, min, max);
        self.end_position = clamp(self.end_position, min, max);
    }

    /// Enable or disable dragging; disabling cancels an active drag
    pub fn set_disabled(&mut self, disabled: bool) {
        self.options.disabled = disabled;
        if disabled && self.resizing {
            self.resizing = false;
            self.position = self.end_position;
        }
    }
}

/// `min(max(value, min), max)`; `max` wins when the limits cross
fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal(initial: f32, min: f32, max: f32) -> ResizableState {
        ResizableState::new(ResizableOptions::new(Axis::X).initial(initial).limits(min, max))
    }

    #[test]
    fn test_initial_is_clamped() {
        assert_eq!(horizontal(50.0, 100.0, 500.0).position(), 100.0);
        assert_eq!(horizontal(900.0, 100.0, 500.0).end_position(), 500.0);
        assert_eq!(horizontal(250.0, 100.0, 500.0).position(), 250.0);
    }

    #[test]
    fn test_default_limits_are_open() {
        let state = ResizableState::new(ResizableOptions::default().initial(10_000.0));
        assert_eq!(state.position(), 10_000.0);
        assert_eq!(state.separator_props().value_max, f32::INFINITY);
    }

    #[test]
    fn test_drag_lifecycle() {
        let mut state = horizontal(200.0, 100.0, 500.0);

        assert!(state.pointer_down());
        assert!(state.is_resizing());
        assert!(state.pointer_move(Point::new(320.0, 10.0), None));
        assert_eq!(state.position(), 320.0);
        // Committed only on release
        assert_eq!(state.end_position(), 200.0);

        assert!(state.pointer_up());
        assert!(!state.is_resizing());
        assert_eq!(state.end_position(), 320.0);
    }

    #[test]
    fn test_drag_past_max_clamps_to_max() {
        let mut state = horizontal(200.0, 100.0, 500.0);
        state.pointer_down();
        state.pointer_move(Point::new(2000.0, 0.0), None);
        assert_eq!(state.position(), 500.0);
        state.pointer_up();
        assert_eq!(state.end_position(), 500.0);
    }

    #[test]
    fn test_drag_before_min_clamps_to_min() {
        let mut state = horizontal(200.0, 100.0, 500.0);
        state.pointer_down();
        state.pointer_move(Point::new(-40.0, 0.0), None);
        assert_eq!(state.position(), 100.0);
    }

    #[test]
    fn test_move_without_drag_is_ignored() {
        let mut state = horizontal(200.0, 100.0, 500.0);
        assert!(!state.pointer_move(Point::new(300.0, 0.0), None));
        assert_eq!(state.position(), 200.0);

        state.pointer_down();
        state.pointer_up();
        assert!(!state.pointer_move(Point::new(300.0, 0.0), None));
        assert_eq!(state.position(), 200.0);
    }

    #[test]
    fn test_pointer_up_without_drag() {
        let mut state = horizontal(200.0, 100.0, 500.0);
        assert!(!state.pointer_up());
    }

    #[test]
    fn test_disabled_never_starts() {
        let mut state = ResizableState::new(
            ResizableOptions::new(Axis::X)
                .initial(200.0)
                .limits(100.0, 500.0)
                .disabled(true),
        );
        assert!(!state.pointer_down());
        assert!(!state.is_resizing());
        assert!(!state.pointer_move(Point::new(300.0, 0.0), None));
        assert_eq!(state.position(), 200.0);
        assert!(state.separator_props().disabled);
    }

    #[test]
    fn test_disabling_mid_drag_reverts() {
        let mut state = horizontal(200.0, 100.0, 500.0);
        state.pointer_down();
        state.pointer_move(Point::new(400.0, 0.0), None);
        state.set_disabled(true);
        assert!(!state.is_resizing());
        assert_eq!(state.position(), 200.0);
    }

    #[test]
    fn test_position_relative_to_container() {
        let mut state = horizontal(200.0, 0.0, 1000.0);
        let container = Rect::new(80.0, 30.0, 800.0, 600.0);
        state.pointer_down();
        state.pointer_move(Point::new(380.0, 200.0), Some(container));
        assert_eq!(state.position(), 300.0);
    }

    #[test]
    fn test_vertical_axis_uses_y() {
        let mut state =
            ResizableState::new(ResizableOptions::new(Axis::Y).initial(100.0).limits(0.0, 600.0));
        let container = Rect::new(80.0, 30.0, 800.0, 600.0);
        state.pointer_down();
        state.pointer_move(Point::new(999.0, 230.0), Some(container));
        assert_eq!(state.position(), 200.0);
        assert_eq!(state.separator_props().orientation, Orientation::Horizontal);
    }

    #[test]
    fn test_reverse_measures_from_far_edge() {
        let mut state = ResizableState::new(
            ResizableOptions::new(Axis::X)
                .initial(200.0)
                .limits(0.0, 800.0)
                .reverse(true),
        );
        let container = Rect::new(0.0, 0.0, 800.0, 600.0);
        state.pointer_down();
        state.pointer_move(Point::new(600.0, 0.0), Some(container));
        assert_eq!(state.position(), 200.0);
        state.pointer_move(Point::new(500.0, 0.0), Some(container));
        assert_eq!(state.position(), 300.0);
    }

    #[test]
    fn test_reverse_handle_follows_pointer() {
        let mut state = ResizableState::new(
            ResizableOptions::new(Axis::X)
                .initial(400.0)
                .limits(0.0, 800.0)
                .reverse(true),
        );
        let container = Rect::new(0.0, 0.0, 800.0, 600.0);
        assert_eq!(state.handle_offset(None), None);

        state.pointer_down();
        state.pointer_move(Point::new(600.0, 0.0), Some(container));
        assert_eq!(state.position(), 200.0);
        assert_eq!(state.handle_offset(Some(container.size.width)), Some(600.0));

        state.pointer_up();
        assert!(state.sizes_trailing_pane());
        assert_eq!(state.end_position(), 200.0);
    }

    #[test]
    fn test_forward_handle_offset_is_position() {
        let mut state = horizontal(200.0, 0.0, 800.0);
        assert!(!state.sizes_trailing_pane());
        assert_eq!(state.handle_offset(None), Some(200.0));
        state.pointer_down();
        state.pointer_move(Point::new(350.0, 0.0), None);
        assert_eq!(state.handle_offset(Some(800.0)), Some(350.0));
    }

    #[test]
    fn test_set_limits_reclamps() {
        let mut state = horizontal(700.0, 100.0, 900.0);
        state.set_limits(300.0, 500.0);
        assert_eq!(state.position(), 500.0);
        assert_eq!(state.end_position(), 500.0);

        let props = state.separator_props();
        assert_eq!(props.role, "separator");
        assert_eq!(props.value_min, 300.0);
        assert_eq!(props.value_max, 500.0);
        assert_eq!(props.orientation, Orientation::Vertical);
    }
}
