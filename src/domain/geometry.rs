//! Geometry - Framework-independent layout primitives

use serde::{Deserialize, Serialize};

/// Direction a separator moves in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Horizontal resizing (side-by-side panes)
    #[default]
    X,
    /// Vertical resizing (stacked panes)
    Y,
}

impl Axis {
    /// Orientation of the separator drawn between panes
    pub fn separator_orientation(self) -> Orientation {
        match self {
            Axis::X => Orientation::Vertical,
            Axis::Y => Orientation::Horizontal,
        }
    }
}

/// Separator orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl Orientation {
    pub fn label(&self) -> &'static str {
        match self {
            Orientation::Vertical => "vertical",
            Orientation::Horizontal => "horizontal",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Coordinate along an axis
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Extent along an axis
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }
}

/// Measured bounds of an element, in window coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Offset of `point` from this rect's leading edge along `axis`
    pub fn offset_of(&self, point: Point, axis: Axis) -> f32 {
        point.along(axis) - self.origin.along(axis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of() {
        let rect = Rect::new(100.0, 40.0, 800.0, 600.0);
        let point = Point::new(350.0, 90.0);
        assert_eq!(rect.offset_of(point, Axis::X), 250.0);
        assert_eq!(rect.offset_of(point, Axis::Y), 50.0);
    }

    #[test]
    fn test_axis_orientation() {
        assert_eq!(Axis::X.separator_orientation(), Orientation::Vertical);
        assert_eq!(Axis::Y.separator_orientation().label(), "horizontal");
    }
}
