//! ContainerSize - Last Measured Container Dimensions

/// Dimensions of a container, unknown until first measured
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContainerSize {
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl ContainerSize {
    /// Record a measurement. Returns whether the dimensions changed.
    pub fn measure(&mut self, width: f32, height: f32) -> bool {
        let next = Self {
            width: Some(width),
            height: Some(height),
        };
        if *self == next {
            return false;
        }
        *self = next;
        true
    }

    pub fn is_measured(&self) -> bool {
        self.width.is_some() && self.height.is_some()
    }
}
