//! Constraint rules for the compositor's stacked content layer.
//!
//! Only the three rules a clickable surface needs are implemented here:
//! re-applying a minimum size, centering, and insetting.

pub use crate::geometry::Size;
use crate::geometry::{Padding, Vector};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min_width: f32,
    pub min_height: f32,
    pub max_width: f32,
    pub max_height: f32,
}

impl Constraints {
    pub fn new(min_width: f32, min_height: f32, max_width: f32, max_height: f32) -> Self {
        Self {
            min_width,
            min_height,
            max_width,
            max_height,
        }
    }

    pub fn tight(size: Size) -> Self {
        Self {
            min_width: size.width,
            min_height: size.height,
            max_width: size.width,
            max_height: size.height,
        }
    }

    pub fn loose(size: Size) -> Self {
        Self {
            min_width: 0.0,
            min_height: 0.0,
            max_width: size.width,
            max_height: size.height,
        }
    }

    pub fn unbounded() -> Self {
        Self {
            min_width: 0.0,
            min_height: 0.0,
            max_width: f32::INFINITY,
            max_height: f32::INFINITY,
        }
    }

    pub fn constrain(&self, size: Size) -> Size {
        Size {
            width: size.width.max(self.min_width).min(self.max_width),
            height: size.height.max(self.min_height).min(self.max_height),
        }
    }

    pub fn min_size(&self) -> Size {
        Size {
            width: self.min_width,
            height: self.min_height,
        }
    }

    pub fn max_size(&self) -> Size {
        Size {
            width: self.max_width,
            height: self.max_height,
        }
    }

    pub fn is_tight(&self) -> bool {
        self.min_width == self.max_width && self.min_height == self.max_height
    }

    /// Same maximum, no minimum.
    pub fn loosen(&self) -> Self {
        Self {
            min_width: 0.0,
            min_height: 0.0,
            ..*self
        }
    }

    /// Replace the minimum, keeping it within the maximum.
    pub fn with_min(&self, min: Size) -> Self {
        Self {
            min_width: min.width.min(self.max_width),
            min_height: min.height.min(self.max_height),
            ..*self
        }
    }

    /// Shrink both bounds by a padding, never below zero.
    pub fn deflate(&self, padding: Padding) -> Self {
        let h = padding.horizontal();
        let v = padding.vertical();
        Self {
            min_width: (self.min_width - h).max(0.0),
            min_height: (self.min_height - v).max(0.0),
            max_width: (self.max_width - h).max(0.0),
            max_height: (self.max_height - v).max(0.0),
        }
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Offset that centers `child` inside `container`.
pub fn center_offset(container: Size, child: Size) -> Vector {
    Vector::new(
        (container.width - child.width) / 2.0,
        (container.height - child.height) / 2.0,
    )
}

/// Grow a size by a padding on every side.
pub fn inflate(size: Size, padding: Padding) -> Size {
    Size::new(
        size.width + padding.horizontal(),
        size.height + padding.vertical(),
    )
}
