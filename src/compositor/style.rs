//! Surface appearance: background, outline shape and content inset.

use crate::error::InvariantResult;
use crate::geometry::{Color, CornerRadii, Padding, RoundedRect, Size};
use crate::renderer::HitShape;

use super::constants::{
    BUTTON_CORNER_RADIUS, BUTTON_INSET_HORIZONTAL, BUTTON_INSET_VERTICAL, ICON_BUTTON_INSET,
};

/// Outline of a surface. Clips the background and ripples, and decides the
/// shape of the input region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceShape {
    RoundedRect(CornerRadii),
    /// A circle whose diameter is the surface width
    Circle,
}

impl Default for SurfaceShape {
    fn default() -> Self {
        SurfaceShape::RoundedRect(CornerRadii::ZERO)
    }
}

impl SurfaceShape {
    /// Clip outline for a surface of the given size.
    pub fn clip(&self, size: Size) -> RoundedRect {
        match self {
            SurfaceShape::RoundedRect(radii) => RoundedRect::new(size, *radii),
            SurfaceShape::Circle => RoundedRect::circle(size.width),
        }
    }

    pub(crate) fn validate(&self) -> InvariantResult<()> {
        match self {
            SurfaceShape::RoundedRect(radii) => RoundedRect::try_new(Size::zero(), *radii).map(drop),
            SurfaceShape::Circle => Ok(()),
        }
    }

    pub fn hit_shape(&self) -> HitShape {
        match self {
            SurfaceShape::RoundedRect(_) => HitShape::Rect,
            SurfaceShape::Circle => HitShape::Ellipse,
        }
    }
}

/// Visual style of an interactive surface.
///
/// The default is a transparent rectangle with no inset, the plain clickable
/// area.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceStyle {
    /// Straight (non-premultiplied) fill color, if any
    pub background: Option<Color>,
    pub shape: SurfaceShape,
    /// Space between the surface edge and its content
    pub inset: Padding,
}

impl SurfaceStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filled, slightly rounded surface with room for a label.
    pub fn button(background: Color) -> Self {
        Self::new()
            .background(background)
            .corner_radius(BUTTON_CORNER_RADIUS)
            .inset(Padding::symmetric(BUTTON_INSET_HORIZONTAL, BUTTON_INSET_VERTICAL))
    }

    /// Filled circle with room for an icon and an elliptical input region.
    pub fn icon_button(background: Color) -> Self {
        Self::new()
            .background(background)
            .circle()
            .inset(ICON_BUTTON_INSET)
    }

    /// Unfilled rectangular surface; only ripples are drawn.
    pub fn clickable() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.shape = SurfaceShape::RoundedRect(CornerRadii::uniform(radius));
        self
    }

    pub fn corner_radii(mut self, radii: CornerRadii) -> Self {
        self.shape = SurfaceShape::RoundedRect(radii);
        self
    }

    pub fn circle(mut self) -> Self {
        self.shape = SurfaceShape::Circle;
        self
    }

    pub fn inset(mut self, inset: impl Into<Padding>) -> Self {
        self.inset = inset.into();
        self
    }
}
