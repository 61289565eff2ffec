//! Rounded rectangles used as clip masks and fill regions.

use kurbo::BezPath;

use super::{Point, Rect, Size};
use crate::error::{check_radius, check_size, InvariantResult};

/// Control point distance for a cubic quarter-circle, as a fraction of the radius.
pub const KAPPA: f32 = 0.552_284_8;

/// Per-corner radii, named by compass direction (north is the top edge).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerRadii {
    pub ne: f32,
    pub nw: f32,
    pub se: f32,
    pub sw: f32,
}

impl CornerRadii {
    pub const ZERO: CornerRadii = CornerRadii::uniform(0.0);

    pub const fn uniform(radius: f32) -> Self {
        Self {
            ne: radius,
            nw: radius,
            se: radius,
            sw: radius,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.ne == 0.0 && self.nw == 0.0 && self.se == 0.0 && self.sw == 0.0
    }

    fn validate(&self) -> InvariantResult<()> {
        check_radius(self.ne)?;
        check_radius(self.nw)?;
        check_radius(self.se)?;
        check_radius(self.sw)
    }

    fn clamped(&self, max: f32) -> Self {
        Self {
            ne: self.ne.min(max),
            nw: self.nw.min(max),
            se: self.se.min(max),
            sw: self.sw.min(max),
        }
    }
}

impl From<f32> for CornerRadii {
    fn from(radius: f32) -> Self {
        CornerRadii::uniform(radius)
    }
}

/// A rectangle anchored at the origin with legalized corner radii.
///
/// Every radius is at most half of the shorter side, so adjacent corners never
/// overlap and the boundary never self-intersects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    size: Size,
    radii: CornerRadii,
}

impl RoundedRect {
    /// Build a rounded rect, clamping radii to half the shorter side.
    ///
    /// # Panics
    ///
    /// Panics if the size or a radius is negative or NaN.
    pub fn new(size: Size, radii: impl Into<CornerRadii>) -> Self {
        match Self::try_new(size, radii) {
            Ok(rect) => rect,
            Err(violation) => panic!("{violation}"),
        }
    }

    /// Fallible form of [`RoundedRect::new`].
    pub fn try_new(size: Size, radii: impl Into<CornerRadii>) -> InvariantResult<Self> {
        let radii = radii.into();
        check_size(size.width, size.height)?;
        radii.validate()?;
        let max = size.width.min(size.height) / 2.0;
        Ok(Self {
            size,
            radii: radii.clamped(max),
        })
    }

    /// A plain rectangle.
    pub fn rect(size: Size) -> Self {
        Self::new(size, CornerRadii::ZERO)
    }

    /// A fully rounded square, i.e. a circle of the given diameter.
    pub fn circle(diameter: f32) -> Self {
        Self::new(Size::new(diameter, diameter), diameter / 2.0)
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// The legalized radii.
    pub fn radii(&self) -> CornerRadii {
        self.radii
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.size)
    }

    /// Closed boundary path, clockwise on screen, starting at the top edge.
    ///
    /// Zero radii produce straight corners only, so a rect without rounding
    /// is reproduced exactly.
    pub fn path(&self) -> BezPath {
        let (w, h) = (self.size.width, self.size.height);
        let CornerRadii { ne, nw, se, sw } = self.radii;

        let mut path = BezPath::new();
        path.move_to(Point::new(nw, 0.0).to_kurbo());

        path.line_to(Point::new(w - ne, 0.0).to_kurbo());
        if ne > 0.0 {
            path.curve_to(
                Point::new(w - ne + ne * KAPPA, 0.0).to_kurbo(),
                Point::new(w, ne - ne * KAPPA).to_kurbo(),
                Point::new(w, ne).to_kurbo(),
            );
        }

        path.line_to(Point::new(w, h - se).to_kurbo());
        if se > 0.0 {
            path.curve_to(
                Point::new(w, h - se + se * KAPPA).to_kurbo(),
                Point::new(w - se + se * KAPPA, h).to_kurbo(),
                Point::new(w - se, h).to_kurbo(),
            );
        }

        path.line_to(Point::new(sw, h).to_kurbo());
        if sw > 0.0 {
            path.curve_to(
                Point::new(sw - sw * KAPPA, h).to_kurbo(),
                Point::new(0.0, h - sw + sw * KAPPA).to_kurbo(),
                Point::new(0.0, h - sw).to_kurbo(),
            );
        }

        path.line_to(Point::new(0.0, nw).to_kurbo());
        if nw > 0.0 {
            path.curve_to(
                Point::new(0.0, nw - nw * KAPPA).to_kurbo(),
                Point::new(nw - nw * KAPPA, 0.0).to_kurbo(),
                Point::new(nw, 0.0).to_kurbo(),
            );
        }

        path.close_path();
        path
    }

    /// Exact point-in-shape test against the true circular corners.
    pub fn contains(&self, point: Point) -> bool {
        if !self.bounds().contains(point) {
            return false;
        }
        let (w, h) = (self.size.width, self.size.height);
        let CornerRadii { ne, nw, se, sw } = self.radii;

        let corner = if point.x < nw && point.y < nw {
            Some((Point::new(nw, nw), nw))
        } else if point.x > w - ne && point.y < ne {
            Some((Point::new(w - ne, ne), ne))
        } else if point.x > w - se && point.y > h - se {
            Some((Point::new(w - se, h - se), se))
        } else if point.x < sw && point.y > h - sw {
            Some((Point::new(sw, h - sw), sw))
        } else {
            None
        };

        match corner {
            Some((center, r)) => {
                let d = point - center;
                d.x * d.x + d.y * d.y <= r * r
            }
            None => true,
        }
    }
}
