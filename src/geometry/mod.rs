//! Geometry primitives shared by the compositor, the ripple animator and the
//! render transform contract.
//!
//! All coordinates are logical pixels in a y-down space whose origin is the
//! surface's top-left corner.

mod rounded_rect;

use std::ops::{Add, Mul, Neg, Sub};

pub use rounded_rect::{CornerRadii, RoundedRect, KAPPA};

/// A position in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The vector from the origin to this point.
    pub fn to_vector(self) -> Vector {
        Vector::new(self.x, self.y)
    }

    pub(crate) fn to_kurbo(self) -> kurbo::Point {
        kurbo::Point::new(f64::from(self.x), f64::from(self.y))
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Point::new(x, y)
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub<Vector> for Point {
    type Output = Point;

    fn sub(self, rhs: Vector) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A displacement in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

impl Vector {
    pub const ZERO: Vector = Vector::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f32) -> Vector {
        Vector::new(self.x * rhs, self.y * rhs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Component-wise maximum.
    pub fn max(self, other: Size) -> Size {
        Size::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// The longer of the two sides.
    pub fn longest_side(&self) -> f32 {
        self.width.max(self.height)
    }

    pub fn to_vector(self) -> Vector {
        Vector::new(self.width, self.height)
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::zero()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn offset(&self, delta: Vector) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
            ..*self
        }
    }

    /// Shrink by a padding on each side. Width and height never go negative.
    pub fn inset(&self, padding: Padding) -> Self {
        Self {
            x: self.x + padding.left,
            y: self.y + padding.top,
            width: (self.width - padding.horizontal()).max(0.0),
            height: (self.height - padding.vertical()).max(0.0),
        }
    }

    /// Overlapping area of two rects, or `None` if they don't touch.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = (self.x + self.width).min(other.x + other.width);
        let y1 = (self.y + self.height).min(other.y + other.height);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    /// Check whether a point is inside the ellipse inscribed in this rect.
    pub fn contains_in_ellipse(&self, point: Point) -> bool {
        if self.width <= 0.0 || self.height <= 0.0 {
            return false;
        }
        let center = self.center();
        let dx = (point.x - center.x) / (self.width / 2.0);
        let dy = (point.y - center.y) / (self.height / 2.0);
        dx * dx + dy * dy <= 1.0
    }
}

/// Insets applied around content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Offset of the content's top-left corner.
    pub fn leading(&self) -> Vector {
        Vector::new(self.left, self.top)
    }
}

impl From<f32> for Padding {
    fn from(v: f32) -> Self {
        Padding::all(v)
    }
}

/// `[vertical, horizontal]`, CSS-style 2-value shorthand.
impl From<[f32; 2]> for Padding {
    fn from(v: [f32; 2]) -> Self {
        Padding {
            top: v[0],
            right: v[1],
            bottom: v[0],
            left: v[1],
        }
    }
}

/// An RGBA color with `f32` channels in `0.0..=1.0`.
///
/// Style inputs are straight (non-premultiplied). Colors carried by an
/// operation stream are premultiplied, see [`Color::premultiplied`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    /// Scale the color channels by alpha.
    pub fn premultiplied(self) -> Self {
        Self {
            r: self.r * self.a,
            g: self.g * self.a,
            b: self.b * self.a,
            a: self.a,
        }
    }

    /// Scale every channel by `factor`.
    ///
    /// On a premultiplied color this fades the color without shifting its hue.
    pub fn mul_alpha(self, factor: f32) -> Self {
        Self {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
            a: self.a * factor,
        }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_vector_arithmetic() {
        let a = Point::new(10.0, 20.0);
        let b = Point::new(4.0, 5.0);
        assert_eq!(a - b, Vector::new(6.0, 15.0));
        assert_eq!(b + Vector::new(6.0, 15.0), a);
        assert_eq!(a - Vector::splat(10.0), Point::new(0.0, 10.0));
        assert_eq!(-Vector::new(1.0, -2.0), Vector::new(-1.0, 2.0));
        assert_eq!(Vector::new(1.0, 2.0) * 3.0, Vector::new(3.0, 6.0));
    }

    #[test]
    fn test_size_max() {
        let s = Size::new(10.0, 50.0).max(Size::new(30.0, 20.0));
        assert_eq!(s, Size::new(30.0, 50.0));
        assert_eq!(s.longest_side(), 50.0);
        assert!(Size::zero().is_empty());
    }

    #[test]
    fn test_rect_inset() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inset = rect.inset(Padding::symmetric(12.0, 10.0));
        assert_eq!(inset, Rect::new(12.0, 10.0, 76.0, 80.0));

        let over = Rect::new(0.0, 0.0, 10.0, 10.0).inset(Padding::all(20.0));
        assert_eq!(over.width, 0.0);
        assert_eq!(over.height, 0.0);
    }

    #[test]
    fn test_rect_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.intersect(&b), Some(Rect::new(5.0, 5.0, 5.0, 5.0)));
        assert_eq!(a.intersect(&Rect::new(20.0, 0.0, 5.0, 5.0)), None);
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(rect.contains(Point::new(50.0, 40.0)));
        assert!(rect.contains(Point::new(10.0, 20.0)));
        assert!(!rect.contains(Point::new(110.0, 70.0)));
        assert!(!rect.contains(Point::new(5.0, 40.0)));
    }

    #[test]
    fn test_rect_contains_in_ellipse() {
        let rect = Rect::new(0.0, 0.0, 40.0, 20.0);
        assert!(rect.contains_in_ellipse(Point::new(20.0, 10.0)));
        assert!(rect.contains_in_ellipse(Point::new(1.0, 10.0)));
        // Inside the bounding box but outside the ellipse
        assert!(!rect.contains_in_ellipse(Point::new(2.0, 2.0)));
    }

    #[test]
    fn test_color_premultiplied() {
        let color = Color::rgba(1.0, 0.5, 0.0, 0.5).premultiplied();
        assert_eq!(color, Color::rgba(0.5, 0.25, 0.0, 0.5));
    }

    #[test]
    fn test_color_mul_alpha() {
        let color = Color::rgba(0.4, 0.4, 0.4, 1.0).mul_alpha(0.5);
        assert_eq!(color, Color::rgba(0.2, 0.2, 0.2, 0.5));
    }

    #[test]
    fn test_color_from_hex() {
        let color = Color::from_hex(0x3F51B5);
        assert_eq!(color.r, 63.0 / 255.0);
        assert_eq!(color.g, 81.0 / 255.0);
        assert_eq!(color.b, 181.0 / 255.0);
        assert_eq!(color.a, 1.0);
        assert_eq!(Color::default(), Color::TRANSPARENT);
    }

    #[test]
    fn test_padding_shorthand() {
        let padding = Padding::from([10.0, 12.0]);
        assert_eq!(padding, Padding::symmetric(12.0, 10.0));
        assert_eq!(padding.leading(), Vector::new(12.0, 10.0));
        assert_eq!(Padding::from(8.0), Padding::all(8.0));
    }
}
