//! Core geometry types: Point, Size, Rect, Spacing.
//!
//! All values are floating-point pixels. Positions are relative to the owning
//! container unless stated otherwise; absolute rectangles only appear while
//! drawing.

use std::ops::{Add, Mul, Neg, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D position or displacement in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point { x: -self.x, y: -self.y }
    }
}

impl Mul<f32> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f32) -> Point {
        Point { x: self.x * rhs, y: self.y * rhs }
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// A 2D size in pixels (width x height).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// A zero-sized size.
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Area, treating negative extents as zero.
    #[inline]
    pub fn area(self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Whether either extent is zero or negative.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Whether both extents are greater than or equal to `other`'s.
    #[inline]
    pub fn covers(self, other: Size) -> bool {
        self.width >= other.width && self.height >= other.height
    }

    /// Convert to a [`Rect`] positioned at the origin.
    #[inline]
    pub const fn to_rect(self) -> Rect {
        Rect { x: 0.0, y: 0.0, width: self.width, height: self.height }
    }
}

impl Add for Size {
    type Output = Size;
    #[inline]
    fn add(self, rhs: Size) -> Size {
        Size { width: self.width + rhs.width, height: self.height + rhs.height }
    }
}

impl Sub for Size {
    type Output = Size;
    #[inline]
    fn sub(self, rhs: Size) -> Size {
        Size { width: self.width - rhs.width, height: self.height - rhs.height }
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// A rectangle defined by position and size.
///
/// Negative width or height is tolerated; such a rectangle is treated as
/// zero-area by [`Rect::area`] and [`Rect::is_empty`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// An empty rectangle at the origin.
    pub const EMPTY: Rect = Rect { x: 0.0, y: 0.0, width: 0.0, height: 0.0 };

    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Build a rectangle from a position and a size.
    #[inline]
    pub const fn from_parts(position: Point, size: Size) -> Self {
        Self { x: position.x, y: position.y, width: size.width, height: size.height }
    }

    /// The right edge: `x + width`.
    #[inline]
    pub fn right(self) -> f32 {
        self.x + self.width
    }

    /// The bottom edge: `y + height`.
    #[inline]
    pub fn bottom(self) -> f32 {
        self.y + self.height
    }

    /// The top-left corner.
    #[inline]
    pub const fn position(self) -> Point {
        Point { x: self.x, y: self.y }
    }

    /// The dimensions.
    #[inline]
    pub const fn size(self) -> Size {
        Size { width: self.width, height: self.height }
    }

    /// Area, treating negative extents as zero.
    #[inline]
    pub fn area(self) -> f32 {
        self.size().area()
    }

    /// Whether the rectangle covers no area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.size().is_empty()
    }

    /// Whether the point lies inside this rectangle.
    #[inline]
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Translate the rectangle by `offset`.
    #[inline]
    pub fn translate(self, offset: Point) -> Rect {
        Rect { x: self.x + offset.x, y: self.y + offset.y, ..self }
    }

    /// Expand outward by `spacing`.
    #[inline]
    pub fn grow(self, spacing: Spacing) -> Rect {
        Rect {
            x: self.x - spacing.left,
            y: self.y - spacing.top,
            width: self.width + spacing.width(),
            height: self.height + spacing.height(),
        }
    }

    /// Contract inward by `spacing`, clamping the size at zero.
    #[inline]
    pub fn shrink(self, spacing: Spacing) -> Rect {
        Rect {
            x: self.x + spacing.left,
            y: self.y + spacing.top,
            width: (self.width - spacing.width()).max(0.0),
            height: (self.height - spacing.height()).max(0.0),
        }
    }
}

// ---------------------------------------------------------------------------
// Spacing
// ---------------------------------------------------------------------------

/// Thickness around the four sides of a rectangle.
///
/// Used for widget decoration (borders, attached labels) that makes a widget's
/// full size larger than its content size.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Spacing {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Spacing {
    /// Zero on all sides.
    pub const ZERO: Spacing = Spacing { top: 0.0, right: 0.0, bottom: 0.0, left: 0.0 };

    /// Explicit values for each side.
    #[inline]
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self { top, right, bottom, left }
    }

    /// The same value on all four sides.
    #[inline]
    pub const fn all(value: f32) -> Self {
        Self { top: value, right: value, bottom: value, left: value }
    }

    /// Only horizontal thickness (top and bottom are zero).
    #[inline]
    pub const fn horizontal(left: f32, right: f32) -> Self {
        Self { top: 0.0, right, bottom: 0.0, left }
    }

    /// `left + right`.
    #[inline]
    pub fn width(self) -> f32 {
        self.left + self.right
    }

    /// `top + bottom`.
    #[inline]
    pub fn height(self) -> f32 {
        self.top + self.bottom
    }

    /// Total extent as a [`Size`].
    #[inline]
    pub fn total(self) -> Size {
        Size { width: self.width(), height: self.height() }
    }

    /// The top-left corner of the inner area relative to the outer one.
    #[inline]
    pub const fn offset(self) -> Point {
        Point { x: self.left, y: self.top }
    }
}

impl Add for Spacing {
    type Output = Spacing;
    #[inline]
    fn add(self, rhs: Spacing) -> Spacing {
        Spacing {
            top: self.top + rhs.top,
            right: self.right + rhs.right,
            bottom: self.bottom + rhs.bottom,
            left: self.left + rhs.left,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, 4.5);
        assert_eq!(a + b, Point::new(4.0, 6.5));
        assert_eq!(b - a, Point::new(2.0, 2.5));
        assert_eq!(-a, Point::new(-1.0, -2.0));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0));
    }

    #[test]
    fn size_area_clamps_negative() {
        assert_eq!(Size::new(10.0, 5.0).area(), 50.0);
        assert_eq!(Size::new(-10.0, 5.0).area(), 0.0);
        assert!(Size::new(0.0, 5.0).is_empty());
        assert!(!Size::new(1.0, 1.0).is_empty());
    }

    #[test]
    fn size_covers() {
        assert!(Size::new(10.0, 10.0).covers(Size::new(10.0, 3.0)));
        assert!(!Size::new(10.0, 10.0).covers(Size::new(11.0, 3.0)));
    }

    #[test]
    fn rect_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.position(), Point::new(10.0, 20.0));
        assert_eq!(r.size(), Size::new(30.0, 40.0));
    }

    #[test]
    fn rect_negative_is_empty() {
        let r = Rect::new(0.0, 0.0, -5.0, 10.0);
        assert!(r.is_empty());
        assert_eq!(r.area(), 0.0);
    }

    #[test]
    fn rect_contains() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(9.5, 9.5)));
        assert!(!r.contains(Point::new(10.0, 5.0)));
    }

    #[test]
    fn rect_grow_shrink() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0);
        let s = Spacing::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(r.grow(s), Rect::new(6.0, 9.0, 26.0, 24.0));
        assert_eq!(r.shrink(s), Rect::new(14.0, 11.0, 14.0, 16.0));
        assert_eq!(Rect::new(0.0, 0.0, 2.0, 2.0).shrink(Spacing::all(5.0)).size(), Size::ZERO);
    }

    #[test]
    fn spacing_totals() {
        let s = Spacing::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(s.width(), 6.0);
        assert_eq!(s.height(), 4.0);
        assert_eq!(s.total(), Size::new(6.0, 4.0));
        assert_eq!(s.offset(), Point::new(4.0, 1.0));
        assert_eq!(Spacing::horizontal(3.0, 0.0).offset(), Point::new(3.0, 0.0));
    }
}
