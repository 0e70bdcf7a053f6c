//! Screen-space vectors and rectangles.
//!
//! Coordinates are `f32` pixels with the origin at the top-left of the
//! display. Rectangles are half-open: `min` is inside, `max` is not.

use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// A 2D vector or point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise minimum.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f32, f32)> for Vec2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// An axis-aligned rectangle given by its min and max corners.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// The whole plane. Used as the root clip rectangle and to build
    /// half-plane clips.
    pub const EVERYTHING: Self = Self {
        min: Vec2::new(-f32::MAX, -f32::MAX),
        max: Vec2::new(f32::MAX, f32::MAX),
    };

    #[must_use]
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rectangle from a corner and a size.
    #[must_use]
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos, pos + size)
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[must_use]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.min.x + self.width() * 0.5,
            self.min.y + self.height() * 0.5,
        )
    }

    /// Check if a point is inside this rectangle.
    #[must_use]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.y >= self.min.y && p.x < self.max.x && p.y < self.max.y
    }

    /// Compute the intersection with another rectangle.
    ///
    /// Disjoint rectangles produce an empty rectangle anchored at the
    /// overlap corner rather than `None`, matching how a clip stack narrows.
    #[must_use]
    pub fn intersect(&self, other: &Rect) -> Rect {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max).max(min);
        Rect::new(min, max)
    }

    /// Grow the rectangle by `amount` on the left and right edges.
    #[must_use]
    pub fn expand_x(&self, amount: f32) -> Rect {
        Rect::new(
            Vec2::new(self.min.x - amount, self.min.y),
            Vec2::new(self.max.x + amount, self.max.y),
        )
    }

    /// Check if this rectangle has zero area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)] // Exact float comparison is intentional in tests
    use super::*;

    #[test]
    fn test_vec2_ops() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 5.0);
        assert_eq!(a + b, Vec2::new(4.0, 7.0));
        assert_eq!(b - a, Vec2::new(2.0, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(a.max(Vec2::new(0.0, 9.0)), Vec2::new(1.0, 9.0));
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let r = Rect::new(Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0));
        assert!(r.contains(Vec2::new(10.0, 10.0)));
        assert!(r.contains(Vec2::new(19.5, 19.5)));
        assert!(!r.contains(Vec2::new(20.0, 15.0)));
        assert!(!r.contains(Vec2::new(15.0, 9.9)));
    }

    #[test]
    fn test_rect_intersect_partial() {
        let a = Rect::new(Vec2::ZERO, Vec2::new(20.0, 20.0));
        let b = Rect::new(Vec2::new(10.0, 10.0), Vec2::new(30.0, 30.0));
        let c = a.intersect(&b);
        assert_eq!(c, Rect::new(Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0)));
        assert_eq!(a.intersect(&b), b.intersect(&a));
    }

    #[test]
    fn test_rect_intersect_disjoint_is_empty() {
        let a = Rect::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(50.0, 50.0), Vec2::new(60.0, 60.0));
        assert!(a.intersect(&b).is_empty());
    }

    #[test]
    fn test_rect_intersect_with_everything_is_identity() {
        let r = Rect::new(Vec2::new(-5.0, 3.0), Vec2::new(7.0, 8.0));
        assert_eq!(r.intersect(&Rect::EVERYTHING), r);
    }

    #[test]
    fn test_rect_expand_x() {
        let r = Rect::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 5.0));
        let e = r.expand_x(2.0);
        assert_eq!(e.min.x, 8.0);
        assert_eq!(e.max.x, 22.0);
        assert_eq!(e.height(), 5.0);
    }

    #[test]
    fn test_rect_center_and_size() {
        let r = Rect::from_pos_size(Vec2::new(2.0, 4.0), Vec2::new(10.0, 6.0));
        assert_eq!(r.size(), Vec2::new(10.0, 6.0));
        assert_eq!(r.center(), Vec2::new(7.0, 7.0));
    }
}
