//! Minimal 2D point arithmetic for tile-local boundary geometry

use std::ops::{Add, Mul, Sub};

/// A point (or vector) in tile-local coordinates
///
/// Tile-local space spans `[0, N-1]` on each axis for a tile of size N,
/// with y increasing downward to match raster row order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate, increasing rightward
    pub x: f64,
    /// Vertical coordinate, increasing downward
    pub y: f64,
}

impl Point {
    /// Create a point from x and y coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length when treated as a vector from the origin
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to another point
    pub fn distance_to(self, other: Self) -> f64 {
        (other - self).length()
    }

    /// Dot product with another vector
    pub fn dot(self, other: Self) -> f64 {
        self.x.mul_add(other.x, self.y * other.y)
    }

    /// 2D cross product (z component of the 3D cross product)
    ///
    /// Positive when `other` lies counter-clockwise of `self` in a
    /// y-down coordinate system.
    pub fn cross(self, other: Self) -> f64 {
        self.x.mul_add(other.y, -(self.y * other.x))
    }

    /// Linear interpolation toward `other` by parameter `t`
    ///
    /// `t = 0` returns `self`, `t = 1` returns `other`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            x: (other.x - self.x).mul_add(t, self.x),
            y: (other.y - self.y).mul_add(t, self.y),
        }
    }

    /// Unit-length perpendicular of this vector, or `None` for a
    /// zero-length vector
    ///
    /// The perpendicular is the direction rotated a quarter turn, used
    /// as the normal axis for line-style displacement.
    pub fn unit_normal(self) -> Option<Self> {
        let len = self.length();
        if len <= f64::EPSILON {
            return None;
        }
        Some(Self {
            x: -self.y / len,
            y: self.x / len,
        })
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
