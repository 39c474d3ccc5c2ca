// SPDX-License-Identifier: MIT OR Apache-2.0
//! Plain 2D value types in editor-local coordinates.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A point in the editor's local coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate, growing to the right
    pub x: f32,
    /// Vertical coordinate, growing downwards
    pub y: f32,
}

impl Point {
    /// The origin
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Whether `other` lies strictly within `tolerance` of this point on both axes
    pub fn is_near(&self, other: Point, tolerance: f32) -> bool {
        (self.x - other.x).abs() < tolerance && (self.y - other.y).abs() < tolerance
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Point,
    /// Width and height
    pub size: [f32; 2],
}

impl Rect {
    /// Create a rectangle from its top-left corner and size
    pub const fn new(min: Point, size: [f32; 2]) -> Self {
        Self { min, size }
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.min.x + self.size[0]
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size[1]
    }

    /// Inclusive containment test, edges count as inside
    pub fn contains(&self, p: Point) -> bool {
        self.min.x <= p.x && p.x <= self.right() && self.min.y <= p.y && p.y <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges_are_inclusive() {
        let rect = Rect::new(Point::new(10.0, 10.0), [30.0, 30.0]);
        assert!(rect.contains(Point::new(10.0, 10.0)));
        assert!(rect.contains(Point::new(40.0, 40.0)));
        assert!(!rect.contains(Point::new(40.5, 20.0)));
        assert!(!rect.contains(Point::new(9.9, 20.0)));
    }

    #[test]
    fn test_is_near_is_strict() {
        let port = Point::new(100.0, 100.0);
        assert!(port.is_near(Point::new(114.0, 86.0), 15.0));
        assert!(!port.is_near(Point::new(115.0, 100.0), 15.0));
    }
}
