//! Plain 2D value types: points, segments, axes, orientations.
//!
//! - `Point2D`: exact-equality point (no tolerance; dedup relies on this).
//! - `Segment`: two endpoints; orientation is derived, never stored.
//! - `Axis`, `Orientation`: small enums used by the reducer and classifier.
//!
//! Code cross-refs: `orient::classify`, `extent::reduce`, `line::{vertical_line, horizontal_line}`

use std::cmp::Ordering;
use std::fmt;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// A 2D point in model coordinates.
///
/// Equality is exact coordinate equality. Two points that differ by one ulp
/// are distinct.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_vec(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn from_vec(v: Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }

    /// Coordinate along `axis`.
    #[inline]
    pub fn coord(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Lexicographic total order: `primary` first, the other axis second.
    ///
    /// Signed zeros compare equal (`-0.0 + 0.0 == +0.0`), so the order agrees
    /// with `PartialEq` and equal points always end up adjacent. NaN stays
    /// ordered by `f64::total_cmp`.
    #[inline]
    pub fn cmp_by(self, other: Self, primary: Axis) -> Ordering {
        let secondary = primary.other();
        let key = |p: Self, a: Axis| p.coord(a) + 0.0;
        key(self, primary)
            .total_cmp(&key(other, primary))
            .then_with(|| key(self, secondary).total_cmp(&key(other, secondary)))
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A straight edge between two points (grid line, boundary wall).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point2D,
    pub end: Point2D,
}

impl Segment {
    #[inline]
    pub const fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }

    /// Point at normalized parameter `t` (`0` = start, `1` = end).
    ///
    /// `t` is not clamped; values outside `[0, 1]` extrapolate along the line.
    #[inline]
    pub fn point_at(&self, t: f64) -> Point2D {
        Point2D::from_vec(self.start.to_vec().lerp(&self.end.to_vec(), t))
    }

    /// Absolute coordinate deltas `(|dx|, |dy|)`.
    #[inline]
    pub fn deltas(&self) -> (f64, f64) {
        ((self.start.x - self.end.x).abs(), (self.start.y - self.end.y).abs())
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.end.to_vec() - self.start.to_vec()).norm()
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }
}

/// Coordinate axis used as the primary sort key of the reducer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// Dominant-axis orientation of a segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Vertical => f.write_str("vertical"),
            Orientation::Horizontal => f.write_str("horizontal"),
        }
    }
}
