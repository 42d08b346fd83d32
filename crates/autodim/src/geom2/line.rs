//! Axis-aligned dimension lines anchored on an extent.

use serde::{Deserialize, Serialize};

use super::extent::Extent;
use super::types::Point2D;

/// Direction of the produced dimension line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineDirection {
    Vertical,
    Horizontal,
}

/// Axis-aligned line anchoring a dimension.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DimensionLine {
    pub start: Point2D,
    pub end: Point2D,
    pub direction: LineDirection,
}

impl DimensionLine {
    #[inline]
    pub fn length(&self) -> f64 {
        (self.end.to_vec() - self.start.to_vec()).norm()
    }

    /// Copy of the line translated by `offset`.
    #[inline]
    pub fn translated(&self, offset: Point2D) -> Self {
        let d = offset.to_vec();
        Self {
            start: Point2D::from_vec(self.start.to_vec() + d),
            end: Point2D::from_vec(self.end.to_vec() + d),
            direction: self.direction,
        }
    }
}

/// Vertical pass: `first → (first.x, last.y)`.
#[inline]
pub fn vertical_line(extent: &Extent) -> DimensionLine {
    DimensionLine {
        start: extent.first,
        end: Point2D::new(extent.first.x, extent.last.y),
        direction: LineDirection::Vertical,
    }
}

/// Horizontal pass: `first → (last.x, first.y)`.
#[inline]
pub fn horizontal_line(extent: &Extent) -> DimensionLine {
    DimensionLine {
        start: extent.first,
        end: Point2D::new(extent.last.x, extent.first.y),
        direction: LineDirection::Horizontal,
    }
}

/// Build the line for `direction` from `extent`.
#[inline]
pub fn line_for(direction: LineDirection, extent: &Extent) -> DimensionLine {
    match direction {
        LineDirection::Vertical => vertical_line(extent),
        LineDirection::Horizontal => horizontal_line(extent),
    }
}
