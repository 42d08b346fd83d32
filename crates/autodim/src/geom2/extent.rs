//! Extent reduction: sort, dedup, take the two extremes.
//!
//! The reducer is the only place that orders points. It is pure and never logs;
//! callers decide what an error means for their group.

use serde::{Deserialize, Serialize};

use super::types::{Axis, Point2D};
use crate::error::DimError;

/// The two extreme points of a group under `(primary, secondary)` ordering.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub first: Point2D,
    pub last: Point2D,
}

impl Extent {
    /// `first == last`: the group held a single distinct point.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.first == self.last
    }
}

/// Sort `points` by `(primary asc, secondary asc)` and drop consecutive duplicates.
pub fn sorted_unique(points: &[Point2D], primary: Axis) -> Vec<Point2D> {
    let mut pts = points.to_vec();
    pts.sort_by(|a, b| a.cmp_by(*b, primary));
    pts.dedup();
    pts
}

/// Reduce a point list to its extent.
///
/// Errors with `DimError::EmptyInput` when `points` is empty. A single
/// distinct point yields `Extent { first: p, last: p }`.
pub fn reduce(points: &[Point2D], primary: Axis) -> Result<Extent, DimError> {
    let pts = sorted_unique(points, primary);
    match (pts.first(), pts.last()) {
        (Some(&first), Some(&last)) => Ok(Extent { first, last }),
        _ => Err(DimError::EmptyInput {
            group: format!("{primary:?}-ordered points"),
        }),
    }
}
