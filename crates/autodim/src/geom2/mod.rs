//! 2D geometry core for dimension placement.
//!
//! Purpose
//! - Classify segments as vertical/horizontal by dominant axis.
//! - Reduce a point list to its two extremes under a lexicographic order.
//! - Turn an extent into an axis-aligned dimension line.
//!
//! Everything here is pure and host-free: no logging, no configuration.
//!
//! Code cross-refs: `Point2D`, `Segment`, `Extent`, `DimensionLine`

mod extent;
mod line;
mod orient;
mod types;

pub use extent::{reduce, sorted_unique, Extent};
pub use line::{horizontal_line, line_for, vertical_line, DimensionLine, LineDirection};
pub use orient::{classify, partition_indices};
pub use types::{Axis, Orientation, Point2D, Segment};

#[cfg(test)]
mod tests;
