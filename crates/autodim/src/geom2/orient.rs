//! Dominant-axis orientation of segments.

use super::types::{Orientation, Segment};

/// Classify a segment by its dominant axis.
///
/// `Vertical` iff `|dx| < |dy|`; everything else, including the 45° tie, is
/// `Horizontal`. No tolerance is applied.
#[inline]
pub fn classify(segment: &Segment) -> Orientation {
    let (dx, dy) = segment.deltas();
    if dx < dy {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    }
}

/// Split segments into `(vertical, horizontal)` index lists, preserving input order.
pub fn partition_indices(segments: &[Segment]) -> (Vec<usize>, Vec<usize>) {
    let mut vertical = Vec::new();
    let mut horizontal = Vec::new();
    for (i, s) in segments.iter().enumerate() {
        match classify(s) {
            Orientation::Vertical => vertical.push(i),
            Orientation::Horizontal => horizontal.push(i),
        }
    }
    (vertical, horizontal)
}
