//! Host-neutral model export and the plan handed back to the host.
//!
//! Kept small and serde-friendly so the CLI can read/write them as JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DimError;
use crate::geom2::{DimensionLine, Point2D, Segment};

/// Opaque host element identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub i64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A grid line of the active view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub id: ElementId,
    #[serde(default)]
    pub name: String,
    pub start: Point2D,
    pub end: Point2D,
}

impl GridLine {
    #[inline]
    pub fn segment(&self) -> Segment {
        Segment::new(self.start, self.end)
    }
}

/// One edge of a room boundary loop.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundarySegment {
    /// Bounding element (wall, column). `None` for separation lines and
    /// other edges that no element produces.
    #[serde(default)]
    pub element: Option<ElementId>,
    pub start: Point2D,
    pub end: Point2D,
}

impl BoundarySegment {
    #[inline]
    pub fn segment(&self) -> Segment {
        Segment::new(self.start, self.end)
    }
}

/// A room with its boundary loops; the first loop is the outer one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: ElementId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub boundary: Vec<Vec<BoundarySegment>>,
}

impl Room {
    /// Name for logs and errors: the room name, or its id.
    pub fn label(&self) -> String {
        if self.name.is_empty() {
            self.id.to_string()
        } else {
            format!("{} ({})", self.name, self.id)
        }
    }
}

/// Export of one view: its grids and rooms.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    #[serde(default)]
    pub grids: Vec<GridLine>,
    #[serde(default)]
    pub rooms: Vec<Room>,
}

impl Model {
    /// Reject NaN/∞ coordinates before anything is classified or sorted.
    pub fn validate(&self) -> Result<(), DimError> {
        for g in &self.grids {
            if !g.segment().is_finite() {
                return Err(DimError::NonFinite {
                    what: format!("grid {}", g.id),
                });
            }
        }
        for r in &self.rooms {
            let bad = r
                .boundary
                .iter()
                .flatten()
                .any(|s| !s.segment().is_finite());
            if bad {
                return Err(DimError::NonFinite {
                    what: format!("room {}", r.label()),
                });
            }
        }
        Ok(())
    }
}

/// One dimension for the host to create, then move by `offset`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DimensionRequest {
    pub references: Vec<ElementId>,
    pub line: DimensionLine,
    pub offset: Point2D,
}

impl DimensionRequest {
    /// The dimension line after the host applied `offset`.
    #[inline]
    pub fn placed_line(&self) -> DimensionLine {
        self.line.translated(self.offset)
    }
}

/// Both dimensions of the grid command.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridPlan {
    pub vertical: DimensionRequest,
    pub horizontal: DimensionRequest,
}

/// Both dimensions of one room.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomPlan {
    pub room: ElementId,
    pub vertical: DimensionRequest,
    pub horizontal: DimensionRequest,
}

/// A room left out of the plan and why.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkippedRoom {
    pub room: ElementId,
    pub reason: String,
}

/// Full output of a planner run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub dimensions: Vec<DimensionRequest>,
    #[serde(default)]
    pub skipped: Vec<SkippedRoom>,
}

impl Plan {
    /// Number of dimensions the host will insert.
    #[inline]
    pub fn count(&self) -> usize {
        self.dimensions.len()
    }
}

impl From<GridPlan> for Plan {
    fn from(g: GridPlan) -> Self {
        Plan {
            dimensions: vec![g.vertical, g.horizontal],
            skipped: Vec::new(),
        }
    }
}
