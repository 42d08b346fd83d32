//! Automatic dimension placement for grid lines and room boundary walls.
//!
//! The geometric core (`geom2`) classifies segments by dominant axis, reduces
//! point groups to their extremes, and anchors axis-aligned dimension lines.
//! `dimension` runs the grid and room commands over a host-neutral model
//! export and returns a plan of dimensions for the host to create.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.

pub mod api;
pub mod dimension;
pub mod error;
pub mod geom2;
pub mod layout;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use dimension::{DimCfg, Model, Plan};
pub use error::DimError;
pub use geom2::{Axis, Extent, Orientation, Point2D, Segment};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::dimension::{
        plan_grids, plan_room, plan_rooms, DegeneratePolicy, DimCfg, DimensionRequest, ElementId,
        GridLine, Model, Plan, Room, RoomErrorPolicy,
    };
    pub use crate::error::DimError;
    pub use crate::geom2::{
        classify, horizontal_line, reduce, vertical_line, Axis, DimensionLine, Extent,
        LineDirection, Orientation, Point2D, Segment,
    };
}
