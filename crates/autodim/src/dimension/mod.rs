//! Dimension planning for grid lines and room boundary walls.
//!
//! Purpose
//! - Express the two commands (grid dimensions, room dimensions) over plain
//!   value types: the host exports a `Model`, the planners return requests the
//!   host creates inside one transaction.
//!
//! Layout
//! - `types.rs`: model export and plan types (serde).
//! - `cfg.rs`: `DimCfg` and its policies.
//! - `build.rs`: `plan_grids`, `plan_room`, `plan_rooms`.
//!
//! Code cross-refs: `geom2::{classify, reduce, vertical_line, horizontal_line}`

mod build;
mod cfg;
mod types;

pub use build::{plan_grids, plan_room, plan_rooms};
pub use cfg::{DegeneratePolicy, DimCfg, RoomErrorPolicy};
pub use types::{
    BoundarySegment, DimensionRequest, ElementId, GridLine, GridPlan, Model, Plan, Room,
    RoomPlan, SkippedRoom,
};
