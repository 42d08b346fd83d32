//! Curated surface for host integrations (UNSTABLE).
//!
//! A host layer needs exactly this: load the view's export, validate it, plan,
//! and submit each `DimensionRequest` inside one transaction.

pub use crate::dimension::{
    plan_grids, plan_room, plan_rooms, BoundarySegment, DegeneratePolicy, DimCfg,
    DimensionRequest, ElementId, GridLine, GridPlan, Model, Plan, Room, RoomErrorPolicy, RoomPlan,
    SkippedRoom,
};
pub use crate::error::DimError;
pub use crate::geom2::{DimensionLine, LineDirection, Point2D};
pub use crate::layout::{sample_model, LayoutCfg, LayoutError, ReplayToken};

/// Validate `model` and plan its grid dimensions.
pub fn grid_dimensions(model: &Model, cfg: &DimCfg) -> Result<Plan, DimError> {
    model.validate()?;
    plan_grids(&model.grids, cfg).map(Plan::from)
}

/// Validate `model` and plan dimensions for all of its rooms.
pub fn room_dimensions(model: &Model, cfg: &DimCfg) -> Result<Plan, DimError> {
    model.validate()?;
    plan_rooms(&model.rooms, cfg)
}
