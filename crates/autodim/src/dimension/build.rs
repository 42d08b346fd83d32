//! Planners for the grid and room commands.
//!
//! Both follow the same shape: classify each segment, collect a reference and a
//! representative point per group, reduce each group to its extent, and anchor
//! a dimension line on it. They differ in which group feeds which pass.

use tracing::{debug, info, warn};

use super::cfg::{DegeneratePolicy, DimCfg, RoomErrorPolicy};
use super::types::{
    DimensionRequest, ElementId, GridLine, GridPlan, Plan, Room, RoomPlan, SkippedRoom,
};
use crate::error::DimError;
use crate::geom2::{line_for, partition_indices, reduce, Axis, LineDirection, Point2D, Segment};

/// How one group is turned into a dimension: sort key and line direction.
#[derive(Clone, Copy, Debug)]
struct Pass {
    primary: Axis,
    direction: LineDirection,
}

/// Grid pass over horizontal grids: ordered X-then-Y, vertical line.
const GRID_VERTICAL: Pass = Pass {
    primary: Axis::X,
    direction: LineDirection::Vertical,
};
/// Grid pass over vertical grids: ordered Y-then-X, horizontal line.
const GRID_HORIZONTAL: Pass = Pass {
    primary: Axis::Y,
    direction: LineDirection::Horizontal,
};
/// Room pass over vertical walls: ordered X-then-Y, horizontal line.
const ROOM_ACROSS_VERTICAL: Pass = Pass {
    primary: Axis::X,
    direction: LineDirection::Horizontal,
};
/// Room pass over horizontal walls: ordered Y-then-X, vertical line.
const ROOM_ACROSS_HORIZONTAL: Pass = Pass {
    primary: Axis::Y,
    direction: LineDirection::Vertical,
};

/// References and representative points of one oriented group, in input order.
#[derive(Clone, Debug, Default)]
struct Group {
    refs: Vec<ElementId>,
    points: Vec<Point2D>,
}

impl Group {
    fn push(&mut self, id: ElementId, p: Point2D) {
        self.refs.push(id);
        self.points.push(p);
    }
}

/// Partition segments by orientation into `(vertical, horizontal)` groups,
/// each segment represented by its point at `param`.
fn split_groups(ids: &[ElementId], segments: &[Segment], param: f64) -> (Group, Group) {
    let (vertical, horizontal) = partition_indices(segments);
    let collect = |idx: Vec<usize>| {
        let mut group = Group::default();
        for i in idx {
            group.push(ids[i], segments[i].point_at(param));
        }
        group
    };
    (collect(vertical), collect(horizontal))
}

fn dimension_group(
    group: &Group,
    pass: Pass,
    offset: Point2D,
    cfg: &DimCfg,
    label: &str,
) -> Result<DimensionRequest, DimError> {
    let extent = reduce(&group.points, pass.primary).map_err(|e| match e {
        DimError::EmptyInput { .. } => DimError::EmptyInput {
            group: label.to_string(),
        },
        other => other,
    })?;
    if extent.is_degenerate() {
        match cfg.degenerate {
            DegeneratePolicy::Reject => {
                return Err(DimError::Degenerate {
                    group: label.to_string(),
                })
            }
            DegeneratePolicy::Allow => {
                debug!(group = label, point = %extent.first, "zero-length dimension line");
            }
        }
    }
    let line = line_for(pass.direction, &extent);
    debug!(
        group = label,
        refs = group.refs.len(),
        start = %line.start,
        end = %line.end,
        "dimension line"
    );
    Ok(DimensionRequest {
        references: group.refs.clone(),
        line,
        offset,
    })
}

/// Plan the two grid dimensions of a view.
///
/// Horizontal grids are measured by a vertical line moved `+grid_offset` in X;
/// vertical grids by a horizontal line moved `-grid_offset` in Y. Each grid is
/// represented by its point at `cfg.grid_param`.
pub fn plan_grids(grids: &[GridLine], cfg: &DimCfg) -> Result<GridPlan, DimError> {
    let (ids, segments): (Vec<_>, Vec<_>) = grids.iter().map(|g| (g.id, g.segment())).unzip();
    let (stacked_in_x, stacked_in_y) = split_groups(&ids, &segments, cfg.grid_param);
    debug!(
        horizontal_grids = stacked_in_y.refs.len(),
        vertical_grids = stacked_in_x.refs.len(),
        "grids classified"
    );
    let vertical = dimension_group(
        &stacked_in_y,
        GRID_VERTICAL,
        Point2D::new(cfg.grid_offset, 0.0),
        cfg,
        "horizontal grids",
    )?;
    let horizontal = dimension_group(
        &stacked_in_x,
        GRID_HORIZONTAL,
        Point2D::new(0.0, -cfg.grid_offset),
        cfg,
        "vertical grids",
    )?;
    Ok(GridPlan {
        vertical,
        horizontal,
    })
}

/// Plan the two dimensions of one room from its outer boundary loop.
///
/// Segments without a bounding element are skipped. Vertical walls are measured
/// by a horizontal line, horizontal walls by a vertical line; no offset.
pub fn plan_room(room: &Room, cfg: &DimCfg) -> Result<RoomPlan, DimError> {
    let label = room.label();
    let outer = room.boundary.first().ok_or_else(|| DimError::Unbounded {
        room: label.clone(),
    })?;
    let (ids, segments): (Vec<_>, Vec<_>) = outer
        .iter()
        .filter_map(|bs| bs.element.map(|id| (id, bs.segment())))
        .unzip();
    let unreferenced = outer.len() - ids.len();
    let (vertical_walls, horizontal_walls) = split_groups(&ids, &segments, cfg.room_param);
    if unreferenced > 0 {
        debug!(room = %label, unreferenced, "skipped boundary segments without element");
    }
    let horizontal = dimension_group(
        &vertical_walls,
        ROOM_ACROSS_VERTICAL,
        Point2D::new(0.0, 0.0),
        cfg,
        &format!("vertical walls of room {label}"),
    )?;
    let vertical = dimension_group(
        &horizontal_walls,
        ROOM_ACROSS_HORIZONTAL,
        Point2D::new(0.0, 0.0),
        cfg,
        &format!("horizontal walls of room {label}"),
    )?;
    Ok(RoomPlan {
        room: room.id,
        vertical,
        horizontal,
    })
}

/// Plan dimensions for every room, two per room.
///
/// Under `RoomErrorPolicy::Abort` the first failing room fails the plan; under
/// `Skip` it is recorded in `Plan::skipped`.
pub fn plan_rooms(rooms: &[Room], cfg: &DimCfg) -> Result<Plan, DimError> {
    let mut plan = Plan::default();
    for room in rooms {
        match plan_room(room, cfg) {
            Ok(rp) => {
                plan.dimensions.push(rp.horizontal);
                plan.dimensions.push(rp.vertical);
            }
            Err(e) => match cfg.on_room_error {
                RoomErrorPolicy::Abort => return Err(e),
                RoomErrorPolicy::Skip => {
                    warn!(room = %room.label(), error = %e, "room skipped");
                    plan.skipped.push(SkippedRoom {
                        room: room.id,
                        reason: e.to_string(),
                    });
                }
            },
        }
    }
    info!(
        rooms = rooms.len(),
        dimensions = plan.count(),
        skipped = plan.skipped.len(),
        "room plan"
    );
    Ok(plan)
}
