//! Planner configuration.
//!
//! Defaults reproduce the two commands as shipped; the CLI may load a JSON
//! file with any subset of fields and override single fields from flags.

use serde::{Deserialize, Serialize};

/// What to do with a group whose extent collapses to one point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Emit the zero-length line; the host decides.
    #[default]
    Allow,
    /// Fail with `DimError::Degenerate`.
    Reject,
}

/// What the room planner does when one room cannot be dimensioned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomErrorPolicy {
    /// Fail the whole plan.
    #[default]
    Abort,
    /// Record the room in `Plan::skipped` and continue.
    Skip,
}

/// Dimension planner configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DimCfg {
    /// Normalized parameter of the representative point on a grid line.
    pub grid_param: f64,
    /// Normalized parameter of the representative point on a boundary segment.
    pub room_param: f64,
    /// Distance grid dimensions are moved off the grid ends.
    pub grid_offset: f64,
    pub degenerate: DegeneratePolicy,
    pub on_room_error: RoomErrorPolicy,
}

impl Default for DimCfg {
    fn default() -> Self {
        Self {
            grid_param: 1.0,
            room_param: 0.2,
            grid_offset: 3.0,
            degenerate: DegeneratePolicy::Allow,
            on_room_error: RoomErrorPolicy::Abort,
        }
    }
}
