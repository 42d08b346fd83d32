//! Error type shared by the reducer and the planners.

use thiserror::Error;

/// Failures of extent reduction and dimension planning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DimError {
    /// A group had no points to reduce.
    #[error("no points to dimension in {group}")]
    EmptyInput { group: String },

    /// All points of a group coincide; only raised under `DegeneratePolicy::Reject`.
    #[error("degenerate extent in {group}: all points coincide")]
    Degenerate { group: String },

    /// A room exported without any boundary loop.
    #[error("room {room} has no boundary loop")]
    Unbounded { room: String },

    /// NaN or infinite coordinate in the model.
    #[error("non-finite coordinate in {what}")]
    NonFinite { what: String },
}
