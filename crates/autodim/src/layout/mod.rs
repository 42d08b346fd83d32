//! Synthetic rectilinear layouts (grids + one room per bay).
//!
//! Model
//! - Column and row positions are cumulative sums of spacings drawn uniformly
//!   from `[spacing_min, spacing_max]`.
//! - Grid lines overrun the outer bays by `overrun` at both ends.
//! - Every bay becomes a rectangular room with a counter-clockwise outer loop.
//!   Walls shared by neighbouring bays carry the same element id. A wall edge is
//!   replaced by a separation line (no element) with probability
//!   `separation_ratio`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `dimension::{Model, GridLine, Room, BoundarySegment}`

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::dimension::{BoundarySegment, ElementId, GridLine, Model, Room};
use crate::geom2::Point2D;

/// Id bases for generated elements.
const GRID_ID_BASE: i64 = 1;
const VWALL_ID_BASE: i64 = 10_000;
const HWALL_ID_BASE: i64 = 20_000;
const ROOM_ID_BASE: i64 = 30_000;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("invalid layout parameters: {0}")]
    Invalid(&'static str),
}

/// Layout sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct LayoutCfg {
    /// Number of vertical grid lines (>= 1).
    pub columns: usize,
    /// Number of horizontal grid lines (>= 1).
    pub rows: usize,
    pub spacing_min: f64,
    pub spacing_max: f64,
    /// Grid extension beyond the outermost bays.
    pub overrun: f64,
    /// Probability in [0, 1] that a room edge has no bounding element.
    pub separation_ratio: f64,
}

impl Default for LayoutCfg {
    fn default() -> Self {
        Self {
            columns: 4,
            rows: 3,
            spacing_min: 6.0,
            spacing_max: 9.0,
            overrun: 2.0,
            separation_ratio: 0.0,
        }
    }
}

impl LayoutCfg {
    fn validate(&self) -> Result<(), LayoutError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(LayoutError::Invalid("need at least one column and one row"));
        }
        if !(self.spacing_min.is_finite() && self.spacing_max.is_finite()) {
            return Err(LayoutError::Invalid("spacing bounds must be finite"));
        }
        if self.spacing_min <= 0.0 {
            return Err(LayoutError::Invalid("spacing_min must be > 0"));
        }
        if self.spacing_min > self.spacing_max {
            return Err(LayoutError::Invalid("spacing_min <= spacing_max required"));
        }
        if !(self.overrun.is_finite() && self.overrun >= 0.0) {
            return Err(LayoutError::Invalid("overrun must be finite and >= 0"));
        }
        if !(0.0..=1.0).contains(&self.separation_ratio) {
            return Err(LayoutError::Invalid("separation_ratio must lie in [0, 1]"));
        }
        Ok(())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

fn positions<R: Rng>(rng: &mut R, n: usize, cfg: &LayoutCfg) -> Vec<f64> {
    let mut out = Vec::with_capacity(n);
    let mut at = 0.0;
    for k in 0..n {
        if k > 0 {
            at += if cfg.spacing_min < cfg.spacing_max {
                rng.gen_range(cfg.spacing_min..=cfg.spacing_max)
            } else {
                cfg.spacing_min
            };
        }
        out.push(at);
    }
    out
}

/// Draw a layout for `tok`.
pub fn sample_model(cfg: LayoutCfg, tok: ReplayToken) -> Result<Model, LayoutError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let xs = positions(&mut rng, cfg.columns, &cfg);
    let ys = positions(&mut rng, cfg.rows, &cfg);
    let (x0, x1) = (xs[0] - cfg.overrun, xs[xs.len() - 1] + cfg.overrun);
    let (y0, y1) = (ys[0] - cfg.overrun, ys[ys.len() - 1] + cfg.overrun);

    let mut grids = Vec::with_capacity(cfg.columns + cfg.rows);
    for (i, &x) in xs.iter().enumerate() {
        grids.push(GridLine {
            id: ElementId(GRID_ID_BASE + i as i64),
            name: column_name(i),
            start: Point2D::new(x, y0),
            end: Point2D::new(x, y1),
        });
    }
    for (j, &y) in ys.iter().enumerate() {
        grids.push(GridLine {
            id: ElementId(GRID_ID_BASE + (cfg.columns + j) as i64),
            name: (j + 1).to_string(),
            start: Point2D::new(x0, y),
            end: Point2D::new(x1, y),
        });
    }

    let cols = cfg.columns as i64;
    let rows = cfg.rows as i64;
    let vwall = |i: usize, j: usize| ElementId(VWALL_ID_BASE + i as i64 * rows + j as i64);
    let hwall = |i: usize, j: usize| ElementId(HWALL_ID_BASE + j as i64 * cols + i as i64);

    let mut rooms = Vec::new();
    for j in 0..cfg.rows.saturating_sub(1) {
        for i in 0..cfg.columns.saturating_sub(1) {
            let (l, r, b, t) = (xs[i], xs[i + 1], ys[j], ys[j + 1]);
            let corners = [
                Point2D::new(l, b),
                Point2D::new(r, b),
                Point2D::new(r, t),
                Point2D::new(l, t),
            ];
            let ids = [hwall(i, j), vwall(i + 1, j), hwall(i, j + 1), vwall(i, j)];
            let mut outer = Vec::with_capacity(4);
            for k in 0..4 {
                let separated = cfg.separation_ratio > 0.0 && rng.gen_bool(cfg.separation_ratio);
                outer.push(BoundarySegment {
                    element: (!separated).then_some(ids[k]),
                    start: corners[k],
                    end: corners[(k + 1) % 4],
                });
            }
            let idx = j * (cfg.columns - 1) + i;
            rooms.push(Room {
                id: ElementId(ROOM_ID_BASE + idx as i64),
                name: format!("Room {}{}", column_name(i), j + 1),
                boundary: vec![outer],
            });
        }
    }
    Ok(Model { grids, rooms })
}

/// Spreadsheet-style column label: A, B, .., Z, AA, AB, ..
fn column_name(mut i: usize) -> String {
    let mut s = Vec::new();
    loop {
        s.push(b'A' + (i % 26) as u8);
        if i < 26 {
            break;
        }
        i = i / 26 - 1;
    }
    s.reverse();
    String::from_utf8_lossy(&s).into_owned()
}
