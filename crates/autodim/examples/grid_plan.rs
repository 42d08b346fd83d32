//! Print the grid and room plan for a few sampled layouts.
//!
//! Usage:
//!   cargo run -p autodim --example grid_plan -- 4 3
//!
//! Arguments are the number of columns and rows (defaults 4 and 3).

use autodim::dimension::{plan_grids, plan_rooms, DimCfg};
use autodim::layout::{sample_model, LayoutCfg, ReplayToken};

fn main() {
    let mut args = std::env::args().skip(1);
    let columns = args.next().and_then(|s| s.parse().ok()).unwrap_or(4);
    let rows = args.next().and_then(|s| s.parse().ok()).unwrap_or(3);
    let cfg = LayoutCfg {
        columns,
        rows,
        ..LayoutCfg::default()
    };
    let dim = DimCfg::default();
    for i in 0..3 {
        let model = match sample_model(cfg, ReplayToken { seed: 2025, index: i }) {
            Ok(m) => m,
            Err(e) => {
                eprintln!("usage: grid_plan [columns] [rows]: {e}");
                return;
            }
        };
        match plan_grids(&model.grids, &dim) {
            Ok(gp) => println!(
                "sample {i}: vertical {} -> {} ({} refs), horizontal {} -> {} ({} refs)",
                gp.vertical.line.start,
                gp.vertical.line.end,
                gp.vertical.references.len(),
                gp.horizontal.line.start,
                gp.horizontal.line.end,
                gp.horizontal.references.len(),
            ),
            Err(e) => println!("sample {i}: grids: {e}"),
        }
        match plan_rooms(&model.rooms, &dim) {
            Ok(p) => println!("sample {i}: rooms={} dimensions={}", model.rooms.len(), p.count()),
            Err(e) => println!("sample {i}: rooms: {e}"),
        }
    }
}
