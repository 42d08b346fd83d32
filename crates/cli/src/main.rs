use anyhow::Result;
use autodim::api::{grid_dimensions, room_dimensions};
use autodim::dimension::{DimCfg, RoomErrorPolicy};
use autodim::layout::{sample_model, LayoutCfg, ReplayToken};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod files;
mod provenance;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "autodim")]
#[command(about = "Plan grid and room dimensions from a model export")]
struct Cmd {
    /// JSON planner config; flags below override its fields
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Dimension the grid lines of a view
    Grids {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Distance the dimensions are moved off the grid ends
        #[arg(long)]
        offset: Option<f64>,
        /// Normalized parameter of the point taken on each grid line
        #[arg(long)]
        param: Option<f64>,
    },
    /// Dimension the boundary walls of every room
    Rooms {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Normalized parameter of the point taken on each boundary segment
        #[arg(long)]
        param: Option<f64>,
        /// Skip rooms that cannot be dimensioned instead of failing
        #[arg(long)]
        skip_failed: bool,
    },
    /// Write a synthetic model export (rectilinear grid, one room per bay)
    Sample {
        #[arg(long, default_value_t = 4)]
        columns: usize,
        #[arg(long, default_value_t = 3)]
        rows: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
    let cmd = Cmd::parse();
    let cfg = effective_cfg(&cmd.action, files::load_cfg(cmd.config.as_deref())?);
    match cmd.action {
        Action::Grids { input, out, .. } => grids(&input, &out, cfg),
        Action::Rooms { input, out, .. } => rooms(&input, &out, cfg),
        Action::Sample {
            columns,
            rows,
            seed,
            out,
        } => sample(columns, rows, seed, &out),
        Action::Report => report(),
    }
}

/// Apply the subcommand's flags on top of the file (or default) config.
fn effective_cfg(action: &Action, cfg: DimCfg) -> DimCfg {
    match *action {
        Action::Grids { offset, param, .. } => DimCfg {
            grid_offset: offset.unwrap_or(cfg.grid_offset),
            grid_param: param.unwrap_or(cfg.grid_param),
            ..cfg
        },
        Action::Rooms {
            param, skip_failed, ..
        } => DimCfg {
            room_param: param.unwrap_or(cfg.room_param),
            on_room_error: if skip_failed {
                RoomErrorPolicy::Skip
            } else {
                cfg.on_room_error
            },
            ..cfg
        },
        Action::Sample { .. } | Action::Report => cfg,
    }
}

fn grids(input: &Path, out: &Path, cfg: DimCfg) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), "grids");
    let model = files::load_model(input)?;
    let plan = grid_dimensions(&model, &cfg)?;
    files::write_json(out, &plan)?;
    write_sidecar(
        out,
        &Payload::new(
            "grids",
            json!({ "input": input.to_string_lossy(), "cfg": cfg, "dimensions": plan.count() }),
        ),
    )?;
    tracing::info!(dimensions = plan.count(), "inserted grid dimensions");
    Ok(())
}

fn rooms(input: &Path, out: &Path, cfg: DimCfg) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), "rooms");
    let model = files::load_model(input)?;
    let plan = room_dimensions(&model, &cfg)?;
    files::write_json(out, &plan)?;
    write_sidecar(
        out,
        &Payload::new(
            "rooms",
            json!({
                "input": input.to_string_lossy(),
                "cfg": cfg,
                "dimensions": plan.count(),
                "skipped": plan.skipped.len()
            }),
        ),
    )?;
    tracing::info!(
        dimensions = plan.count(),
        skipped = plan.skipped.len(),
        "inserted room dimensions"
    );
    Ok(())
}

fn sample(columns: usize, rows: usize, seed: u64, out: &Path) -> Result<()> {
    tracing::info!(columns, rows, seed, out = %out.display(), "sample");
    let cfg = LayoutCfg {
        columns,
        rows,
        ..LayoutCfg::default()
    };
    let model = sample_model(cfg, ReplayToken { seed, index: 0 })?;
    files::write_json(out, &model)?;
    write_sidecar(
        out,
        &Payload::new("sample", json!({ "columns": columns, "rows": rows, "seed": seed })),
    )?;
    Ok(())
}

fn report() -> Result<()> {
    let doc = provenance::document(&Payload::new("report", json!({})), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
