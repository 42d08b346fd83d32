//! JSON file plumbing: model in, config in, plan/model out.

use anyhow::{Context, Result};
use autodim::{DimCfg, Model};
use serde::Serialize;
use std::fs;
use std::path::Path;

pub fn load_model(path: &Path) -> Result<Model> {
    let bytes = fs::read(path).with_context(|| format!("reading model {}", path.display()))?;
    let model: Model = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing model {}", path.display()))?;
    model
        .validate()
        .with_context(|| format!("validating model {}", path.display()))?;
    tracing::debug!(
        grids = model.grids.len(),
        rooms = model.rooms.len(),
        "model loaded"
    );
    Ok(model)
}

/// Config file if given, defaults otherwise. Missing fields take defaults.
pub fn load_cfg(path: Option<&Path>) -> Result<DimCfg> {
    let Some(path) = path else {
        return Ok(DimCfg::default());
    };
    let bytes = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing config {}", path.display()))
}

/// Pretty-print `value` to `path`, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}
