use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an artifact: the subcommand and its effective parameters.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
}

impl Payload {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self { command, params }
    }
}

/// Provenance document for `outputs`; shared by sidecars and `autodim report`.
#[track_caller]
pub fn document(payload: &Payload, outputs: &[String]) -> Value {
    let callsite = Location::caller();
    json!({
        "code_rev": current_git_rev(),
        "version": autodim::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "command": payload.command,
        "params": payload.params,
        "outputs": outputs
    })
}

/// Write `<artifact stem>.provenance.json` next to `artifact`.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: &Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }
    let doc = document(payload, &[artifact.to_string_lossy().into_owned()]);
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("plan"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return from_env.to_string();
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_replaces_extension() {
        let derived = provenance_path(Path::new("/tmp/out/grids.json"));
        assert_eq!(derived, Path::new("/tmp/out/grids.provenance.json"));
    }

    #[test]
    fn sidecar_records_command_and_output() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("rooms.json");
        fs::write(&artifact, "{}").unwrap();
        let payload = Payload::new("rooms", json!({"room_param": 0.2}));
        let prov_path = write_sidecar(&artifact, &payload).unwrap();
        assert!(prov_path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["command"], "rooms");
        assert_eq!(parsed["params"]["room_param"], 0.2);
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["version"], autodim::VERSION);
    }
}
