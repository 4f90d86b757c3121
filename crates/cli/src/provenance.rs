//! Provenance sidecars for written listings.
//!
//! A sidecar sits next to the listing as `<stem>.provenance.json` and records
//! the catalog source, selection, cap, seed/index and how many products were
//! listed. A sampled listing is regenerated by rerunning `show` with the same
//! seed and index.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Parameters of a written listing.
pub struct Payload {
    pub params: Value,
    pub listed: usize,
    pub tag: Option<String>,
}

impl Payload {
    pub fn new(params: Value, listed: usize) -> Self {
        Self {
            params,
            listed,
            tag: None,
        }
    }
}

/// Write the sidecar for `listing` and return its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(listing: P, payload: Payload) -> Result<PathBuf> {
    let listing = listing.as_ref();
    let path = sidecar_path(listing);
    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "version": techcore::VERSION,
        "written_by": format!("{}:{}", callsite.file(), callsite.line()),
        "tag": payload.tag,
        "params": payload.params,
        "listed": payload.listed,
        "listing": listing.to_string_lossy()
    });
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing sidecar {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(listing: &Path) -> PathBuf {
    let stem = listing
        .file_stem()
        .map_or_else(|| "listing".into(), |s| s.to_string_lossy());
    listing.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    let non_empty = |s: String| (!s.is_empty()).then_some(s);
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .and_then(non_empty)
        .or_else(|| std::env::var("GIT_COMMIT").ok().and_then(non_empty))
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            if !out.status.success() {
                return None;
            }
            String::from_utf8(out.stdout).ok().map(|s| s.trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_the_listing() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/listings/notebooks.json")),
            Path::new("/tmp/listings/notebooks.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("mouse")),
            Path::new("mouse.provenance.json")
        );
    }

    #[test]
    fn sidecar_records_params_count_and_tag() {
        let dir = tempdir().unwrap();
        let listing = dir.path().join("todos.json");
        fs::write(&listing, "{}").unwrap();
        let mut payload = Payload::new(json!({"category": "TODOS", "seed": 42, "index": 0}), 8);
        payload.tag = Some("weekly".into());
        let path = write_sidecar(&listing, payload).unwrap();
        assert_eq!(path, dir.path().join("todos.provenance.json"));
        let doc: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(doc["listing"], &*listing.to_string_lossy());
        assert_eq!(doc["params"]["seed"], 42);
        assert_eq!(doc["listed"], 8);
        assert_eq!(doc["tag"], "weekly");
        assert!(doc["written_by"].as_str().unwrap().contains("provenance.rs"));
    }

    #[test]
    fn git_rev_is_never_empty() {
        assert!(!current_git_rev().is_empty());
    }
}
