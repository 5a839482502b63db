//! Data-kind-keyed cache under ~/.campus.
//!
//! Each kind (courses, grades, mooc, dorm-<id>) lives in its own JSON file
//! with the fetch timestamp alongside the data. The interactive commands
//! and any widget-style consumer re-read these files independently; there
//! is no shared in-memory state.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub fn campus_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".campus"))
}

pub fn ensure_campus_home() -> Result<PathBuf> {
    let dir = campus_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

/// A cached dataset plus when it was last imported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    pub fetched_at: DateTime<Utc>,
    pub data: T,
}

fn cache_path(kind: &str) -> Result<PathBuf> {
    Ok(ensure_campus_home()?.join(format!("{kind}.json")))
}

pub fn write_cache<T: Serialize>(kind: &str, data: &T) -> Result<()> {
    let entry = CacheEntry {
        fetched_at: Utc::now(),
        data,
    };
    let p = cache_path(kind)?;
    let json = serde_json::to_string_pretty(&entry)?;
    fs::write(&p, json).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

/// `None` when the kind has never been imported.
pub fn read_cache<T: DeserializeOwned>(kind: &str) -> Result<Option<CacheEntry<T>>> {
    let p = cache_path(kind)?;
    if !p.exists() {
        return Ok(None);
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    let entry = serde_json::from_str(&s).with_context(|| format!("parse {}", p.display()))?;
    Ok(Some(entry))
}

/// Dorm ids with a cached meter history (from dorm-<id>.json files).
pub fn cached_dorm_ids() -> Result<Vec<String>> {
    let dir = ensure_campus_home()?;
    let mut ids = Vec::new();
    for entry in fs::read_dir(&dir).with_context(|| format!("list {}", dir.display()))? {
        let name = entry?.file_name();
        let name = name.to_string_lossy();
        if let Some(id) = name.strip_prefix("dorm-").and_then(|s| s.strip_suffix(".json")) {
            ids.push(id.to_string());
        }
    }
    ids.sort();
    Ok(ids)
}

pub fn dorm_kind(dorm: &str) -> String {
    format!("dorm-{dorm}")
}
