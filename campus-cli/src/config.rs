use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::cache::ensure_campus_home;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub campus: CampusSection,
    pub semester: SemesterSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampusSection {
    /// IANA timezone the class timetable is published in.
    pub timezone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemesterSection {
    /// Sunday of week 1.
    pub start: NaiveDate,
    pub week_count: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            campus: CampusSection {
                timezone: "Asia/Shanghai".to_string(),
            },
            semester: SemesterSection {
                // Updated by `campus init` each term; this is the fall term anchor.
                start: NaiveDate::from_ymd_opt(2025, 9, 7).expect("valid default date"),
                week_count: campus_core::SEMESTER_WEEKS,
            },
        }
    }
}

impl Config {
    pub fn semester_context(&self) -> campus_core::SemesterContext {
        campus_core::SemesterContext::new(self.semester.start)
            .with_week_count(self.semester.week_count)
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_campus_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(toml::from_str(&s).context("parse config.toml")?)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config(start: Option<NaiveDate>) -> Result<()> {
    let p = config_path()?;
    if p.exists() && start.is_none() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let mut cfg = if p.exists() { load_config()? } else { Config::default() };
    if let Some(start) = start {
        cfg.semester.start = start;
    }
    save_config(&cfg)?;
    println!("Wrote {}", p.display());
    Ok(())
}
