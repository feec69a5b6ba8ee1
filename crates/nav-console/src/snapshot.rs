//! Loading snapshots and settings from disk

use anyhow::{Context, Result};
use log::info;
use nav_tree::{BuildOptions, GroupRecord, TreeCommand};
use navs::{ListResult, NavRecord};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A data-source dump: either a bare array or one list page
#[derive(Deserialize)]
#[serde(untagged)]
enum Snapshot<T> {
    Items(Vec<T>),
    Page(ListResult<T>),
}

impl<T> Snapshot<T> {
    fn into_items(self) -> Vec<T> {
        match self {
            Snapshot::Items(items) => items,
            Snapshot::Page(page) => page.items,
        }
    }
}

/// Read and parse a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Load the records of a snapshot, whichever shape it has
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let records = read_json::<Snapshot<T>>(path)?.into_items();
    info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

pub fn load_groups(path: &Path) -> Result<Vec<GroupRecord>> {
    load_records(path)
}

pub fn load_navs(path: &Path) -> Result<Vec<NavRecord>> {
    load_records(path)
}

/// Load a JSON array of edit commands
pub fn load_commands(path: &Path) -> Result<Vec<TreeCommand>> {
    read_json(path)
}

/// Load build options, falling back to defaults when no file is given
pub fn load_options(path: Option<&Path>) -> Result<BuildOptions> {
    match path {
        Some(path) => read_json(path).context("Invalid build options"),
        None => Ok(BuildOptions::default()),
    }
}
