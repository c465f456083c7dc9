//! Fixture loading and management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::HarnessError;

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Library operation being exercised (`render`, `to_fixed_width`, ...).
    pub operation: String,
    /// Operation inputs; the shape depends on `operation`.
    pub inputs: serde_json::Value,
    /// Expected output, compared as a string.
    pub expected_output: String,
}

/// A collection of fixture cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Family name (free-form grouping).
    pub family: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}

/// Load `path` as one fixture file, or every `*.json` file in it (sorted) if
/// it is a directory.
///
/// Directory entries that fail to load are reported to `on_skip` and left
/// out. Ending up with no fixture sets is an error.
pub fn load_fixture_sets(
    path: &Path,
    mut on_skip: impl FnMut(&Path, &HarnessError),
) -> Result<Vec<FixtureSet>, HarnessError> {
    if path.is_file() {
        return Ok(vec![FixtureSet::from_file(path)?]);
    }
    let mut fixture_paths: Vec<PathBuf> = std::fs::read_dir(path)?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    fixture_paths.sort();

    let mut sets = Vec::new();
    for fixture_path in fixture_paths {
        match FixtureSet::from_file(&fixture_path) {
            Ok(set) => sets.push(set),
            Err(err) => on_skip(&fixture_path, &err),
        }
    }
    if sets.is_empty() {
        return Err(HarnessError::NoFixtures(path.to_path_buf()));
    }
    Ok(sets)
}
