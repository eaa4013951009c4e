//! Loading and lookup of per-repository path annotations.
//!
//! The annotation source is a YAML document mapping repository identifiers to
//! sub-maps of path-key → comment. Only the sub-map for the requested
//! repository is kept; a missing repository identifier is not an error and
//! yields an empty map.

use crate::error::AnnotreeError;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Comments keyed by path, for a single repository.
pub type AnnotationMap = HashMap<String, String>;

/// Reads the annotation document at `path` and selects the sub-map for
/// `repo`.
///
/// An empty or whitespace-only document is treated as an empty mapping.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid
/// two-level string mapping.
pub fn load_annotations(path: &Path, repo: &str) -> Result<AnnotationMap, AnnotreeError> {
    let raw = fs::read_to_string(path).map_err(|e| AnnotreeError::io(path, e))?;
    if raw.trim().is_empty() {
        return Ok(AnnotationMap::new());
    }
    let mut all: HashMap<String, AnnotationMap> =
        serde_yaml::from_str(&raw).map_err(|e| AnnotreeError::annotations(path, e))?;
    Ok(all.remove(repo).unwrap_or_default())
}

/// Resolves the annotation for a path key, trying the exact key, the key
/// with a trailing separator appended, and the key with any trailing
/// separators stripped. The first match wins.
pub fn lookup<'a>(annotations: &'a AnnotationMap, path_key: &str) -> Option<&'a str> {
    annotations
        .get(path_key)
        .or_else(|| annotations.get(&format!("{path_key}/")))
        .or_else(|| annotations.get(path_key.trim_end_matches('/')))
        .map(String::as_str)
}
