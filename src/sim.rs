//! Enumeration of simulation output directories.
//!
//! A run directory contains one sub-directory per simulation, each named
//! with a five digit counter followed by a `BQ` suffix (e.g.
//! `sweep_00001.BQ`). Each of those holds an inner `NNNNN.BQ/` directory
//! numbered by sorted position.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;

static SIM_DIR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(.*\d{5}.BQ)").expect("simulation directory pattern is valid")
});

/// True if `name` looks like a simulation directory name.
pub fn is_simulation_name(name: &str) -> bool {
    SIM_DIR_RE.is_match(name)
}

/// List matching entries of `bin_dir`, sorted case-insensitively, with the
/// i-th (1-based) entry suffixed by `/{i:05}.BQ/`.
pub fn list_simulation_directories(bin_dir: impl AsRef<Path>) -> Result<Vec<String>> {
    let bin_dir = bin_dir.as_ref();
    let mut names = Vec::new();
    for entry in std::fs::read_dir(bin_dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_simulation_name(&name) {
            names.push(name);
        }
    }

    names.sort_by_key(|n| n.to_lowercase());

    let listed: Vec<String> = names
        .into_iter()
        .enumerate()
        .map(|(i, name)| format!("{}/{:05}.BQ/", name, i + 1))
        .collect();

    tracing::debug!(dir = %bin_dir.display(), count = listed.len(), "listed simulation directories");
    Ok(listed)
}

/// Same listing as [`list_simulation_directories`], joined onto `bin_dir`.
pub fn simulation_paths(bin_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let bin_dir = bin_dir.as_ref();
    Ok(list_simulation_directories(bin_dir)?
        .into_iter()
        .map(|rel| bin_dir.join(rel))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_dirs(root: &Path, names: &[&str]) {
        for n in names {
            std::fs::create_dir(root.join(n)).unwrap();
        }
    }

    #[test]
    fn test_pattern() {
        assert!(is_simulation_name("run00001.BQ"));
        assert!(is_simulation_name("sweep_12345.BQ"));
        assert!(is_simulation_name("x12345xBQ")); // `.` matches any char
        assert!(is_simulation_name("a00001.BQ.bak"));
        assert!(!is_simulation_name("run0001.BQ"));
        assert!(!is_simulation_name("run00001.bq"));
        assert!(!is_simulation_name("notes.txt"));
    }

    #[test]
    fn test_list_sorted_and_numbered() {
        let tmp = TempDir::new().unwrap();
        make_dirs(tmp.path(), &["b00002.BQ", "A00001.BQ", "c00003.BQ", "logs"]);
        std::fs::write(tmp.path().join("readme.txt"), b"").unwrap();

        let listed = list_simulation_directories(tmp.path()).unwrap();
        assert_eq!(
            listed,
            vec![
                "A00001.BQ/00001.BQ/".to_string(),
                "b00002.BQ/00002.BQ/".to_string(),
                "c00003.BQ/00003.BQ/".to_string(),
            ]
        );
    }

    #[test]
    fn test_list_empty_dir() {
        let tmp = TempDir::new().unwrap();
        assert!(list_simulation_directories(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_dir_propagates() {
        let tmp = TempDir::new().unwrap();
        let err = list_simulation_directories(tmp.path().join("nope")).unwrap_err();
        assert!(matches!(err, crate::error::VphysError::Io(_)));
    }

    #[test]
    fn test_simulation_paths_joined() {
        let tmp = TempDir::new().unwrap();
        make_dirs(tmp.path(), &["r00001.BQ"]);
        let paths = simulation_paths(tmp.path()).unwrap();
        assert_eq!(paths, vec![tmp.path().join("r00001.BQ/00001.BQ/")]);
    }
}
