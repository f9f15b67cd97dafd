//! Common test utilities and helpers

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The canonical sample roster shipped with the tests.
pub fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("cohort_data.txt")
}

/// A roster file written into a fresh temporary directory. The directory
/// lives as long as this value.
pub struct TempRoster {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl TempRoster {
    pub fn new(content: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("roster.txt");
        fs::write(&path, content).expect("Failed to write roster file");
        Self { dir, path }
    }

    pub fn from_lines(lines: &[&str]) -> Self {
        let mut content = lines.join("\n");
        content.push('\n');
        Self::new(&content)
    }
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
