//! Test utilities for unit tests.
//!
//! Only compiled for `cfg(test)`.

pub mod fixtures;

use std::path::{Path, PathBuf};

use crate::core::PROJECT_FILE_NAME;

/// Write a `Project.toml` into `dir/name/` and return its path.
pub fn write_project(dir: &Path, name: &str, manifest: &str) -> PathBuf {
    let project_dir = dir.join(name);
    std::fs::create_dir_all(&project_dir).unwrap();
    let path = project_dir.join(PROJECT_FILE_NAME);
    std::fs::write(&path, manifest).unwrap();
    path
}
