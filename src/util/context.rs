//! Global context for gate operations.
//!
//! Provides centralized access to the working directory, configuration
//! paths and project file discovery.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use thiserror::Error;

use crate::core::PROJECT_FILE_NAME;

/// Project-local configuration directory name.
pub const PROJECT_CONFIG_DIR: &str = ".platform-gate";

/// Project directories for the platform gate
static PROJECT_DIRS: LazyLock<Option<ProjectDirs>> =
    LazyLock::new(|| ProjectDirs::from("com", "platform-gate", "platform-gate"));

/// Error locating a project file.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error(
        "could not find `{}` in `{}` or any parent directory",
        PROJECT_FILE_NAME,
        .dir.display()
    )]
    NotFound { dir: PathBuf },
}

/// Global context containing configuration and paths.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Current working directory
    cwd: PathBuf,

    /// Directory holding the global config file
    config_dir: PathBuf,
}

impl GlobalContext {
    /// Create a new GlobalContext for the current directory.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        Ok(Self::with_cwd(cwd))
    }

    /// Create a GlobalContext with a specific working directory.
    pub fn with_cwd(cwd: PathBuf) -> Self {
        let config_dir = PROJECT_DIRS
            .as_ref()
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(PROJECT_CONFIG_DIR));

        GlobalContext { cwd, config_dir }
    }

    /// Get the current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Get the global configuration file path.
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Get the project-local configuration file path.
    pub fn project_config_path(&self) -> PathBuf {
        self.cwd.join(PROJECT_CONFIG_DIR).join("config.toml")
    }

    /// Find `Project.toml` starting from cwd and searching upward.
    pub fn find_manifest(&self) -> Result<PathBuf, ManifestError> {
        let mut current = self.cwd.clone();
        loop {
            let candidate = current.join(PROJECT_FILE_NAME);
            if candidate.is_file() {
                return Ok(candidate);
            }
            if !current.pop() {
                return Err(ManifestError::NotFound {
                    dir: self.cwd.clone(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_manifest_in_cwd() {
        let tmp = TempDir::new().unwrap();
        let manifest = tmp.path().join(PROJECT_FILE_NAME);
        std::fs::write(&manifest, "[project]\n").unwrap();

        let ctx = GlobalContext::with_cwd(tmp.path().to_path_buf());
        assert_eq!(ctx.find_manifest().ok(), Some(manifest));
    }

    #[test]
    fn test_find_manifest_in_parent() {
        let tmp = TempDir::new().unwrap();
        let manifest = tmp.path().join(PROJECT_FILE_NAME);
        std::fs::write(&manifest, "[project]\n").unwrap();
        let nested = tmp.path().join("src").join("Views");
        std::fs::create_dir_all(&nested).unwrap();

        let ctx = GlobalContext::with_cwd(nested);
        assert_eq!(ctx.find_manifest().ok(), Some(manifest));
    }

    #[test]
    fn test_project_config_path() {
        let tmp = TempDir::new().unwrap();
        let ctx = GlobalContext::with_cwd(tmp.path().to_path_buf());
        assert_eq!(
            ctx.project_config_path(),
            tmp.path().join(".platform-gate").join("config.toml")
        );
        assert!(ctx.config_path().ends_with("config.toml"));
    }
}
