//! Project context for slipway operations.
//!
//! Provides centralized access to the paths a release run touches: the
//! project root (the directory holding `Cargo.toml`), the Cargo target
//! directory used as the toolchain cache, and the artifact root where
//! canonical binaries are deposited.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::errors::SlipwayError;

/// Paths for one release run.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    /// Current working directory
    cwd: PathBuf,

    /// Directory containing the project's Cargo.toml
    project_root: PathBuf,

    /// Cargo target directory (honors CARGO_TARGET_DIR)
    target_root: PathBuf,
}

impl ProjectContext {
    /// Create a context rooted at the nearest enclosing Cargo project.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        Self::with_cwd(cwd)
    }

    /// Create a context with a specific working directory.
    pub fn with_cwd(cwd: PathBuf) -> Result<Self> {
        let project_root = find_project_root(&cwd)?;
        let target_root = resolve_target_root(&project_root, std::env::var_os("CARGO_TARGET_DIR"));

        Ok(ProjectContext {
            cwd,
            project_root,
            target_root,
        })
    }

    /// Replace the Cargo target directory.
    pub fn with_target_root(mut self, target_root: PathBuf) -> Self {
        self.target_root = target_root;
        self
    }

    /// Get the current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Get the project root (where Cargo.toml lives).
    ///
    /// Canonical artifacts are deposited directly in this directory.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the project manifest path.
    pub fn manifest_path(&self) -> PathBuf {
        self.project_root.join("Cargo.toml")
    }

    /// Get the optional slipway config file path.
    pub fn config_path(&self) -> PathBuf {
        self.project_root.join("slipway.toml")
    }

    /// Get the Cargo target directory.
    pub fn target_root(&self) -> &Path {
        &self.target_root
    }
}

/// Find the directory containing `Cargo.toml`, searching upward from `start`.
fn find_project_root(start: &Path) -> Result<PathBuf, SlipwayError> {
    let mut current = start.to_path_buf();
    loop {
        if current.join("Cargo.toml").is_file() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(SlipwayError::ManifestNotFound {
                dir: start.to_path_buf(),
            });
        }
    }
}

/// Resolve the Cargo target directory.
///
/// A relative CARGO_TARGET_DIR is interpreted against the project root,
/// which is also where build commands run.
fn resolve_target_root(project_root: &Path, env_override: Option<std::ffi::OsString>) -> PathBuf {
    match env_override {
        Some(dir) => {
            let dir = PathBuf::from(dir);
            if dir.is_absolute() {
                dir
            } else {
                project_root.join(dir)
            }
        }
        None => project_root.join("target"),
    }
}
