//! Implementation of `slipway clean`.

use std::path::PathBuf;

use glob::{glob, Pattern};

use crate::util::config::ReleaseConfig;
use crate::util::context::ProjectContext;
use crate::util::fs::{remove_dir_all_if_exists, remove_file_if_exists};
use crate::util::shell::{Shell, Status};

/// Remove canonical artifacts and the toolchain cache.
///
/// Idempotent: missing artifacts and a missing target directory are the
/// normal case, not errors. Residual I/O problems (e.g. permissions) are
/// surfaced as warnings; clean never fails.
pub fn clean(ctx: &ProjectContext, cfg: &ReleaseConfig, shell: &Shell) {
    for path in artifact_paths(ctx, &cfg.binary_name) {
        match remove_file_if_exists(&path) {
            Ok(()) => shell.status(Status::Removed, path.display()),
            Err(e) => shell.warn(format!("{:#}", e)),
        }
    }

    let target_root = ctx.target_root();
    if target_root.exists() {
        match remove_dir_all_if_exists(target_root) {
            Ok(()) => shell.status(Status::Removed, target_root.display()),
            Err(e) => shell.warn(format!("{:#}", e)),
        }
    }
}

/// Files at the project root matching `{binary}-*`.
///
/// Only plain files match; a directory that happens to share the prefix is
/// never removed. The prefix is matched literally, so glob metacharacters
/// in the project path or the binary name have no effect.
fn artifact_paths(ctx: &ProjectContext, binary: &str) -> Vec<PathBuf> {
    let prefix = ctx.project_root().join(binary);
    let pattern = format!("{}-*", Pattern::escape(&prefix.to_string_lossy()));
    let mut paths = Vec::new();

    match glob(&pattern) {
        Ok(entries) => {
            for entry in entries {
                match entry {
                    Ok(path) if path.is_file() => paths.push(path),
                    Ok(_) => {}
                    Err(e) => tracing::warn!("glob error: {}", e),
                }
            }
        }
        Err(e) => tracing::warn!("invalid artifact pattern {}: {}", pattern, e),
    }

    paths.sort();
    paths
}
