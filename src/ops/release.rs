//! Implementation of the release build commands.
//!
//! Each target runs through the same pipeline: make sure the toolchain is
//! available, run the build to completion, collect the binary under its
//! canonical artifact name. Targets are isolated units of work; when the
//! whole matrix is built, one target's failure never stops the rest from
//! being attempted.

use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::builder::{collector, executor, toolchain};
use crate::matrix::{self, TargetSpec};
use crate::util::config::ReleaseConfig;
use crate::util::context::ProjectContext;
use crate::util::shell::{Shell, Status};

/// A produced release artifact.
#[derive(Debug, Clone)]
pub struct Artifact {
    /// Matrix entry the artifact was built for
    pub target: &'static TargetSpec,

    /// Canonical path at the project root
    pub path: PathBuf,
}

impl Artifact {
    /// Print the `Finished` line for this artifact.
    pub fn report(&self, shell: &Shell) {
        shell.status(
            Status::Finished,
            format!("`{}` -> {}", self.target.name(), self.path.display()),
        );
    }
}

/// Build one matrix target and collect its artifact.
///
/// Reporting the produced artifact is left to the caller.
pub fn release_target(
    ctx: &ProjectContext,
    cfg: &ReleaseConfig,
    spec: &'static TargetSpec,
    shell: &Shell,
) -> Result<Artifact> {
    shell.status(
        Status::Building,
        format!(
            "{} v{} for {} ({})",
            cfg.binary_name,
            cfg.version,
            spec.name(),
            spec.triple
        ),
    );

    toolchain::ensure_toolchain(spec, shell)?;

    let cmd = toolchain::build_command(spec, ctx.target_root());
    executor::execute(shell, &cmd, ctx.project_root(), &spec.name())?;

    let intermediate = spec.release_binary(ctx.target_root(), &cfg.binary_name);
    let path = collector::collect(spec, &cfg.binary_name, &intermediate, ctx.project_root())?;

    Ok(Artifact { target: spec, path })
}

/// Build for the host machine.
///
/// No cross target and no artifact collection; the binary stays in the
/// project-standard `target/release/` location.
pub fn release_host(ctx: &ProjectContext, cfg: &ReleaseConfig, shell: &Shell) -> Result<()> {
    shell.status(
        Status::Building,
        format!("{} v{} for the host machine", cfg.binary_name, cfg.version),
    );

    let cmd = toolchain::host_build_command(ctx.target_root());
    executor::execute(shell, &cmd, ctx.project_root(), "host")?;

    shell.status(
        Status::Finished,
        format!(
            "`{}` -> {}",
            cfg.binary_name,
            ctx.target_root().join("release").display()
        ),
    );

    Ok(())
}

/// Build every matrix target in sequence.
///
/// Failed targets are reported as they happen; the operation exits non-zero
/// at the end if any target failed, after every target has been attempted.
pub fn release_all(
    ctx: &ProjectContext,
    cfg: &ReleaseConfig,
    shell: &Shell,
) -> Result<Vec<Artifact>> {
    let mut artifacts = Vec::new();
    let mut failed: Vec<String> = Vec::new();

    for spec in matrix::targets() {
        match release_target(ctx, cfg, spec, shell) {
            Ok(artifact) => {
                artifact.report(shell);
                artifacts.push(artifact);
            }
            Err(e) => {
                shell.error(format!("{:#}", e));
                failed.push(spec.name());
            }
        }
    }

    if !failed.is_empty() {
        bail!(
            "{} of {} targets failed: {}",
            failed.len(),
            matrix::targets().len(),
            failed.join(", ")
        );
    }

    Ok(artifacts)
}
