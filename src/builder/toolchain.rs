//! Toolchain selection for release targets.
//!
//! Maps a matrix entry to the build mechanism that produces it: the local
//! `cargo` (after an idempotent `rustup target add`) for natively buildable
//! targets, or the containerized `cross` tool for everything else.
//!
//! The mapping splits into a pure half that constructs [`CommandSpec`]s and
//! an effectful half, [`ensure_toolchain`], that makes the mechanism
//! available before a build runs.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::errors::SlipwayError;
use crate::matrix::{TargetSpec, ToolchainKind};
use crate::util::process::{find_executable, ProcessBuilder};
use crate::util::shell::{Shell, Status};

/// A resolved toolchain invocation, as pure data.
///
/// Nothing runs until it is turned into a process, so tests can inspect
/// the full invocation without touching a toolchain.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub program: PathBuf,
    pub args: Vec<String>,
    /// Environment overrides applied on top of the inherited environment.
    pub env: Vec<(String, String)>,
}

impl CommandSpec {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        CommandSpec {
            program: program.into(),
            args: Vec::new(),
            env: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(|a| a.into()));
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Convert into a runnable process.
    pub fn process(&self) -> ProcessBuilder {
        let mut pb = ProcessBuilder::new(&self.program).args(self.args.clone());
        for (key, value) in &self.env {
            pb = pb.env(key.as_str(), value.as_str());
        }
        pb
    }
}

/// Build command for one matrix target.
///
/// Native targets go through `cargo`; cross targets go through `cross`,
/// which mirrors cargo's CLI and output layout. `CARGO_TARGET_DIR` is
/// pinned to `target_root` so the toolchain's output layout always matches
/// where the collector will look, whatever the ambient environment says.
pub fn build_command(spec: &TargetSpec, target_root: &Path) -> CommandSpec {
    let program = match spec.toolchain {
        ToolchainKind::Native => "cargo",
        ToolchainKind::Cross => "cross",
    };

    CommandSpec::new(program)
        .args(["build", "--release", "--target", spec.triple])
        .env("CARGO_TARGET_DIR", target_root.to_string_lossy())
}

/// Build command for the host machine, without a `--target`.
///
/// The binary lands in the `release/` directory under `target_root` and is
/// not collected into a canonical artifact.
pub fn host_build_command(target_root: &Path) -> CommandSpec {
    CommandSpec::new("cargo")
        .args(["build", "--release"])
        .env("CARGO_TARGET_DIR", target_root.to_string_lossy())
}

/// Make the toolchain for a target available, installing it if needed.
///
/// Both paths are idempotent, so this runs before every affected build
/// rather than once per process:
///
/// - native: `rustup target add {triple}` (a no-op when already added)
/// - cross: install `cross` via `cargo install cross` when absent from PATH
///
/// Install output streams through to the user; a non-zero exit is fatal for
/// the target being built.
pub fn ensure_toolchain(spec: &TargetSpec, shell: &Shell) -> Result<()> {
    match spec.toolchain {
        ToolchainKind::Native => ensure_rustup_target(spec),
        ToolchainKind::Cross => ensure_cross(shell),
    }
}

fn ensure_rustup_target(spec: &TargetSpec) -> Result<()> {
    let pb = ProcessBuilder::new("rustup").args(["target", "add", spec.triple]);
    tracing::debug!("running `{}`", pb.display_command());

    let status = pb.status()?;
    if !status.success() {
        return Err(SlipwayError::ToolchainInstallFailed {
            tool: spec.triple.to_string(),
            status,
        }
        .into());
    }

    Ok(())
}

fn ensure_cross(shell: &Shell) -> Result<()> {
    if find_executable("cross").is_some() {
        return Ok(());
    }

    shell.status(Status::Installing, "cross (containerized cross-compiler)");

    let pb = ProcessBuilder::new("cargo").args(["install", "cross"]);
    tracing::debug!("running `{}`", pb.display_command());

    let status = pb.status()?;
    if !status.success() {
        return Err(SlipwayError::ToolchainInstallFailed {
            tool: "cross".to_string(),
            status,
        }
        .into());
    }

    Ok(())
}
