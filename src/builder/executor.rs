//! Blocking execution of one toolchain invocation.
//!
//! The executor is the single process boundary of the release pipeline. It
//! runs the resolved build command to completion with captured output, then
//! replays that output verbatim, so the user sees exactly what the
//! toolchain said whether the build succeeded or not.

use std::io::{self, Write};
use std::path::Path;
use std::process::Output;

use anyhow::{Context, Result};

use crate::builder::toolchain::CommandSpec;
use crate::errors::SlipwayError;
use crate::util::shell::Shell;

/// Run one build command in `cwd` to completion.
///
/// `target` labels the invocation in failures (a matrix name or `host`).
/// A non-zero exit becomes [`SlipwayError::BuildFailed`] carrying the
/// toolchain's stderr unmodified. No retries, no timeout; a hung toolchain
/// blocks until killed externally.
pub fn execute(shell: &Shell, cmd: &CommandSpec, cwd: &Path, target: &str) -> Result<Output> {
    let pb = cmd.process().cwd(cwd);
    tracing::debug!("running `{}`", pb.display_command());

    let spinner = shell.spinner(pb.display_command());
    let output = pb.exec();
    spinner.finish_and_clear();

    let output = output?;
    replay(&output)?;

    if !output.status.success() {
        return Err(SlipwayError::BuildFailed {
            target: target.to_string(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
        .into());
    }

    Ok(output)
}

/// Replay captured toolchain output on our own streams, byte for byte.
fn replay(output: &Output) -> Result<()> {
    io::stdout()
        .write_all(&output.stdout)
        .context("failed to write toolchain stdout")?;
    io::stderr()
        .write_all(&output.stderr)
        .context("failed to write toolchain stderr")?;
    Ok(())
}
