//! `slipway build*` commands

use anyhow::Result;

use slipway::matrix;
use slipway::ops;
use slipway::util::config::ReleaseConfig;
use slipway::util::shell::Shell;
use slipway::util::ProjectContext;

/// Build for the host machine, without artifact collection.
pub fn host(shell: &Shell) -> Result<()> {
    let ctx = ProjectContext::new()?;
    let cfg = ReleaseConfig::resolve(&ctx)?;

    ops::release_host(&ctx, &cfg, shell)
}

/// Build one matrix target and collect its artifact.
pub fn target(shell: &Shell, name: &str) -> Result<()> {
    let ctx = ProjectContext::new()?;
    let cfg = ReleaseConfig::resolve(&ctx)?;
    let spec = matrix::lookup(name)?;

    let artifact = ops::release_target(&ctx, &cfg, spec, shell)?;
    artifact.report(shell);
    Ok(())
}

/// Build the whole matrix, continuing past per-target failures.
pub fn all(shell: &Shell) -> Result<()> {
    let ctx = ProjectContext::new()?;
    let cfg = ReleaseConfig::resolve(&ctx)?;

    ops::release_all(&ctx, &cfg, shell)?;
    Ok(())
}
