//! `slipway clean` command
//!
//! Clean always exits 0: an unusable project setup means there is nothing
//! to clean, which is reported as a warning rather than a failure.

use anyhow::Result;

use slipway::ops;
use slipway::util::config::ReleaseConfig;
use slipway::util::shell::Shell;
use slipway::util::ProjectContext;

pub fn execute(shell: &Shell) -> Result<()> {
    let ctx = match ProjectContext::new() {
        Ok(ctx) => ctx,
        Err(e) => {
            shell.warn(format!("nothing to clean: {:#}", e));
            return Ok(());
        }
    };

    let cfg = match ReleaseConfig::resolve(&ctx) {
        Ok(cfg) => cfg,
        Err(e) => {
            shell.warn(format!("nothing to clean: {:#}", e));
            return Ok(());
        }
    };

    ops::clean(&ctx, &cfg, shell);
    Ok(())
}
