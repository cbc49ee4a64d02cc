//! Typed errors for the release pipeline.
//!
//! Every failure mode the orchestrator distinguishes lives in
//! [`SlipwayError`]. Toolchain diagnostics are carried verbatim; nothing is
//! retried or swallowed on the way up.

use std::path::PathBuf;
use std::process::ExitStatus;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum SlipwayError {
    /// Requested target has no matrix entry.
    #[error("unknown target `{name}`")]
    #[diagnostic(code(slipway::matrix::unknown_target))]
    UnknownTarget {
        name: String,
        #[help]
        available: Option<String>,
    },

    /// `cargo install cross` or `rustup target add` exited non-zero.
    ///
    /// Fatal for the affected target; re-running the build is the retry.
    #[error("failed to install `{tool}` ({status})")]
    #[diagnostic(
        code(slipway::toolchain::install_failed),
        help("re-run the same command once the underlying problem is fixed; the install step is idempotent")
    )]
    ToolchainInstallFailed { tool: String, status: ExitStatus },

    /// The toolchain exited non-zero while compiling a target.
    ///
    /// `stderr` holds the toolchain's diagnostic output unmodified.
    #[error("build for `{target}` failed ({status})")]
    #[diagnostic(code(slipway::build::failed))]
    BuildFailed {
        target: String,
        status: ExitStatus,
        stderr: String,
    },

    /// The toolchain reported success but the binary is not where the
    /// release layout says it must be.
    #[error("no build output at `{}`", .path.display())]
    #[diagnostic(
        code(slipway::collect::artifact_missing),
        help("the toolchain reported success but produced no binary there; check that the project's [[bin]] name matches the configured binary name")
    )]
    ArtifactMissing { path: PathBuf },

    /// No `Cargo.toml` between the working directory and the filesystem root.
    #[error("no Cargo.toml found in `{}` or any parent directory", .dir.display())]
    #[diagnostic(
        code(slipway::project::manifest_not_found),
        help("run slipway from inside the Cargo project you want to release")
    )]
    ManifestNotFound { dir: PathBuf },

    /// Binary name could not be resolved from any configured source.
    #[error("could not determine the binary name")]
    #[diagnostic(
        code(slipway::config::missing_binary_name),
        help("set BINARY_NAME, add `binary_name` under [release] in slipway.toml, or declare [package] name in Cargo.toml")
    )]
    MissingBinaryName,
}
