//! CLI definitions using clap.

use clap::{Parser, Subcommand};

/// Slipway - a target-matrix release builder for Cargo projects
#[derive(Parser)]
#[command(name = "slipway")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// One subcommand per matrix entry, plus the host build, the aggregate
/// build, and cleanup.
#[derive(Subcommand)]
pub enum Commands {
    /// Build a release binary for the host machine
    Build,

    /// Build the linux amd64 release binary (via cross)
    BuildLinuxAmd64,

    /// Build the linux arm64 release binary (via cross)
    BuildLinuxArm64,

    /// Build the macOS amd64 release binary (Intel)
    #[command(alias = "build-macos-intel")]
    BuildMacosAmd64,

    /// Build the macOS arm64 release binary (Apple Silicon)
    #[command(alias = "build-macos-m1")]
    BuildMacosArm64,

    /// Build the windows amd64 release binary (via cross)
    #[command(alias = "build-windows")]
    BuildWindowsAmd64,

    /// Build every release target in sequence
    BuildAll,

    /// Remove release artifacts and build state
    Clean,
}
