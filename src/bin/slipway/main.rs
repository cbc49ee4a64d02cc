//! Slipway CLI - a target-matrix release builder for Cargo projects

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use slipway::util::shell::{ColorChoice, Shell};

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("slipway=debug")
    } else {
        EnvFilter::new("slipway=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let color = if cli.no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };
    let shell = Shell::new(cli.verbose, color);

    // Execute command
    match cli.command {
        Commands::Build => commands::build::host(&shell),
        Commands::BuildLinuxAmd64 => commands::build::target(&shell, "linux-amd64"),
        Commands::BuildLinuxArm64 => commands::build::target(&shell, "linux-arm64"),
        Commands::BuildMacosAmd64 => commands::build::target(&shell, "macos-amd64"),
        Commands::BuildMacosArm64 => commands::build::target(&shell, "macos-arm64"),
        Commands::BuildWindowsAmd64 => commands::build::target(&shell, "windows-amd64"),
        Commands::BuildAll => commands::build::all(&shell),
        Commands::Clean => commands::clean::execute(&shell),
    }
}
