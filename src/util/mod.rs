//! Shared utilities

pub mod config;
pub mod context;
pub mod fs;
pub mod process;
pub mod shell;

pub use config::ReleaseConfig;
pub use context::ProjectContext;
pub use shell::Shell;
