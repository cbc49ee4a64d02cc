//! The release build pipeline.
//!
//! A target flows through three stages: the toolchain selector maps its
//! matrix entry to a build command, the executor runs that command against
//! the project, and the collector copies the resulting binary to its
//! canonical artifact name.

pub mod collector;
pub mod executor;
pub mod toolchain;

pub use collector::collect;
pub use executor::execute;
pub use toolchain::{build_command, ensure_toolchain, host_build_command, CommandSpec};
