//! High-level operations.
//!
//! This module contains the implementation of slipway commands.

pub mod clean;
pub mod release;

pub use clean::clean;
pub use release::{release_all, release_host, release_target, Artifact};
