//! Slipway - a target-matrix release builder for Cargo projects.
//!
//! This crate provides the core library functionality for slipway: the
//! fixed target matrix, per-target toolchain selection (native cargo vs.
//! the containerized `cross` tool), blocking build execution, and artifact
//! collection under canonical `{binary}-{platform}-{arch}` names.

pub mod builder;
pub mod errors;
pub mod matrix;
pub mod ops;
pub mod util;

pub use errors::SlipwayError;
pub use matrix::{lookup, targets, TargetSpec};
pub use util::context::ProjectContext;
