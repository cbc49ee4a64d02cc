//! Release configuration for slipway.
//!
//! The binary name and version feeding artifact naming resolve through
//! three layers, highest precedence first:
//!
//! 1. Environment: `BINARY_NAME`, `VERSION`
//! 2. Project file: `[release]` in `slipway.toml` next to `Cargo.toml`
//! 3. Project manifest: `[package]` name/version from `Cargo.toml`
//!
//! The binary name must resolve through one of the layers; the version
//! falls back to `0.0.0` since it is only shown in status output today.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::errors::SlipwayError;
use crate::util::context::ProjectContext;
use crate::util::fs::read_to_string;

/// Default version when no layer provides one.
const FALLBACK_VERSION: &str = "0.0.0";

/// Project configuration file (`slipway.toml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Release settings
    pub release: ReleaseSettings,
}

/// Settings under `[release]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseSettings {
    /// Artifact base name (overrides the manifest package name)
    pub binary_name: Option<String>,

    /// Release version (overrides the manifest package version)
    pub version: Option<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = read_to_string(path)?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }
}

/// The `[package]` section of the project's Cargo.toml, reduced to what
/// release naming needs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ManifestPackage {
    pub name: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    package: ManifestPackage,
}

/// Read the `[package]` section from a Cargo.toml.
///
/// A manifest without a `[package]` section (a plain workspace root) yields
/// empty fields rather than an error; the caller decides whether that is
/// fatal.
pub fn read_manifest_package(path: &Path) -> Result<ManifestPackage> {
    let contents = read_to_string(path)?;

    let manifest: Manifest = toml::from_str(&contents)
        .with_context(|| format!("failed to parse manifest: {}", path.display()))?;

    Ok(manifest.package)
}

/// Fully resolved release inputs.
#[derive(Debug, Clone)]
pub struct ReleaseConfig {
    /// Artifact base name
    pub binary_name: String,

    /// Release version, shown in status output
    pub version: String,
}

impl ReleaseConfig {
    /// Resolve the release configuration for a project.
    pub fn resolve(ctx: &ProjectContext) -> Result<Self> {
        let file = Config::load_or_default(&ctx.config_path());
        let package = read_manifest_package(&ctx.manifest_path())?;

        let resolved = Self::from_parts(
            std::env::var("BINARY_NAME").ok(),
            std::env::var("VERSION").ok(),
            &file,
            &package,
        )?;

        tracing::debug!(
            "resolved release config: binary_name={} version={}",
            resolved.binary_name,
            resolved.version
        );

        Ok(resolved)
    }

    /// Combine the three layers, highest precedence first.
    pub fn from_parts(
        env_binary_name: Option<String>,
        env_version: Option<String>,
        file: &Config,
        package: &ManifestPackage,
    ) -> Result<Self, SlipwayError> {
        let binary_name = env_binary_name
            .or_else(|| file.release.binary_name.clone())
            .or_else(|| package.name.clone())
            .ok_or(SlipwayError::MissingBinaryName)?;

        let version = env_version
            .or_else(|| file.release.version.clone())
            .or_else(|| package.version.clone())
            .unwrap_or_else(|| FALLBACK_VERSION.to_string());

        Ok(ReleaseConfig {
            binary_name,
            version,
        })
    }
}
