//! The release target matrix.
//!
//! Every platform/architecture pair slipway can produce a binary for is
//! declared here, together with its compiler triple, the toolchain that
//! builds it, and the executable suffix it carries. The matrix is closed:
//! targets are not discovered at runtime and the set never changes between
//! invocations.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::errors::SlipwayError;

/// Operating system of a release target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    Macos,
    Windows,
}

impl Platform {
    /// Get the platform name as used in artifact file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::Macos => "macos",
            Platform::Windows => "windows",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CPU architecture of a release target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    Amd64,
    Arm64,
}

impl Arch {
    /// Get the architecture name as used in artifact file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Arch::Amd64 => "amd64",
            Arch::Arm64 => "arm64",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a target gets built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolchainKind {
    /// The local `cargo`, with the target's stdlib added via rustup.
    Native,
    /// The containerized `cross` tool.
    Cross,
}

/// One entry of the release matrix.
///
/// A `TargetSpec` is pure data; everything downstream (the build command,
/// the intermediate output location, the canonical artifact name) is
/// derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSpec {
    pub platform: Platform,
    pub arch: Arch,
    /// Compiler target triple, e.g. `x86_64-unknown-linux-gnu`.
    pub triple: &'static str,
    pub toolchain: ToolchainKind,
    /// Executable suffix, `".exe"` on windows and empty elsewhere.
    pub suffix: &'static str,
}

impl TargetSpec {
    /// Canonical target name, e.g. `linux-amd64`.
    pub fn name(&self) -> String {
        format!("{}-{}", self.platform, self.arch)
    }

    /// Canonical artifact file name for a given binary,
    /// e.g. `klog-linux-amd64` or `klog-windows-amd64.exe`.
    pub fn artifact_name(&self, binary: &str) -> String {
        format!("{}-{}-{}{}", binary, self.platform, self.arch, self.suffix)
    }

    /// Where the toolchain deposits the release binary for this target.
    pub fn release_binary(&self, target_root: &Path, binary: &str) -> PathBuf {
        target_root
            .join(self.triple)
            .join("release")
            .join(format!("{}{}", binary, self.suffix))
    }
}

impl fmt::Display for TargetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.platform, self.arch)
    }
}

/// The fixed release matrix, in build order.
///
/// Windows uses the gnu ABI triple: it is the only windows flavor the
/// containerized toolchain can produce from a non-Windows host.
static MATRIX: [TargetSpec; 5] = [
    TargetSpec {
        platform: Platform::Linux,
        arch: Arch::Amd64,
        triple: "x86_64-unknown-linux-gnu",
        toolchain: ToolchainKind::Cross,
        suffix: "",
    },
    TargetSpec {
        platform: Platform::Linux,
        arch: Arch::Arm64,
        triple: "aarch64-unknown-linux-gnu",
        toolchain: ToolchainKind::Cross,
        suffix: "",
    },
    TargetSpec {
        platform: Platform::Macos,
        arch: Arch::Amd64,
        triple: "x86_64-apple-darwin",
        toolchain: ToolchainKind::Native,
        suffix: "",
    },
    TargetSpec {
        platform: Platform::Macos,
        arch: Arch::Arm64,
        triple: "aarch64-apple-darwin",
        toolchain: ToolchainKind::Native,
        suffix: "",
    },
    TargetSpec {
        platform: Platform::Windows,
        arch: Arch::Amd64,
        triple: "x86_64-pc-windows-gnu",
        toolchain: ToolchainKind::Cross,
        suffix: ".exe",
    },
];

/// All supported targets, in build order.
pub fn targets() -> &'static [TargetSpec] {
    &MATRIX
}

/// Resolve an accepted alias to its canonical target name.
///
/// The `intel`/`m1` spellings and bare `windows` come from an older naming
/// scheme; they are accepted on lookup but never used in artifact names.
fn canonical_name(name: &str) -> &str {
    match name {
        "macos-intel" => "macos-amd64",
        "macos-m1" => "macos-arm64",
        "windows" => "windows-amd64",
        other => other,
    }
}

/// Look up a target by canonical name or alias.
pub fn lookup(name: &str) -> Result<&'static TargetSpec, SlipwayError> {
    let canonical = canonical_name(name);
    targets()
        .iter()
        .find(|spec| spec.name() == canonical)
        .ok_or_else(|| SlipwayError::UnknownTarget {
            name: name.to_string(),
            available: Some(format!(
                "available targets: {}",
                targets()
                    .iter()
                    .map(|spec| spec.name())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        })
}
