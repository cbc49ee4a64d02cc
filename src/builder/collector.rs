//! Artifact collection.
//!
//! After a target builds, the intermediate binary is copied from the
//! toolchain's output layout to the canonical artifact name at the project
//! root. Copying (rather than moving) leaves the incremental cache in
//! `target/` intact, so repeat builds stay warm.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::errors::SlipwayError;
use crate::matrix::TargetSpec;
use crate::util::fs::copy_file;

/// Copy the intermediate binary to `{project_root}/{binary}-{platform}-{arch}{suffix}`.
///
/// Overwrites an existing artifact of the same name (last build wins).
/// Fails with [`SlipwayError::ArtifactMissing`] if the expected intermediate
/// binary is absent despite the toolchain reporting success.
pub fn collect(
    spec: &TargetSpec,
    binary: &str,
    intermediate: &Path,
    project_root: &Path,
) -> Result<PathBuf> {
    if !intermediate.is_file() {
        return Err(SlipwayError::ArtifactMissing {
            path: intermediate.to_path_buf(),
        }
        .into());
    }

    let dest = project_root.join(spec.artifact_name(binary));
    copy_file(intermediate, &dest)?;

    Ok(dest)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::matrix::lookup;
    use tempfile::TempDir;

    fn fake_intermediate(root: &Path, spec: &TargetSpec, binary: &str, content: &str) -> PathBuf {
        let path = spec.release_binary(&root.join("target"), binary);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_collect_copies_to_canonical_name() {
        let tmp = TempDir::new().unwrap();
        let spec = lookup("linux-amd64").unwrap();
        let intermediate = fake_intermediate(tmp.path(), spec, "klog", "elf");

        let dest = collect(spec, "klog", &intermediate, tmp.path()).unwrap();

        assert_eq!(dest, tmp.path().join("klog-linux-amd64"));
        assert_eq!(fs::read_to_string(&dest).unwrap(), "elf");
        // Source survives the copy
        assert!(intermediate.exists());
    }

    #[test]
    fn test_collect_keeps_windows_suffix() {
        let tmp = TempDir::new().unwrap();
        let spec = lookup("windows-amd64").unwrap();
        let intermediate = fake_intermediate(tmp.path(), spec, "klog", "pe");

        let dest = collect(spec, "klog", &intermediate, tmp.path()).unwrap();

        assert_eq!(dest, tmp.path().join("klog-windows-amd64.exe"));
    }

    #[test]
    fn test_collect_overwrites_previous_artifact() {
        let tmp = TempDir::new().unwrap();
        let spec = lookup("linux-amd64").unwrap();
        let intermediate = fake_intermediate(tmp.path(), spec, "klog", "new build");
        fs::write(tmp.path().join("klog-linux-amd64"), "old build").unwrap();

        let dest = collect(spec, "klog", &intermediate, tmp.path()).unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "new build");
    }

    #[test]
    fn test_collect_missing_intermediate() {
        let tmp = TempDir::new().unwrap();
        let spec = lookup("linux-amd64").unwrap();
        let intermediate = spec.release_binary(&tmp.path().join("target"), "klog");

        let err = collect(spec, "klog", &intermediate, tmp.path()).unwrap_err();

        match err.downcast_ref::<SlipwayError>() {
            Some(SlipwayError::ArtifactMissing { path }) => assert_eq!(path, &intermediate),
            other => panic!("expected ArtifactMissing, got {:?}", other),
        }
        assert!(!tmp.path().join("klog-linux-amd64").exists());
    }
}
