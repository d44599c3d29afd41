//! Best-effort size accounting for cleanup targets.

use super::targets::TargetDirectory;
use crate::log_debug;
use crate::platform::Privilege;
use std::path::Path;
use walkdir::WalkDir;

/// Returns the total size in bytes of every regular file under `path`.
///
/// Symbolic links are never followed: a link contributes 0 bytes and linked
/// directories are not descended into, so nothing is counted twice and cycles
/// are impossible. A missing `path` measures 0. Entries that vanish or cannot be
/// read mid-walk are skipped and contribute 0.
///
/// # Arguments
/// * `path` - The directory (or single file) to measure. It may not exist.
///
/// # Returns
/// The summed logical size (`metadata.len()`) of all regular files, in bytes.
pub fn folder_size(path: &Path) -> u64 {
    // Nothing there, nothing to count.
    if !path.exists() {
        log_debug!("Nothing to measure at {}", path.display());
        return 0;
    }

    WalkDir::new(path)
        .follow_links(false) // Links are reported as links, never resolved.
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                log_debug!("Skipping unreadable entry while measuring: {}", err);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file()) // Directories and links carry no bytes.
        .filter_map(|entry| entry.metadata().ok()) // Vanished mid-walk: counts as 0.
        .map(|metadata| metadata.len())
        .sum()
}

/// Measured size of one target before cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeEntry {
    pub label: String,
    pub bytes: u64,
    /// `true` when the target was not measured because it needs elevation.
    pub requires_elevation: bool,
}

/// Sizes of all targets, in target order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeReport {
    pub entries: Vec<SizeEntry>,
}

impl SizeReport {
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.bytes).sum()
    }
}

/// Measures every target. Targets the given privilege does not permit are
/// reported as 0 bytes without being read.
///
/// # Arguments
/// * `targets` - The resolved cleanup locations, in processing order.
/// * `privilege` - The elevation state captured once at the start of the run.
///
/// # Returns
/// A `SizeReport` with one entry per target, in the same order.
pub fn measure_targets(targets: &[TargetDirectory], privilege: Privilege) -> SizeReport {
    let entries = targets
        .iter()
        .map(|target| {
            let permitted = privilege.permits(target.requires_elevation);
            SizeEntry {
                label: target.label.clone(),
                bytes: if permitted { folder_size(&target.path) } else { 0 },
                requires_elevation: !permitted,
            }
        })
        .collect();

    SizeReport { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_folder_measures_zero() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(folder_size(&dir.path().join("does-not-exist")), 0);
    }

    #[test]
    fn sums_file_sizes() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a"), vec![0u8; 100]).unwrap();
        fs::write(dir.path().join("b"), vec![0u8; 200]).unwrap();
        fs::write(dir.path().join("c"), vec![0u8; 300]).unwrap();

        assert_eq!(folder_size(dir.path()), 600);
    }

    #[test]
    fn descends_into_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        let deep = dir.path().join("x").join("y");
        fs::create_dir_all(&deep).unwrap();
        fs::write(dir.path().join("top"), vec![0u8; 10]).unwrap();
        fs::write(deep.join("bottom"), vec![0u8; 32]).unwrap();

        assert_eq!(folder_size(dir.path()), 42);
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_not_followed() {
        let outside = tempfile::tempdir().unwrap();
        fs::write(outside.path().join("big"), vec![0u8; 4096]).unwrap();

        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("own"), vec![0u8; 8]).unwrap();
        std::os::unix::fs::symlink(outside.path(), dir.path().join("dir-link")).unwrap();
        std::os::unix::fs::symlink(outside.path().join("big"), dir.path().join("file-link"))
            .unwrap();
        // A cycle back to the root must not hang the walk.
        std::os::unix::fs::symlink(dir.path(), dir.path().join("loop")).unwrap();

        assert_eq!(folder_size(dir.path()), 8);
    }

    #[test]
    fn privileged_target_is_not_measured_without_elevation() {
        let open = tempfile::tempdir().unwrap();
        let guarded = tempfile::tempdir().unwrap();
        fs::write(open.path().join("f"), vec![0u8; 5]).unwrap();
        fs::write(guarded.path().join("f"), vec![0u8; 7]).unwrap();
        let targets = vec![
            TargetDirectory::new(open.path(), "Temp", false),
            TargetDirectory::new(guarded.path(), "Prefetch", true),
        ];

        let standard = measure_targets(&targets, Privilege::Standard);
        assert_eq!(standard.entries[0].bytes, 5);
        assert_eq!(standard.entries[1].bytes, 0);
        assert!(standard.entries[1].requires_elevation);
        assert_eq!(standard.total(), 5);

        let elevated = measure_targets(&targets, Privilege::Elevated);
        assert_eq!(elevated.entries[1].bytes, 7);
        assert!(!elevated.entries[1].requires_elevation);
        assert_eq!(elevated.total(), 12);
    }
}
