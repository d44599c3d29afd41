//! Empties a directory while tolerating per-entry failures.

use crate::utils::filesystem::remove_path; // Single-entry delete (file, link or tree).
use crate::{log_debug, log_info, log_warn};
use std::{
    fs, // Directory enumeration.
    io::{self, ErrorKind}, // Removal results and their classification.
    path::Path,
};

/// What happened to a single direct child of a cleared directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOutcome {
    Deleted,
    /// Removal was refused by the OS (access denied, file locked by another process).
    SkippedPermission,
    SkippedOther,
    /// The entry disappeared between listing and removal (another process cleaned it up).
    /// It is neither a deletion nor a skip and is not counted.
    Vanished,
}

impl ItemOutcome {
    /// Classifies the result of one removal attempt.
    ///
    /// # Arguments
    /// * `result` - What the removal primitive returned for the entry.
    ///
    /// # Returns
    /// `Deleted` on success, `Vanished` for `NotFound`, `SkippedPermission` for
    /// `PermissionDenied`, and `SkippedOther` for every other error.
    pub fn from_removal(result: &io::Result<()>) -> Self {
        match result {
            Ok(()) => ItemOutcome::Deleted,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => ItemOutcome::Vanished,
                ErrorKind::PermissionDenied => ItemOutcome::SkippedPermission,
                _ => ItemOutcome::SkippedOther,
            },
        }
    }
}

/// Aggregated outcome of clearing one directory.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClearingResult {
    pub deleted: usize, // Entries removed by this run.
    pub skipped_permission: usize, // Entries the OS refused to remove.
    pub skipped_other: usize, // Entries that failed for any other reason.
}

impl ClearingResult {
    /// Adds one entry's outcome to the counters. `Vanished` entries are ignored.
    pub fn record(&mut self, outcome: ItemOutcome) {
        match outcome {
            ItemOutcome::Deleted => self.deleted += 1,
            ItemOutcome::SkippedPermission => self.skipped_permission += 1,
            ItemOutcome::SkippedOther => self.skipped_other += 1,
            ItemOutcome::Vanished => {}
        }
    }

    /// Total entries that could not be removed, whatever the reason.
    pub fn skipped(&self) -> usize {
        self.skipped_permission + self.skipped_other
    }

    pub fn merge(&mut self, other: ClearingResult) {
        self.deleted += other.deleted;
        self.skipped_permission += other.skipped_permission;
        self.skipped_other += other.skipped_other;
    }
}

/// Deletes every direct entry inside `path`, keeping `path` itself.
///
/// Files and symlinks are unlinked, subdirectories are removed recursively. A failure
/// on one entry is counted and the remaining entries are still processed.
///
/// # Arguments
/// * `path` - The directory to empty. It may not exist.
/// * `label` - Display name used only in log output (e.g. "Temp").
///
/// # Returns
/// A `ClearingResult` with the deleted and skipped counts. A missing or unlistable
/// `path` is logged and yields `ClearingResult::default()`.
pub fn clear_folder(path: &Path, label: &str) -> ClearingResult {
    clear_folder_with(path, label, remove_path)
}

/// Same as [`clear_folder`], with the per-entry removal primitive supplied by the caller.
///
/// # Arguments
/// * `path` - The directory to empty.
/// * `label` - Display name used only in log output.
/// * `remove` - Called once per direct child; its `io::Result` decides the `ItemOutcome`.
pub fn clear_folder_with<F>(path: &Path, label: &str, mut remove: F) -> ClearingResult
where
    F: FnMut(&Path) -> io::Result<()>,
{
    let mut result = ClearingResult::default();

    // A missing folder is not an error: there is simply nothing to clear.
    if !path.exists() {
        log_warn!(
            "{} folder not found: {}",
            label.bright_yellow(),
            path.display().to_string().bright_white()
        );
        return result;
    }

    log_info!(
        "🧹 Cleaning {}: {}",
        label.bright_green(),
        path.display().to_string().bright_white()
    );

    // Exists but cannot be listed (not a directory, access denied): report and move on.
    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(err) => {
            log_warn!("❌ Could not read {}: {}", path.display(), err);
            return result;
        }
    };

    // Direct children only; each removal is independent of its siblings.
    for entry in entries {
        let child = match entry {
            Ok(entry) => entry.path(),
            Err(err) => {
                log_debug!("Unreadable entry in {}: {}", path.display(), err);
                result.record(ItemOutcome::SkippedOther);
                continue;
            }
        };

        let removal = remove(&child);
        let outcome = ItemOutcome::from_removal(&removal);
        if let Err(err) = &removal {
            log_debug!("{:?} {}: {}", outcome, child.display(), err);
        }
        result.record(outcome);
    }

    log_info!("    ✔ Deleted: {} items", result.deleted.to_string().bright_green());
    if result.skipped() > 0 {
        log_warn!(
            "    Skipped (in use): {} items",
            result.skipped().to_string().bright_yellow()
        );
    }
    result
}
