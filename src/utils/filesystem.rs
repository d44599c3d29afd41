use crate::{log_debug, log_info};
// Imports the logging macros used to trace each removal.
use std::env;
// Used to read the `SYSCLEAN_SHOW_DETAILS` switch.
use std::fs;
// File system primitives: metadata lookups and the actual deletions.
use std::io;
// `io::Result` is the error channel for every low-level removal.
use std::path::Path;

/// Environment variable that, when set, logs every successfully removed entry.
pub const SHOW_DETAILS_VAR: &str = "SYSCLEAN_SHOW_DETAILS";

/// Returns `true` when the given environment variable is present (any value).
pub fn env_flag(name: &str) -> bool {
    env::var_os(name).is_some()
}

/// Removes a single directory entry: a file, a symbolic link, or a whole directory tree.
///
/// The entry is classified with `symlink_metadata`, so a symbolic link is always
/// removed as a link and its target is never touched. Real directories are removed
/// recursively with `fs::remove_dir_all`.
///
/// # Errors
///
/// Returns the underlying `io::Error` if the entry cannot be inspected or removed
/// (e.g. permission denied, file held open by another process). Unlike a cleanup
/// loop, this function does not swallow anything; callers decide how to count it.
pub fn remove_path(path: &Path) -> io::Result<()> {
    let metadata = fs::symlink_metadata(path)?;
    let file_type = metadata.file_type();

    if file_type.is_dir() {
        // A real directory (never a link to one): recursive delete.
        log_debug!("Path is a directory. Recursively removing: {}", path.display());
        fs::remove_dir_all(path)?;
    } else if is_directory_link(&metadata) {
        // Windows directory symlinks and junctions must be removed as directories,
        // which removes the link only.
        log_debug!("Path is a directory link. Removing link: {}", path.display());
        fs::remove_dir(path)?;
    } else {
        // Regular files, symlinks, and unusual objects (fifos, sockets, devices).
        log_debug!("Path is a file or symlink. Removing: {}", path.display());
        fs::remove_file(path)?;
    }

    if env_flag(SHOW_DETAILS_VAR) {
        log_info!("Successfully removed: {}", path.display());
    }
    Ok(())
}

#[cfg(windows)]
fn is_directory_link(metadata: &fs::Metadata) -> bool {
    use std::os::windows::fs::FileTypeExt;
    metadata.file_type().is_symlink_dir()
}

#[cfg(not(windows))]
fn is_directory_link(_metadata: &fs::Metadata) -> bool {
    // On Unix, unlinking a symlink works the same whatever it points to.
    false
}

/// Converts a byte count into a human-readable string with two decimals.
///
/// Units step by 1024 through B, KB, MB and GB; anything at or beyond 1024 GB is
/// shown in TB.
///
/// ```
/// use sysclean::utils::filesystem::format_size;
/// assert_eq!(format_size(1536), "1.50 KB");
/// assert_eq!(format_size(0), "0.00 B");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    let mut size = bytes as f64;
    for unit in UNITS {
        if size < 1024.0 {
            return format!("{:.2} {}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.2} TB", size)
}
