use super::{SystemPaths, Target};
use std::path::PathBuf;

/// The boot/launch acceleration cache. Owned by the system, so it is only
/// touched from an elevated process.
pub struct BootCache;

// Windows Prefetch; on Unix, the readahead pack directory.
#[cfg(windows)]
const RELATIVE_PATH: &[&str] = &["Prefetch"];
#[cfg(not(windows))]
const RELATIVE_PATH: &[&str] = &["lib", "readahead"];

impl Target for BootCache {
    fn label(&self) -> &str {
        if cfg!(windows) { "Prefetch" } else { "Boot Cache" }
    }

    fn locate(&self, paths: &SystemPaths) -> PathBuf {
        RELATIVE_PATH
            .iter()
            .fold(paths.system_root.clone(), |path, part| path.join(part))
    }

    fn requires_elevation(&self) -> bool {
        true
    }
}
