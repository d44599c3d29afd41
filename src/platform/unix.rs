use super::{Platform, PlatformError};
use crate::core::clearer::{ClearingResult, clear_folder};
use crate::log_debug;
use glob::glob;
use std::env;
use std::path::PathBuf;

/// Unix implementation. Elevation means an effective uid of 0; the "recycle bin" is the
/// set of per-user trash directories (freedesktop.org and macOS layouts).
pub struct UnixPlatform {
    home: Option<PathBuf>,
}

impl UnixPlatform {
    pub fn new() -> Self {
        UnixPlatform {
            home: env::var_os("HOME").map(PathBuf::from),
        }
    }

    /// Builds a platform whose trash lookups are rooted at `home`.
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        UnixPlatform {
            home: Some(home.into()),
        }
    }

    /// Trash directories whose contents are emptied, whether or not they exist.
    pub fn trash_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = Vec::new();
        if let Some(home) = &self.home {
            let xdg_trash = home.join(".local").join("share").join("Trash");
            dirs.push(xdg_trash.join("files"));
            dirs.push(xdg_trash.join("info"));
            dirs.push(home.join(".Trash"));
        }

        // Per-volume trashes on macOS keep one folder per uid.
        let uid = unsafe { libc::geteuid() };
        if let Ok(volumes) = glob(&format!("/Volumes/*/.Trashes/{}", uid)) {
            dirs.extend(volumes.flatten());
        }
        dirs
    }
}

impl Default for UnixPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for UnixPlatform {
    fn name(&self) -> &str {
        "Unix"
    }

    fn is_elevated(&self) -> bool {
        unsafe { libc::geteuid() == 0 }
    }

    fn empty_recycle_bin(&self) -> Result<(), PlatformError> {
        let mut total = ClearingResult::default();
        for dir in self.trash_dirs() {
            if !dir.is_dir() {
                log_debug!("No trash at {}", dir.display());
                continue;
            }
            total.merge(clear_folder(&dir, "Trash"));
        }

        match total.skipped() {
            0 => Ok(()),
            skipped => Err(PlatformError::TrashNotEmptied { skipped }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn trash_dirs_cover_xdg_and_macos_layouts() {
        let platform = UnixPlatform::with_home("/home/alice");
        let dirs = platform.trash_dirs();
        assert!(dirs.contains(&PathBuf::from("/home/alice/.local/share/Trash/files")));
        assert!(dirs.contains(&PathBuf::from("/home/alice/.local/share/Trash/info")));
        assert!(dirs.contains(&PathBuf::from("/home/alice/.Trash")));
    }

    #[test]
    fn empty_recycle_bin_clears_xdg_trash() {
        let home = tempfile::tempdir().unwrap();
        let files = home.path().join(".local/share/Trash/files");
        let info = home.path().join(".local/share/Trash/info");
        fs::create_dir_all(files.join("old-project")).unwrap();
        fs::create_dir_all(&info).unwrap();
        fs::write(files.join("report.pdf"), b"pdf").unwrap();
        fs::write(files.join("old-project/main.rs"), b"fn main() {}").unwrap();
        fs::write(info.join("report.pdf.trashinfo"), b"[Trash Info]").unwrap();

        UnixPlatform::with_home(home.path()).empty_recycle_bin().unwrap();

        assert!(files.is_dir());
        assert_eq!(fs::read_dir(&files).unwrap().count(), 0);
        assert_eq!(fs::read_dir(&info).unwrap().count(), 0);
    }

    #[test]
    fn empty_recycle_bin_without_trash_is_ok() {
        let home = tempfile::tempdir().unwrap();
        assert!(UnixPlatform::with_home(home.path()).empty_recycle_bin().is_ok());
    }
}
