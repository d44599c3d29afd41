use crate::log_debug;
use std::{
    env,
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

/// Environment variables naming the system root, checked in order.
#[cfg(windows)]
pub const SYSTEM_ROOT_VARS: &[&str] = &["WINDIR", "SystemRoot"];
#[cfg(not(windows))]
pub const SYSTEM_ROOT_VARS: &[&str] = &["SYSCLEAN_SYSTEM_ROOT"];

/// Fallback system root when none of `SYSTEM_ROOT_VARS` is set.
#[cfg(windows)]
pub const DEFAULT_SYSTEM_ROOT: &str = r"C:\Windows";
#[cfg(not(windows))]
pub const DEFAULT_SYSTEM_ROOT: &str = "/var";

/// Environment-derived base locations from which every target is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemPaths {
    pub user_temp: PathBuf,
    pub system_root: PathBuf,
}

impl SystemPaths {
    /// Reads the current process environment.
    pub fn discover() -> Self {
        Self::from_lookup(env::temp_dir(), |name| env::var_os(name))
    }

    /// Resolves the system root through `lookup`; the first non-empty variable in
    /// `SYSTEM_ROOT_VARS` wins, otherwise `DEFAULT_SYSTEM_ROOT` is used.
    pub fn from_lookup<F>(user_temp: PathBuf, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let system_root = SYSTEM_ROOT_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SYSTEM_ROOT));

        SystemPaths {
            user_temp,
            system_root,
        }
    }
}

/// A kind of location this tool knows how to clear.
pub trait Target {
    /// Human-readable label, used only for reporting.
    fn label(&self) -> &str;

    /// Where this location lives on the current host.
    fn locate(&self, paths: &SystemPaths) -> PathBuf;

    /// Whether touching this location needs an elevated process.
    fn requires_elevation(&self) -> bool {
        false
    }
}

/// A concrete directory to measure and clear during one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDirectory {
    pub path: PathBuf,
    pub label: String,
    pub requires_elevation: bool,
}

impl TargetDirectory {
    pub fn new(
        path: impl Into<PathBuf>,
        label: impl Into<String>,
        requires_elevation: bool,
    ) -> Self {
        TargetDirectory {
            path: path.into(),
            label: label.into(),
            requires_elevation,
        }
    }

    fn from_target(target: &dyn Target, paths: &SystemPaths) -> Self {
        TargetDirectory::new(target.locate(paths), target.label(), target.requires_elevation())
    }
}

/// Resolves the cleanup locations, in the order they are processed.
///
/// Locations that point at the same directory (e.g. `%TEMP%` set to `C:\Windows\Temp`,
/// or `TMPDIR=/var/tmp`) are merged into one so they are measured and cleared once.
/// The first label is kept, and the merged entry requires elevation if any of its
/// sources did.
///
/// # Arguments
/// * `paths` - The environment-derived base locations.
///
/// # Returns
/// One `TargetDirectory` per distinct directory, at most three.
pub fn resolve_targets(paths: &SystemPaths) -> Vec<TargetDirectory> {
    let targets: Vec<Box<dyn Target>> = vec![
        Box::new(UserTemp),
        Box::new(SystemTemp),
        Box::new(BootCache),
    ];

    let mut resolved: Vec<(PathBuf, TargetDirectory)> = Vec::new();
    for target in &targets {
        let directory = TargetDirectory::from_target(target.as_ref(), paths);
        let identity = canonical_or_raw(&directory.path);

        // Same directory as an earlier target: fold it in instead of visiting it twice.
        if let Some((_, first)) = resolved.iter_mut().find(|(seen, _)| *seen == identity) {
            log_debug!(
                "{} resolves to the same folder as {} ({}); merging",
                directory.label,
                first.label,
                identity.display()
            );
            first.requires_elevation |= directory.requires_elevation;
            continue;
        }
        resolved.push((identity, directory));
    }

    resolved.into_iter().map(|(_, directory)| directory).collect()
}

// Missing directories cannot be canonicalized; compare them as written.
fn canonical_or_raw(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

pub mod boot_cache;
pub use self::boot_cache::BootCache;
pub mod system_temp;
pub use self::system_temp::SystemTemp;
pub mod user_temp;
pub use self::user_temp::UserTemp;

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
        let vars: Vec<(String, String)> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| {
            vars.iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| OsString::from(v))
        }
    }

    #[test]
    fn falls_back_to_default_root() {
        let paths = SystemPaths::from_lookup(PathBuf::from("/tmp/user"), lookup_from(&[]));
        assert_eq!(paths.system_root, PathBuf::from(DEFAULT_SYSTEM_ROOT));
        assert_eq!(paths.user_temp, PathBuf::from("/tmp/user"));
    }

    #[test]
    fn first_root_variable_wins() {
        let first = SYSTEM_ROOT_VARS[0];
        let paths =
            SystemPaths::from_lookup(PathBuf::from("t"), lookup_from(&[(first, "/custom/root")]));
        assert_eq!(paths.system_root, PathBuf::from("/custom/root"));
    }

    #[test]
    fn empty_root_variable_is_ignored() {
        let first = SYSTEM_ROOT_VARS[0];
        let paths = SystemPaths::from_lookup(PathBuf::from("t"), lookup_from(&[(first, "")]));
        assert_eq!(paths.system_root, PathBuf::from(DEFAULT_SYSTEM_ROOT));
    }

    #[cfg(windows)]
    #[test]
    fn windir_takes_precedence_over_systemroot() {
        let paths = SystemPaths::from_lookup(
            PathBuf::from("t"),
            lookup_from(&[("SystemRoot", r"D:\Other"), ("WINDIR", r"D:\Win")]),
        );
        assert_eq!(paths.system_root, PathBuf::from(r"D:\Win"));
    }

    #[test]
    fn resolves_three_targets_with_only_boot_cache_privileged() {
        let paths = SystemPaths {
            user_temp: PathBuf::from("/home/me/tmp"),
            system_root: PathBuf::from("/sysroot"),
        };
        let targets = resolve_targets(&paths);

        assert_eq!(targets.len(), 3);
        assert_eq!(targets[0].path, PathBuf::from("/home/me/tmp"));
        assert!(targets[1].path.starts_with("/sysroot"));
        assert!(targets[2].path.starts_with("/sysroot"));
        assert_ne!(targets[1].path, targets[2].path);
        assert_eq!(
            targets.iter().map(|t| t.requires_elevation).collect::<Vec<_>>(),
            vec![false, false, true]
        );
    }

    #[test]
    fn user_temp_inside_system_root_is_merged() {
        let root = tempfile::tempdir().unwrap();
        let system_root = root.path().join("system");
        let system_temp = SystemTemp.locate(&SystemPaths {
            user_temp: PathBuf::new(),
            system_root: system_root.clone(),
        });
        std::fs::create_dir_all(&system_temp).unwrap();

        let targets = resolve_targets(&SystemPaths {
            user_temp: system_temp.clone(),
            system_root,
        });

        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].label, UserTemp.label());
        assert_eq!(targets[0].path, system_temp);
        assert!(!targets[0].requires_elevation);
        assert!(targets[1].requires_elevation);
    }

    #[test]
    fn merging_into_privileged_location_keeps_the_requirement() {
        let root = tempfile::tempdir().unwrap();
        let system_root = root.path().join("system");
        let boot_cache = BootCache.locate(&SystemPaths {
            user_temp: PathBuf::new(),
            system_root: system_root.clone(),
        });

        // Compared as written when the folder does not exist.
        let targets = resolve_targets(&SystemPaths {
            user_temp: boot_cache.clone(),
            system_root,
        });

        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].path, boot_cache);
        assert!(targets[0].requires_elevation);
    }
}
