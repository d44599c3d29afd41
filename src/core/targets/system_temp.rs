use super::{SystemPaths, Target};
use std::path::PathBuf;

/// The machine-wide temporary directory under the system root.
pub struct SystemTemp;

#[cfg(windows)]
const DIR_NAME: &str = "Temp";
#[cfg(not(windows))]
const DIR_NAME: &str = "tmp";

impl Target for SystemTemp {
    fn label(&self) -> &str {
        if cfg!(windows) { "Windows Temp" } else { "System Temp" }
    }

    fn locate(&self, paths: &SystemPaths) -> PathBuf {
        paths.system_root.join(DIR_NAME)
    }
}
