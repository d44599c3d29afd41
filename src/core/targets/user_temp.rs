use super::{SystemPaths, Target};
use std::path::PathBuf;

/// The current user's temporary directory (`%TEMP%` / `$TMPDIR`).
pub struct UserTemp;

impl Target for UserTemp {
    fn label(&self) -> &str {
        "Temp"
    }

    fn locate(&self, paths: &SystemPaths) -> PathBuf {
        paths.user_temp.clone()
    }
}
