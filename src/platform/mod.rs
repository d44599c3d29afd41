//! Privileged platform capabilities: the elevation check and the recycle-bin primitive.
//!
//! The cleanup engine only sees the [`Platform`] trait. Each supported platform family
//! provides one implementation, and [`native`] picks the one matching the build target.

use thiserror::Error;

#[cfg(unix)]
pub mod unix;
#[cfg(windows)]
pub mod windows;

/// Errors surfaced by the platform layer. None of them are fatal to a cleanup run.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The shell refused to empty the recycle bin; `code` is the raw HRESULT.
    #[error("recycle bin could not be emptied (HRESULT {code:#010x})")]
    RecycleBin { code: u32 },

    /// Some trash entries could not be removed.
    #[error("{skipped} trash item(s) could not be removed")]
    TrashNotEmptied { skipped: usize },
}

/// Capability interface for the host operating system.
pub trait Platform {
    /// Short name shown in the report header (e.g. "Windows").
    fn name(&self) -> &str;

    /// Whether the current process runs with elevated rights.
    ///
    /// Implementations must fail safe: if the check itself cannot be performed,
    /// they return `false` instead of an error.
    fn is_elevated(&self) -> bool;

    /// Permanently empties the recycle bin without confirmation, progress UI or sound.
    fn empty_recycle_bin(&self) -> Result<(), PlatformError>;
}

/// Elevation state of the process, captured once at the start of a run and passed
/// explicitly to every step that depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Privilege {
    Elevated,
    Standard,
}

impl Privilege {
    /// Queries the platform once and freezes the answer.
    pub fn query(platform: &dyn Platform) -> Self {
        if platform.is_elevated() {
            Privilege::Elevated
        } else {
            Privilege::Standard
        }
    }

    pub fn is_elevated(self) -> bool {
        self == Privilege::Elevated
    }

    /// Whether a location with the given requirement may be touched under this privilege.
    pub fn permits(self, requires_elevation: bool) -> bool {
        !requires_elevation || self.is_elevated()
    }
}

#[cfg(unix)]
pub type NativePlatform = unix::UnixPlatform;
#[cfg(windows)]
pub type NativePlatform = windows::WindowsPlatform;

/// Returns the platform implementation for the build target.
#[cfg(any(unix, windows))]
pub fn native() -> NativePlatform {
    NativePlatform::new()
}
