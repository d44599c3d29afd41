use super::{Platform, PlatformError};
use crate::log_debug;
use std::ptr;
use winapi::shared::winerror::S_OK;
use winapi::um::shellapi::{
    SHEmptyRecycleBinW, SHERB_NOCONFIRMATION, SHERB_NOPROGRESSUI, SHERB_NOSOUND,
};
use winapi::um::shlobj::IsUserAnAdmin;

/// Shell32-backed implementation for Windows hosts.
pub struct WindowsPlatform;

impl WindowsPlatform {
    pub fn new() -> Self {
        WindowsPlatform
    }
}

impl Default for WindowsPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for WindowsPlatform {
    fn name(&self) -> &str {
        "Windows"
    }

    fn is_elevated(&self) -> bool {
        // IsUserAnAdmin returns FALSE on any internal failure, which is the safe answer.
        let elevated = unsafe { IsUserAnAdmin() } != 0;
        log_debug!("IsUserAnAdmin -> {}", elevated);
        elevated
    }

    fn empty_recycle_bin(&self) -> Result<(), PlatformError> {
        // NULL window, NULL root path: every drive's bin.
        let hr = unsafe {
            SHEmptyRecycleBinW(
                ptr::null_mut(),
                ptr::null(),
                SHERB_NOCONFIRMATION | SHERB_NOPROGRESSUI | SHERB_NOSOUND,
            )
        };
        log_debug!("SHEmptyRecycleBinW -> {:#010x}", hr as u32);

        if hr == S_OK {
            Ok(())
        } else {
            Err(PlatformError::RecycleBin { code: hr as u32 })
        }
    }
}
