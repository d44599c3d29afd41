//! `sysclean` frees disk space by clearing temporary directories, the boot
//! cache and the recycle bin.
//!
//! The engine lives in [`core`]: [`core::accounting`] measures folders,
//! [`core::clearer`] empties them and [`core::orchestrator`] sequences a run.
//! Privileged platform calls are isolated behind [`platform::Platform`].

// Re-exported so the `log_*!` macros can colorize through `$crate`.
#[doc(hidden)]
pub use colored;

pub mod cli;
pub mod core;
pub mod logger;
pub mod platform;
pub mod utils;
