use super::accounting::{SizeReport, folder_size, measure_targets};
use super::clearer::{ClearingResult, clear_folder};
use super::report;
use super::targets::{SystemPaths, TargetDirectory, resolve_targets};
use crate::platform::{Platform, PlatformError, Privilege};
use crate::{log_debug, log_info, log_warn};

/// What was done with a target during the cleanup phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Cleared(ClearingResult),
    /// Skipped without an attempt because the process is not elevated.
    RequiresElevation,
}

/// Per-target record of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetOutcome {
    pub target: TargetDirectory,
    pub size_before: u64,
    pub disposition: Disposition,
    pub size_after: u64,
}

impl TargetOutcome {
    /// Bytes that disappeared between the two measurements.
    pub fn freed(&self) -> u64 {
        self.size_before.saturating_sub(self.size_after)
    }
}

/// Everything a run did, handed to the final report and returned to the caller.
#[derive(Debug)]
pub struct RunSummary {
    pub privilege: Privilege,
    pub sizes: SizeReport,
    pub targets: Vec<TargetOutcome>,
    pub recycle_bin: Result<(), PlatformError>,
}

impl RunSummary {
    pub fn total_freed(&self) -> u64 {
        self.targets.iter().map(TargetOutcome::freed).sum()
    }
}

/// Runs a full cleanup: measure, clear, empty the recycle bin, re-measure.
///
/// The privilege is queried exactly once and reused for measuring and clearing, so a
/// privileged target is either handled in both phases or skipped in both. No step's
/// failure stops the following steps.
///
/// # Arguments
/// * `paths` - Environment-derived base locations; targets sharing a folder are merged.
/// * `platform` - The capability used for the elevation check and the recycle bin.
///
/// # Returns
/// A `RunSummary` with per-target sizes and clearing results, plus the recycle-bin outcome.
pub fn run(paths: &SystemPaths, platform: &dyn Platform) -> RunSummary {
    log_debug!("Starting cleanup on {}", platform.name());

    let targets = resolve_targets(paths);
    // Queried once; every later step sees this same value.
    let privilege = Privilege::query(platform);
    report::print_privilege(privilege);

    // Phase 1: measure.
    report::print_section("🔍 Calculating space to be freed...");
    let sizes = measure_targets(&targets, privilege);
    report::print_size_report(&targets, &sizes);

    // Phase 2: clear.
    report::print_section("🚚🧹 Starting cleanup...");
    let mut outcomes: Vec<TargetOutcome> = targets
        .into_iter()
        .zip(&sizes.entries)
        .map(|(target, size)| {
            let disposition = if privilege.permits(target.requires_elevation) {
                Disposition::Cleared(clear_folder(&target.path, &target.label))
            } else {
                log_warn!(
                    "{} folder requires Administrator privileges. Skipping: {}",
                    target.label.bright_yellow(),
                    target.path.display().to_string().bright_white()
                );
                Disposition::RequiresElevation
            };
            TargetOutcome {
                target,
                size_before: size.bytes,
                disposition,
                size_after: size.bytes,
            }
        })
        .collect();

    // Phase 3: recycle bin, once, whatever the privilege.
    log_info!("🗑️ Emptying Recycle Bin...");
    let recycle_bin = platform.empty_recycle_bin();
    match &recycle_bin {
        Ok(()) => log_info!("    {}", "Recycle Bin emptied successfully!".bright_green()),
        Err(e) => log_warn!("    Error emptying Recycle Bin: {}", e.to_string().bright_red()),
    }

    // Phase 4: re-measure what was actually cleared.
    for outcome in &mut outcomes {
        if let Disposition::Cleared(_) = outcome.disposition {
            outcome.size_after = folder_size(&outcome.target.path);
        }
    }

    let summary = RunSummary {
        privilege,
        sizes,
        targets: outcomes,
        recycle_bin,
    };
    report::print_summary(&summary);

    log_debug!("✅ Finished cleanup.");
    summary
}
