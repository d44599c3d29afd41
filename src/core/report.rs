//! Console narration for a cleanup run. Nothing here is a stable output format.

use super::accounting::SizeReport;
use super::orchestrator::{Disposition, RunSummary};
use super::targets::TargetDirectory;
use crate::logger::is_debug_enabled;
use crate::platform::Privilege;
use crate::utils::filesystem::{env_flag, format_size};
use crate::log_info;
use colored::Colorize;
use tabled::{Table, Tabled, settings::Style};

/// Setting this variable prints the per-target skip breakdown without `--debug`.
pub const SHOW_SKIPPED_VAR: &str = "SYSCLEAN_SHOW_SKIPPED";

const RULE_WIDTH: usize = 50;

/// Row of the "before" size table.
#[derive(Tabled, Clone)]
struct SizeRow {
    #[tabled(rename = "Location")]
    label: String,
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Size")]
    size: String,
}

/// Row of the final cleanup summary.
#[derive(Tabled, Clone)]
struct SummaryRow {
    #[tabled(rename = "Location")]
    label: String,
    #[tabled(rename = "Deleted")]
    deleted: String,
    #[tabled(rename = "Skipped")]
    skipped: String,
    #[tabled(rename = "Freed")]
    freed: String,
}

/// Per-target breakdown of why entries were left behind.
#[derive(Tabled, Clone)]
struct SkippedRow {
    #[tabled(rename = "Location")]
    label: String,
    #[tabled(rename = "Permission denied")]
    permission: usize,
    #[tabled(rename = "Other errors")]
    other: usize,
}

pub fn print_banner() {
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("{}", "       SYSTEM CLEANER - Temp & Cache Cleaner".bold().cyan());
    println!("{}", "=".repeat(RULE_WIDTH));
}

pub fn print_complete() {
    println!("\n{}", "=".repeat(RULE_WIDTH));
    println!("{}", "       CLEANUP COMPLETE!".bold().green());
    println!("{}", "=".repeat(RULE_WIDTH));
}

pub fn print_section(title: &str) {
    println!("\n{}", title.bold().underline().cyan());
}

pub fn print_privilege(privilege: Privilege) {
    match privilege {
        Privilege::Elevated => {
            log_info!("{}", "Running with Administrator privileges".bright_green())
        }
        Privilege::Standard => {
            log_info!("{}", "Running without Administrator privileges".bright_yellow());
            log_info!("    (Run as Admin to clean the boot cache folder)");
        }
    }
}

pub fn print_size_report(targets: &[TargetDirectory], sizes: &SizeReport) {
    let mut rows: Vec<SizeRow> = targets
        .iter()
        .zip(&sizes.entries)
        .map(|(target, entry)| SizeRow {
            label: entry.label.clone(),
            path: target.path.display().to_string(),
            size: if entry.requires_elevation {
                "requires elevation".to_string()
            } else {
                format_size(entry.bytes)
            },
        })
        .collect();
    rows.push(SizeRow {
        label: "Total".to_string(),
        path: String::new(),
        size: format_size(sizes.total()),
    });

    println!("{}", Table::new(&rows).with(Style::modern()));
    log_info!("Total to clean: {}", format_size(sizes.total()).bright_green().bold());
}

pub fn print_summary(summary: &RunSummary) {
    let mut rows: Vec<SummaryRow> = summary
        .targets
        .iter()
        .map(|outcome| match outcome.disposition {
            Disposition::Cleared(result) => SummaryRow {
                label: outcome.target.label.clone(),
                deleted: result.deleted.to_string(),
                skipped: result.skipped().to_string(),
                freed: format_size(outcome.freed()),
            },
            Disposition::RequiresElevation => SummaryRow {
                label: outcome.target.label.clone(),
                deleted: "-".to_string(),
                skipped: "requires elevation".to_string(),
                freed: format_size(0),
            },
        })
        .collect();
    rows.push(SummaryRow {
        label: "Recycle Bin".to_string(),
        deleted: if summary.recycle_bin.is_ok() { "emptied" } else { "failed" }.to_string(),
        skipped: match &summary.recycle_bin {
            Ok(()) => "-".to_string(),
            Err(e) => e.to_string(),
        },
        freed: "-".to_string(),
    });
    rows.push(SummaryRow {
        label: "Total".to_string(),
        deleted: String::new(),
        skipped: String::new(),
        freed: format_size(summary.total_freed()),
    });

    println!("\n{}", "📥📄🗑️ Cleanup Summary".bold().underline().green());
    println!("{}", Table::new(&rows).with(Style::modern()));

    if env_flag(SHOW_SKIPPED_VAR) || is_debug_enabled() {
        print_skipped(summary);
    }

    log_info!(
        "✔ Total space freed: {}",
        format_size(summary.total_freed()).bright_green().bold()
    );
}

fn print_skipped(summary: &RunSummary) {
    let rows: Vec<SkippedRow> = summary
        .targets
        .iter()
        .filter_map(|outcome| match outcome.disposition {
            Disposition::Cleared(result) if result.skipped() > 0 => Some(SkippedRow {
                label: outcome.target.label.clone(),
                permission: result.skipped_permission,
                other: result.skipped_other,
            }),
            _ => None,
        })
        .collect();

    if !rows.is_empty() {
        println!("\n{}", "⚪ Skipped Entries".bold().underline().magenta());
        println!("{}", Table::new(&rows).with(Style::modern()));
    }
}
