//! Rename-files flow: plan cleaned names for the physical HTML files,
//! execute the renames with backups, then point the index and sitemap at
//! the new names.

pub mod apply;
pub mod planner;
pub mod report;
pub mod rewrite;

pub use apply::{apply, ApplyOutcome};
pub use planner::{plan, RenamePlan};
pub use rewrite::{rewrite_references, RewriteOutcome};

use crate::app_config::AppConfig;
use crate::error::Error;
use crate::extract;
use crate::scan;
use crate::stats::{RunStats, StatsTimer};
use crate::utils;
use crate::utils::prompt;
use colored::*;
use std::path::{Path, PathBuf};
use tracing::{error, info};

pub struct RenameOptions {
    /// Skip the proceed prompt.
    pub assume_yes: bool,
    /// Copy originals into the backup folder? None asks interactively.
    pub backup: Option<bool>,
    /// Rewrite index/sitemap references afterwards? None asks.
    pub rewrite_refs: Option<bool>,
    pub stats_csv: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenameSummary {
    pub entries_planned: usize,
    pub conflicts_found: usize,
    pub renames_completed: usize,
    pub errors: usize,
}

/// Run the whole flow against `folder`. Only a missing folder or an
/// unreadable folder listing is fatal; per-file trouble is recorded and
/// the batch continues.
pub fn run(
    folder: &Path,
    config: &AppConfig,
    opts: &RenameOptions,
) -> Result<RenameSummary, Error> {
    if !folder.is_dir() {
        return Err(Error::SourceMissing(folder.to_path_buf()));
    }

    info!("Planning renames under {}", folder.display());
    let mut stats = RunStats::start();

    let index_path = config.index_path(folder);
    let sitemap_path = config.sitemap_path(folder);

    stats.scan_timer = StatsTimer::start();
    let referenced = extract::referenced_files(&index_path, &sitemap_path, &config.index_name);
    let mut run_errors = referenced.errors;

    let physical: Vec<String> = scan::scan_html_files(folder, &config.ignore_patterns)?
        .iter()
        .map(|path| utils::file_name_string(path))
        .filter(|name| *name != config.index_name)
        .collect();
    stats.scan_timer.finish();

    report::print_referenced(&referenced.names);
    println!("\nPhysical HTML files found: {}", physical.len());

    stats.plan_timer = StatsTimer::start();
    let plan = planner::plan(&referenced.names, &physical, folder);
    stats.plan_timer.finish();

    stats.referenced_files = referenced.names.len();
    stats.physical_files = physical.len();
    stats.entries_planned = plan.entries.len();
    stats.conflicts_found = plan.conflicts.len();

    report::print_plan(&plan);

    let mut applied: Option<ApplyOutcome> = None;
    let mut rewritten: Option<RewriteOutcome> = None;

    if plan.entries.is_empty() {
        println!("\n{}", "All filenames are already clean!".green());
    } else {
        let proceed = opts.assume_yes
            || prompt::prompt_confirm(
                &format!("\nProceed with renaming {} files?", plan.entries.len()),
                Some(false),
            )?;

        if proceed {
            let backup = match opts.backup {
                Some(choice) => choice,
                None => {
                    prompt::prompt_confirm("Create backups of the original files?", Some(false))?
                }
            };
            let backup_dir = backup.then(|| config.backup_path(folder));
            if let Some(dir) = &backup_dir {
                println!("Backup folder: {}", dir.display());
            }

            stats.apply_timer = StatsTimer::start();
            let mut outcome = apply::apply(&plan.entries, backup_dir.as_deref());
            stats.apply_timer.finish();
            run_errors.append(&mut outcome.errors);

            if !outcome.completed.is_empty() {
                let rewrite = match opts.rewrite_refs {
                    Some(choice) => choice,
                    None => prompt::prompt_confirm(
                        "Update references in the index and sitemap?",
                        Some(false),
                    )?,
                };

                if rewrite {
                    stats.rewrite_timer = StatsTimer::start();
                    let mut rewrite_outcome =
                        rewrite_references(&index_path, &sitemap_path, &outcome.completed);
                    stats.rewrite_timer.finish();
                    run_errors.append(&mut rewrite_outcome.errors);
                    rewritten = Some(rewrite_outcome);
                }
            }

            applied = Some(outcome);
        } else {
            println!("{}", "Operation cancelled.".yellow());
        }
    }

    if let Some(outcome) = &applied {
        stats.renames_completed = outcome.completed.len();
        stats.backups_created = outcome.backups_created;
        report::print_outcome(outcome, rewritten.as_ref());
    }
    if let Some(rewrite_outcome) = &rewritten {
        stats.documents_updated =
            usize::from(rewrite_outcome.index_updated) + usize::from(rewrite_outcome.sitemap_updated);
    }

    utils::print_errors(&run_errors);

    stats.errors_recorded = run_errors.len();
    stats.total_timer.finish();
    stats.print();

    if let Some(csv_path) = &opts.stats_csv {
        if let Err(err) = stats.write_csv(csv_path) {
            error!("Failed to write stats CSV {}: {}", csv_path.display(), err);
        }
    }

    Ok(RenameSummary {
        entries_planned: stats.entries_planned,
        conflicts_found: stats.conflicts_found,
        renames_completed: stats.renames_completed,
        errors: stats.errors_recorded,
    })
}
