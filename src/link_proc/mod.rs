//! Clean-links flow: analyze link URLs in a site folder, report the dirty
//! ones and optionally rewrite the documents in place.

pub mod collect;
pub mod report;
pub mod update;

pub use collect::{collect_links, CollectedLinks};
pub use update::{update_documents, UpdateOutcome};

use crate::app_config::AppConfig;
use crate::error::Error;
use crate::stats::{RunStats, StatsTimer};
use crate::utils::prompt;
use console::style;
use std::path::{Path, PathBuf};
use tracing::{error, info};

pub struct CleanLinksOptions {
    /// Rewrite documents? None asks interactively.
    pub update: Option<bool>,
    /// Leave `.backup` siblings before rewriting? None asks.
    pub backup: Option<bool>,
    pub stats_csv: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanLinksSummary {
    pub links_found: usize,
    pub links_needing_update: usize,
    pub documents_updated: usize,
    pub errors: usize,
}

/// Run the whole flow against `folder`. Only a missing folder or an
/// unreadable folder listing is fatal; everything else is recorded and
/// reported at the end.
pub fn run(
    folder: &Path,
    config: &AppConfig,
    opts: &CleanLinksOptions,
) -> Result<CleanLinksSummary, Error> {
    if !folder.is_dir() {
        return Err(Error::SourceMissing(folder.to_path_buf()));
    }

    info!("Analyzing links under {}", folder.display());
    let mut stats = RunStats::start();

    stats.scan_timer = StatsTimer::start();
    let collected = collect_links(folder, config)?;
    stats.scan_timer.finish();

    let CollectedLinks {
        links,
        documents_scanned,
        errors: mut run_errors,
    } = collected;

    let changed = links.iter().filter(|l| l.needs_update()).count();
    stats.documents_scanned = documents_scanned;
    stats.links_found = links.len();
    stats.links_needing_update = changed;

    report::print_report(&links);

    let report_path = config.report_path(folder);
    match report::write_report_file(&report_path, &links) {
        Ok(()) => println!("\nReport saved: {}", report_path.display()),
        Err(err) => run_errors.push(err),
    }

    let mut documents_updated = 0;
    if changed > 0 {
        let update = match opts.update {
            Some(choice) => choice,
            None => prompt::prompt_confirm("\nUpdate the documents automatically?", Some(false))?,
        };

        if update {
            let backup = match opts.backup {
                Some(choice) => choice,
                None => prompt::prompt_confirm(
                    "Leave .backup copies of the originals?",
                    Some(false),
                )?,
            };

            stats.apply_timer = StatsTimer::start();
            let outcome = update_documents(&links, backup);
            stats.apply_timer.finish();

            documents_updated = outcome.documents_updated.len();
            stats.documents_updated = documents_updated;
            stats.backups_created = outcome.backups_created.len();
            run_errors.extend(outcome.errors);

            println!(
                "\n{} documents updated ({} backups)",
                style(documents_updated).green().bold(),
                style(stats.backups_created).cyan()
            );
        }
    }

    crate::utils::print_errors(&run_errors);

    stats.errors_recorded = run_errors.len();
    stats.total_timer.finish();
    stats.print();

    if let Some(csv_path) = &opts.stats_csv {
        if let Err(err) = stats.write_csv(csv_path) {
            error!("Failed to write stats CSV {}: {}", csv_path.display(), err);
        }
    }

    Ok(CleanLinksSummary {
        links_found: stats.links_found,
        links_needing_update: changed,
        documents_updated,
        errors: stats.errors_recorded,
    })
}
