//! Plan execution: backup copies and the actual renames.

use crate::error::Error;
use crate::model::{CompletedRename, RenameEntry};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Default)]
pub struct ApplyOutcome {
    /// Renames that happened on disk, in plan order.
    pub completed: Vec<CompletedRename>,
    pub backups_created: usize,
    pub errors: Vec<Error>,
}

/// Execute the plan in order. Each entry stands alone: a vanished source,
/// an occupied destination or a failed backup copy records an error and
/// the batch moves on. With `backup_dir` set, the folder is created first
/// and every file is copied there before its rename; a failed copy means
/// that file is not renamed.
pub fn apply(entries: &[RenameEntry], backup_dir: Option<&Path>) -> ApplyOutcome {
    let mut outcome = ApplyOutcome::default();
    if entries.is_empty() {
        return outcome;
    }

    if let Some(dir) = backup_dir {
        if let Err(err) = fs::create_dir_all(dir) {
            outcome.errors.push(Error::write_failure(dir, err));
        }
    }

    let pb = ProgressBar::new(entries.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=> "),
    );

    for entry in entries {
        pb.set_message(entry.old_name.clone());
        match apply_entry(entry, backup_dir) {
            Ok(backed_up) => {
                if backed_up {
                    outcome.backups_created += 1;
                }
                debug!("Renamed: {} -> {}", entry.old_name, entry.new_name);
                outcome.completed.push(CompletedRename {
                    old_name: entry.old_name.clone(),
                    new_name: entry.new_name.clone(),
                    referenced: entry.referenced,
                });
            }
            Err(err) => outcome.errors.push(err),
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    outcome
}

fn apply_entry(entry: &RenameEntry, backup_dir: Option<&Path>) -> Result<bool, Error> {
    if !entry.old_path.exists() {
        return Err(Error::SourceVanished(entry.old_path.clone()));
    }
    if entry.new_path.exists() {
        return Err(Error::DestinationExists(entry.new_path.clone()));
    }

    let mut backed_up = false;
    if let Some(dir) = backup_dir {
        let backup_file = dir.join(&entry.old_name);
        fs::copy(&entry.old_path, &backup_file)
            .map_err(|err| Error::write_failure(&backup_file, err))?;
        backed_up = true;
    }

    fs::rename(&entry.old_path, &entry.new_path)
        .map_err(|err| Error::write_failure(&entry.new_path, err))?;

    Ok(backed_up)
}
