//! In-place document rewriting for the clean-links flow.

use crate::error::Error;
use crate::model::CleanedLink;
use ahash::AHashMap;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Default)]
pub struct UpdateOutcome {
    pub documents_updated: Vec<PathBuf>,
    pub backups_created: Vec<PathBuf>,
    pub errors: Vec<Error>,
}

/// Rewrite every document that has links needing update. Replacement is
/// plain substring substitution over the whole document text, all
/// occurrences of each original URL. A document that fails to back up,
/// read or write is recorded and skipped; the rest of the batch goes on.
pub fn update_documents(links: &[CleanedLink], backup: bool) -> UpdateOutcome {
    let mut order: Vec<PathBuf> = Vec::new();
    let mut by_document: AHashMap<PathBuf, Vec<&CleanedLink>> = AHashMap::new();
    for link in links.iter().filter(|l| l.needs_update()) {
        if !by_document.contains_key(&link.document) {
            order.push(link.document.clone());
        }
        by_document.entry(link.document.clone()).or_default().push(link);
    }

    let mut outcome = UpdateOutcome::default();

    let pb = ProgressBar::new(order.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=> "),
    );

    for document in order {
        pb.set_message(crate::utils::file_name_string(&document));
        match update_single(&document, &by_document[&document], backup) {
            Ok(backup_path) => {
                debug!("Updated document: {}", document.display());
                if let Some(backup_path) = backup_path {
                    outcome.backups_created.push(backup_path);
                }
                outcome.documents_updated.push(document);
            }
            Err(err) => outcome.errors.push(err),
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    outcome
}

fn update_single(
    document: &Path,
    links: &[&CleanedLink],
    backup: bool,
) -> Result<Option<PathBuf>, Error> {
    let content =
        fs::read_to_string(document).map_err(|err| Error::write_failure(document, err))?;

    let mut backup_path = None;
    if backup {
        let sibling = backup_sibling(document);
        fs::copy(document, &sibling).map_err(|err| Error::write_failure(&sibling, err))?;
        backup_path = Some(sibling);
    }

    let mut updated = content;
    for link in links {
        updated = updated.replace(&link.original, &link.cleaned);
    }
    fs::write(document, updated).map_err(|err| Error::write_failure(document, err))?;

    Ok(backup_path)
}

/// `page.html` gets its copy at `page.html.backup`, next to the original.
fn backup_sibling(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(".backup");
    PathBuf::from(os)
}
