//! Reference rewriting after a rename batch: index hrefs and sitemap locs.

use crate::error::Error;
use crate::model::CompletedRename;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::fs;
use std::path::Path;
use tracing::debug;

lazy_static! {
    static ref LOC_ELEMENT: Regex = Regex::new(
        r"(<(?:[A-Za-z0-9_.-]+:)?loc\s*>)([^<]*)(</(?:[A-Za-z0-9_.-]+:)?loc\s*>)"
    )
    .unwrap();
}

const XML_DECLARATION: &str = "<?xml version='1.0' encoding='utf-8'?>";

#[derive(Default)]
pub struct RewriteOutcome {
    pub index_updated: bool,
    pub sitemap_updated: bool,
    pub errors: Vec<Error>,
}

/// Point the index and the sitemap at the new names. Either document may
/// be absent; failures on one do not stop the other.
pub fn rewrite_references(
    index_path: &Path,
    sitemap_path: &Path,
    renames: &[CompletedRename],
) -> RewriteOutcome {
    let mut outcome = RewriteOutcome::default();
    if renames.is_empty() {
        return outcome;
    }

    if index_path.exists() {
        match rewrite_index(index_path, renames) {
            Ok(()) => {
                debug!("Index references updated: {}", index_path.display());
                outcome.index_updated = true;
            }
            Err(err) => outcome.errors.push(err),
        }
    }

    if sitemap_path.exists() {
        match rewrite_sitemap(sitemap_path, renames) {
            Ok(updated) => {
                if updated {
                    debug!("Sitemap references updated: {}", sitemap_path.display());
                }
                outcome.sitemap_updated = updated;
            }
            Err(err) => outcome.errors.push(err),
        }
    }

    outcome
}

/// Swap `href="old"` / `href='old'` attribute text for each completed
/// rename. The document is written back even when nothing matched.
fn rewrite_index(path: &Path, renames: &[CompletedRename]) -> Result<(), Error> {
    let content = fs::read_to_string(path).map_err(|err| Error::parse_failure(path, err))?;

    let mut updated = content;
    for rename in renames {
        updated = updated.replace(
            &format!("href=\"{}\"", rename.old_name),
            &format!("href=\"{}\"", rename.new_name),
        );
        updated = updated.replace(
            &format!("href='{}'", rename.old_name),
            &format!("href='{}'", rename.new_name),
        );
    }

    fs::write(path, updated).map_err(|err| Error::write_failure(path, err))
}

/// Substitute old names inside `<loc>` text only, leaving the rest of the
/// sitemap bytes alone. Written back only when something changed, with an
/// XML declaration guaranteed up front.
fn rewrite_sitemap(path: &Path, renames: &[CompletedRename]) -> Result<bool, Error> {
    let content = fs::read_to_string(path).map_err(|err| Error::parse_failure(path, err))?;

    let mut changed = false;
    let rewritten = LOC_ELEMENT.replace_all(&content, |caps: &Captures| {
        let mut text = caps[2].to_string();
        for rename in renames {
            if text.contains(&rename.old_name) {
                text = text.replace(&rename.old_name, &rename.new_name);
                changed = true;
            }
        }
        format!("{}{}{}", &caps[1], text, &caps[3])
    });

    if changed {
        let mut output = rewritten.into_owned();
        if !output.trim_start().starts_with("<?xml") {
            output = format!("{}\n{}", XML_DECLARATION, output);
        }
        fs::write(path, output).map_err(|err| Error::write_failure(path, err))?;
    }

    Ok(changed)
}
