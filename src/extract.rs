//! Link extraction from the index, the other pages and the sitemap.
//!
//! No HTML/XML object model here: anchors and `<loc>` elements are pulled
//! straight out of the document text. The sitemap regex accepts an optional
//! element prefix, which covers both the namespaced and namespace-free
//! shapes a sitemap shows up in.

use crate::error::Error;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::debug;

lazy_static! {
    static ref ANCHOR_HREF: Regex =
        Regex::new(r#"(?i)<a\s[^>]*?href\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap();
    static ref LOC_ELEMENT: Regex =
        Regex::new(r"<(?:[A-Za-z0-9_.-]+:)?loc\s*>([^<]*)</(?:[A-Za-z0-9_.-]+:)?loc\s*>").unwrap();
}

/// Every anchor `href` value ending in `.html`, in document order.
pub fn extract_html_links(html: &str) -> Vec<String> {
    ANCHOR_HREF
        .captures_iter(html)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
        .filter(|href| href.ends_with(".html"))
        .collect()
}

/// Every `<loc>` text ending in `.html`, in document order. The text is
/// kept raw: a location padded with whitespace does not end in `.html`
/// and is skipped, same as the tooling this replaces.
pub fn extract_sitemap_urls(xml: &str) -> Vec<String> {
    LOC_ELEMENT
        .captures_iter(xml)
        .map(|caps| caps[1].to_string())
        .filter(|loc| loc.ends_with(".html"))
        .collect()
}

/// Final path segment of an href, with `#fragment` and `?query` stripped.
pub fn href_basename(href: &str) -> &str {
    let path = href.split('#').next().unwrap_or(href);
    let path = path.split('?').next().unwrap_or(path);
    path.rsplit('/').next().unwrap_or(path)
}

/// The distinct filenames referenced by the index and the sitemap,
/// excluding the index itself.
pub struct ReferencedFiles {
    /// Sorted, deduplicated basenames.
    pub names: Vec<String>,
    pub errors: Vec<Error>,
}

/// Collect referenced `.html` basenames from both documents. A missing
/// document degrades to an empty contribution with a recorded
/// `SourceMissing`; an unreadable one records a `ParseFailure`. Never
/// fatal.
pub fn referenced_files(
    index_path: &Path,
    sitemap_path: &Path,
    index_name: &str,
) -> ReferencedFiles {
    let mut names: BTreeSet<String> = BTreeSet::new();
    let mut errors: Vec<Error> = Vec::new();

    match read_document(index_path) {
        Ok(Some(text)) => {
            collect_basenames(extract_html_links(&text), index_name, &mut names);
        }
        Ok(None) => errors.push(Error::SourceMissing(index_path.to_path_buf())),
        Err(err) => errors.push(err),
    }

    match read_document(sitemap_path) {
        Ok(Some(text)) => {
            collect_basenames(extract_sitemap_urls(&text), index_name, &mut names);
        }
        Ok(None) => errors.push(Error::SourceMissing(sitemap_path.to_path_buf())),
        Err(err) => errors.push(err),
    }

    debug!("Referenced files: {} distinct names", names.len());

    ReferencedFiles {
        names: names.into_iter().collect(),
        errors,
    }
}

fn collect_basenames(links: Vec<String>, index_name: &str, names: &mut BTreeSet<String>) {
    for link in links {
        let name = href_basename(&link);
        if !name.is_empty() && name != index_name {
            names.insert(name.to_string());
        }
    }
}

fn read_document(path: &Path) -> Result<Option<String>, Error> {
    if !path.exists() {
        return Ok(None);
    }
    fs::read_to_string(path)
        .map(Some)
        .map_err(|err| Error::parse_failure(path, err))
}
