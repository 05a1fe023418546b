//! Link collection for the clean-links flow.

use crate::app_config::AppConfig;
use crate::clean::clean_url;
use crate::error::Error;
use crate::extract;
use crate::model::{CleanedLink, LinkSource};
use crate::scan;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub struct CollectedLinks {
    /// One record per link occurrence, document order within each source.
    /// Duplicates are kept: every occurrence is a substitution site.
    pub links: Vec<CleanedLink>,
    pub documents_scanned: usize,
    pub errors: Vec<Error>,
}

/// Read the index, the sitemap and then every other page in the folder,
/// pairing each `.html` link with its cleaned form. Missing or unreadable
/// documents are recorded and skipped; only an unreadable folder is fatal.
pub fn collect_links(folder: &Path, config: &AppConfig) -> Result<CollectedLinks, Error> {
    let mut links: Vec<CleanedLink> = Vec::new();
    let mut errors: Vec<Error> = Vec::new();
    let mut documents_scanned = 0;

    let index_path = config.index_path(folder);
    let sitemap_path = config.sitemap_path(folder);

    match collect_from_html(&index_path, &mut links) {
        Ok(count) => {
            documents_scanned += 1;
            debug!("Index: {} links", count);
        }
        Err(err) => errors.push(err),
    }

    match collect_from_sitemap(&sitemap_path, &mut links) {
        Ok(count) => {
            documents_scanned += 1;
            debug!("Sitemap: {} URLs", count);
        }
        Err(err) => errors.push(err),
    }

    for page in scan::scan_html_files(folder, &config.ignore_patterns)? {
        if page == index_path {
            continue;
        }
        match collect_from_html(&page, &mut links) {
            Ok(_) => documents_scanned += 1,
            Err(err) => errors.push(err),
        }
    }

    info!(
        "Collected {} link occurrences from {} documents",
        links.len(),
        documents_scanned
    );

    Ok(CollectedLinks {
        links,
        documents_scanned,
        errors,
    })
}

fn collect_from_html(path: &Path, links: &mut Vec<CleanedLink>) -> Result<usize, Error> {
    let text = read_document(path)?;
    let hrefs = extract::extract_html_links(&text);
    let count = hrefs.len();
    for href in hrefs {
        links.push(make_link(href, path, LinkSource::HtmlLink));
    }
    Ok(count)
}

fn collect_from_sitemap(path: &Path, links: &mut Vec<CleanedLink>) -> Result<usize, Error> {
    let text = read_document(path)?;
    let urls = extract::extract_sitemap_urls(&text);
    let count = urls.len();
    for url in urls {
        links.push(make_link(url, path, LinkSource::SitemapUrl));
    }
    Ok(count)
}

fn make_link(original: String, document: &Path, source: LinkSource) -> CleanedLink {
    let cleaned = clean_url(&original);
    CleanedLink {
        original,
        cleaned,
        document: document.to_path_buf(),
        source,
    }
}

fn read_document(path: &Path) -> Result<String, Error> {
    if !path.exists() {
        return Err(Error::SourceMissing(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|err| Error::parse_failure(path, err))
}
