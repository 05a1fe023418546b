//! Folder scanning for `.html` files.

use glob::Pattern;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error};
use walkdir::WalkDir;

/// List the `.html` files sitting directly in `folder`. Subdirectories are
/// not descended into; the sites this runs on keep every page flat next to
/// the index. The extension match is case sensitive. Results come back
/// sorted so the rest of the pipeline is reproducible.
pub fn scan_html_files(folder: &Path, ignore_patterns: &[String]) -> io::Result<Vec<PathBuf>> {
    let patterns = compile_patterns(ignore_patterns);

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(folder).min_depth(1).max_depth(1) {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        if !entry.file_name().to_string_lossy().ends_with(".html") {
            continue;
        }
        if patterns.iter().any(|p| p.matches_path(entry.path())) {
            debug!("Ignoring file: {}", entry.path().display());
            continue;
        }
        files.push(entry.into_path());
    }
    files.sort();
    Ok(files)
}

fn compile_patterns(ignore_patterns: &[String]) -> Vec<Pattern> {
    ignore_patterns
        .iter()
        .filter_map(|pattern| match Pattern::new(pattern) {
            Ok(p) => Some(p),
            Err(err) => {
                error!("Invalid ignore pattern '{}': {}", pattern, err);
                None
            }
        })
        .collect()
}
