//! End-to-end tests for the clean-links flow.

use limpa_links::app_config::AppConfig;
use limpa_links::link_proc::{self, CleanLinksOptions};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_file(folder: &Path, name: &str, content: &str) {
    fs::write(folder.join(name), content).unwrap();
}

fn dirty_site() -> TempDir {
    let tmp = tempfile::tempdir().unwrap();
    write_file(
        tmp.path(),
        "index.html",
        "<html><body>\n\
         <a href=\"Página.html\">Página.html</a>\n\
         <a href=\"limpa.html\">ok</a>\n\
         </body></html>",
    );
    write_file(
        tmp.path(),
        "sitemap.xml",
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset>\n\
         <url><loc>https://example.com/Página.html</loc></url>\n\
         <url><loc>https://example.com/limpa.html</loc></url>\n\
         </urlset>",
    );
    write_file(
        tmp.path(),
        "outra.html",
        "<a href=\"Página.html\">ver</a>",
    );
    tmp
}

#[test]
fn test_report_only_run_leaves_documents_alone() {
    let site = dirty_site();
    let config = AppConfig::default();
    let opts = CleanLinksOptions {
        update: Some(false),
        backup: Some(false),
        stats_csv: None,
    };

    let summary = link_proc::run(site.path(), &config, &opts).unwrap();

    // index: 2 links, sitemap: 2, outra.html: 1.
    assert_eq!(summary.links_found, 5);
    // Both sitemap URLs count as dirty: cleaning strips the scheme colon,
    // so any absolute URL differs from its cleaned form.
    assert_eq!(summary.links_needing_update, 4);
    assert_eq!(summary.documents_updated, 0);
    assert_eq!(summary.errors, 0);

    let index = fs::read_to_string(site.path().join("index.html")).unwrap();
    assert!(index.contains("href=\"Página.html\""));

    // The report file is written even on a report-only run.
    let report = fs::read_to_string(site.path().join("urls_limpas.txt")).unwrap();
    assert!(report.starts_with("ORIGINAL URLS -> CLEANED URLS"));
    assert!(report.contains("Original: Página.html"));
    assert!(report.contains("Cleaned: pagina.html"));
    assert!(report.contains("Original: https://example.com/Página.html"));
    assert!(report.contains("Cleaned: https//example.com/limpa.html"));
}

#[test]
fn test_update_rewrites_documents_with_backups() {
    let site = dirty_site();
    let config = AppConfig::default();
    let opts = CleanLinksOptions {
        update: Some(true),
        backup: Some(true),
        stats_csv: None,
    };

    let summary = link_proc::run(site.path(), &config, &opts).unwrap();

    assert_eq!(summary.documents_updated, 3);
    assert_eq!(summary.errors, 0);

    // Substitution is textual and hits every occurrence, anchor text too.
    let index = fs::read_to_string(site.path().join("index.html")).unwrap();
    assert!(!index.contains("Página.html"));
    assert_eq!(index.matches("pagina.html").count(), 2);
    assert!(index.contains("href=\"limpa.html\""));

    let outra = fs::read_to_string(site.path().join("outra.html")).unwrap();
    assert!(outra.contains("href=\"pagina.html\""));

    // The sitemap loses the scheme colon: cleaning treats the whole URL
    // as one string and ':' is outside the kept character set.
    let sitemap = fs::read_to_string(site.path().join("sitemap.xml")).unwrap();
    assert!(sitemap.contains("<loc>https//example.com/pagina.html</loc>"));
    assert!(sitemap.contains("<loc>https//example.com/limpa.html</loc>"));

    // Every rewritten document left a .backup sibling with the original.
    let index_backup = fs::read_to_string(site.path().join("index.html.backup")).unwrap();
    assert!(index_backup.contains("href=\"Página.html\""));
    assert!(site.path().join("sitemap.xml.backup").exists());
    assert!(site.path().join("outra.html.backup").exists());
}

#[test]
fn test_update_without_backup() {
    let site = dirty_site();
    let config = AppConfig::default();
    let opts = CleanLinksOptions {
        update: Some(true),
        backup: Some(false),
        stats_csv: None,
    };

    link_proc::run(site.path(), &config, &opts).unwrap();

    assert!(!site.path().join("index.html.backup").exists());
    let index = fs::read_to_string(site.path().join("index.html")).unwrap();
    assert!(!index.contains("Página.html"));
}

#[test]
fn test_clean_site_needs_no_update() {
    let site = tempfile::tempdir().unwrap();
    write_file(site.path(), "index.html", "<a href=\"pagina.html\">p</a>");
    // A sitemap as a previous cleaning run leaves it: absolute URLs have
    // already lost their scheme colon, so nothing is dirty anymore.
    write_file(
        site.path(),
        "sitemap.xml",
        "<urlset><url><loc>https//example.com/pagina.html</loc></url></urlset>",
    );

    let config = AppConfig::default();
    // Nothing dirty, so the update gate (and its prompts) never fires.
    let opts = CleanLinksOptions {
        update: None,
        backup: None,
        stats_csv: None,
    };
    let summary = link_proc::run(site.path(), &config, &opts).unwrap();

    assert_eq!(summary.links_needing_update, 0);
    assert_eq!(summary.documents_updated, 0);
    assert_eq!(summary.errors, 0);

    let report = fs::read_to_string(site.path().join("urls_limpas.txt")).unwrap();
    assert!(report.starts_with("ORIGINAL URLS -> CLEANED URLS"));
    assert!(!report.contains("Document:"));
}

#[test]
fn test_missing_sitemap_is_recorded_not_fatal() {
    let site = tempfile::tempdir().unwrap();
    write_file(site.path(), "index.html", "<a href=\"Página.html\">p</a>");

    let config = AppConfig::default();
    let opts = CleanLinksOptions {
        update: Some(true),
        backup: Some(false),
        stats_csv: None,
    };
    let summary = link_proc::run(site.path(), &config, &opts).unwrap();

    assert_eq!(summary.errors, 1);
    assert_eq!(summary.links_needing_update, 1);
    let index = fs::read_to_string(site.path().join("index.html")).unwrap();
    assert!(index.contains("href=\"pagina.html\""));
}

#[test]
fn test_second_run_finds_nothing_to_clean() {
    let site = dirty_site();
    let config = AppConfig::default();
    let opts = CleanLinksOptions {
        update: Some(true),
        backup: Some(false),
        stats_csv: None,
    };

    link_proc::run(site.path(), &config, &opts).unwrap();
    let second = link_proc::run(site.path(), &config, &opts).unwrap();

    assert_eq!(second.links_needing_update, 0);
    assert_eq!(second.documents_updated, 0);
}
