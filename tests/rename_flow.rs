//! End-to-end tests for the rename-files flow, run non-interactively
//! against throwaway site folders.

use limpa_links::app_config::AppConfig;
use limpa_links::rename_proc::{self, RenameOptions};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_file(folder: &Path, name: &str, content: &str) {
    fs::write(folder.join(name), content).unwrap();
}

fn options() -> RenameOptions {
    RenameOptions {
        assume_yes: true,
        backup: Some(true),
        rewrite_refs: Some(true),
        stats_csv: None,
    }
}

/// Index + sitemap + pages with accented names, one of them unreferenced.
fn accented_site() -> TempDir {
    let tmp = tempfile::tempdir().unwrap();
    write_file(
        tmp.path(),
        "index.html",
        "<html><body>\n\
         <a href=\"Página Principal.html\">Principal</a>\n\
         <a href=\"Sobre Nós.html\">Sobre</a>\n\
         <a href=\"contato.html\">Contato</a>\n\
         </body></html>",
    );
    write_file(
        tmp.path(),
        "sitemap.xml",
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n\
         <url><loc>https://example.com/Página Principal.html</loc></url>\n\
         <url><loc>https://example.com/Sobre Nós.html</loc></url>\n\
         <url><loc>https://example.com/contato.html</loc></url>\n\
         </urlset>",
    );
    write_file(tmp.path(), "Página Principal.html", "<p>principal</p>");
    write_file(tmp.path(), "Sobre Nós.html", "<p>sobre</p>");
    write_file(tmp.path(), "contato.html", "<p>contato</p>");
    write_file(tmp.path(), "Notícias.html", "<p>noticias</p>");
    tmp
}

#[test]
fn test_full_rename_pipeline() {
    let site = accented_site();
    let config = AppConfig::default();

    let summary = rename_proc::run(site.path(), &config, &options()).unwrap();

    assert_eq!(summary.entries_planned, 3);
    assert_eq!(summary.renames_completed, 3);
    assert_eq!(summary.conflicts_found, 0);
    assert_eq!(summary.errors, 0);

    // Renamed files exist, originals are gone, clean names untouched.
    assert!(site.path().join("pagina-principal.html").exists());
    assert!(site.path().join("sobre-nos.html").exists());
    assert!(site.path().join("noticias.html").exists());
    assert!(!site.path().join("Página Principal.html").exists());
    assert!(!site.path().join("Notícias.html").exists());
    assert_eq!(
        fs::read_to_string(site.path().join("contato.html")).unwrap(),
        "<p>contato</p>"
    );

    // Backups carry the original names and contents.
    let backup_dir = site.path().join("backup_arquivos_originais");
    assert!(backup_dir.join("Página Principal.html").exists());
    assert!(backup_dir.join("Sobre Nós.html").exists());
    assert!(backup_dir.join("Notícias.html").exists());
    assert_eq!(
        fs::read_to_string(backup_dir.join("Página Principal.html")).unwrap(),
        "<p>principal</p>"
    );

    // Index references point at the new names.
    let index = fs::read_to_string(site.path().join("index.html")).unwrap();
    assert!(index.contains("href=\"pagina-principal.html\""));
    assert!(index.contains("href=\"sobre-nos.html\""));
    assert!(index.contains("href=\"contato.html\""));
    assert!(!index.contains("Página Principal.html"));

    // Sitemap locs updated, declaration present, URLs otherwise intact.
    let sitemap = fs::read_to_string(site.path().join("sitemap.xml")).unwrap();
    assert!(sitemap.trim_start().starts_with("<?xml"));
    assert!(sitemap.contains("<loc>https://example.com/pagina-principal.html</loc>"));
    assert!(sitemap.contains("<loc>https://example.com/sobre-nos.html</loc>"));
    assert!(sitemap.contains("<loc>https://example.com/contato.html</loc>"));
}

#[test]
fn test_collision_resolved_across_referenced_files() {
    let site = tempfile::tempdir().unwrap();
    write_file(
        site.path(),
        "index.html",
        "<a href=\"Relatorio Anual.html\">a</a>\n\
         <a href=\"Relatório Anual.html\">b</a>",
    );
    write_file(site.path(), "Relatorio Anual.html", "<p>a</p>");
    write_file(site.path(), "Relatório Anual.html", "<p>b</p>");

    let config = AppConfig::default();
    let summary = rename_proc::run(site.path(), &config, &options()).unwrap();

    assert_eq!(summary.entries_planned, 2);
    assert_eq!(summary.conflicts_found, 1);
    assert_eq!(summary.renames_completed, 2);
    // Missing sitemap is recorded but does not stop the batch.
    assert_eq!(summary.errors, 1);

    assert_eq!(
        fs::read_to_string(site.path().join("relatorio-anual.html")).unwrap(),
        "<p>a</p>"
    );
    assert_eq!(
        fs::read_to_string(site.path().join("relatorio-anual-2.html")).unwrap(),
        "<p>b</p>"
    );

    let index = fs::read_to_string(site.path().join("index.html")).unwrap();
    assert!(index.contains("href=\"relatorio-anual.html\""));
    assert!(index.contains("href=\"relatorio-anual-2.html\""));
}

#[test]
fn test_clean_site_is_left_alone() {
    let site = tempfile::tempdir().unwrap();
    let index_content = "<a href=\"pagina.html\">p</a>";
    write_file(site.path(), "index.html", index_content);
    write_file(site.path(), "pagina.html", "<p>p</p>");
    write_file(
        site.path(),
        "sitemap.xml",
        "<urlset><url><loc>https://example.com/pagina.html</loc></url></urlset>",
    );

    let config = AppConfig::default();
    // No prompt is reached when there is nothing to rename.
    let opts = RenameOptions {
        assume_yes: false,
        backup: None,
        rewrite_refs: None,
        stats_csv: None,
    };
    let summary = rename_proc::run(site.path(), &config, &opts).unwrap();

    assert_eq!(summary.entries_planned, 0);
    assert_eq!(summary.renames_completed, 0);
    assert_eq!(summary.errors, 0);
    assert_eq!(
        fs::read_to_string(site.path().join("index.html")).unwrap(),
        index_content
    );
    assert!(!site.path().join("backup_arquivos_originais").exists());
}

#[test]
fn test_occupied_destination_is_reported_not_overwritten() {
    let site = tempfile::tempdir().unwrap();
    write_file(site.path(), "index.html", "<a href=\"Relatório.html\">r</a>");
    write_file(site.path(), "sitemap.xml", "<urlset></urlset>");
    write_file(site.path(), "Relatório.html", "<p>novo</p>");
    write_file(site.path(), "relatorio.html", "<p>antigo</p>");

    let config = AppConfig::default();
    let summary = rename_proc::run(site.path(), &config, &options()).unwrap();

    assert_eq!(summary.entries_planned, 1);
    assert_eq!(summary.renames_completed, 0);
    assert_eq!(summary.errors, 1);
    assert_eq!(
        fs::read_to_string(site.path().join("relatorio.html")).unwrap(),
        "<p>antigo</p>"
    );
    assert_eq!(
        fs::read_to_string(site.path().join("Relatório.html")).unwrap(),
        "<p>novo</p>"
    );
    // Nothing renamed, so the index is left with the old reference.
    let index = fs::read_to_string(site.path().join("index.html")).unwrap();
    assert!(index.contains("href=\"Relatório.html\""));
}

#[test]
fn test_no_backup_no_rewrite() {
    let site = accented_site();
    let config = AppConfig::default();
    let opts = RenameOptions {
        assume_yes: true,
        backup: Some(false),
        rewrite_refs: Some(false),
        stats_csv: None,
    };

    let summary = rename_proc::run(site.path(), &config, &opts).unwrap();

    assert_eq!(summary.renames_completed, 3);
    assert!(!site.path().join("backup_arquivos_originais").exists());
    // References were deliberately left stale.
    let index = fs::read_to_string(site.path().join("index.html")).unwrap();
    assert!(index.contains("href=\"Página Principal.html\""));
    assert!(site.path().join("pagina-principal.html").exists());
}

#[test]
fn test_missing_folder_is_fatal() {
    let config = AppConfig::default();
    let result = rename_proc::run(
        Path::new("/nonexistent-site-folder"),
        &config,
        &options(),
    );
    assert!(result.is_err());
}

#[test]
fn test_stats_csv_appended() {
    let site = accented_site();
    let out = tempfile::tempdir().unwrap();
    let csv_path = out.path().join("runs.csv");
    let config = AppConfig::default();
    let opts = RenameOptions {
        stats_csv: Some(csv_path.clone()),
        ..options()
    };

    rename_proc::run(site.path(), &config, &opts).unwrap();

    let content = fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("renames_completed"));
}
