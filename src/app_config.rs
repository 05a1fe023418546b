use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings shared by both flows. Everything has a default, so running
/// without a `Config.toml` works out of the box.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Landing page name; never renamed and excluded from reference sets.
    #[serde(default = "default_index_name")]
    pub index_name: String,
    #[serde(default = "default_sitemap_name")]
    pub sitemap_name: String,
    /// Folder (inside the site folder) that receives pre-rename copies.
    #[serde(default = "default_backup_dir")]
    pub backup_dir: String,
    /// Name of the original/cleaned URL report written by the link flow.
    #[serde(default = "default_report_file")]
    pub report_file: String,
    /// Glob patterns for files the scanner should skip.
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

fn default_index_name() -> String {
    "index.html".to_string()
}

fn default_sitemap_name() -> String {
    "sitemap.xml".to_string()
}

fn default_backup_dir() -> String {
    "backup_arquivos_originais".to_string()
}

fn default_report_file() -> String {
    "urls_limpas.txt".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            index_name: default_index_name(),
            sitemap_name: default_sitemap_name(),
            backup_dir: default_backup_dir(),
            report_file: default_report_file(),
            ignore_patterns: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn index_path(&self, folder: &Path) -> PathBuf {
        folder.join(&self.index_name)
    }

    pub fn sitemap_path(&self, folder: &Path) -> PathBuf {
        folder.join(&self.sitemap_name)
    }

    pub fn backup_path(&self, folder: &Path) -> PathBuf {
        folder.join(&self.backup_dir)
    }

    pub fn report_path(&self, folder: &Path) -> PathBuf {
        folder.join(&self.report_file)
    }
}

pub fn load_configuration() -> Result<AppConfig, ConfigError> {
    let builder = Config::builder()
        .add_source(File::with_name("Config").required(false))
        .build()?;

    builder.try_deserialize::<AppConfig>()
}
