use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)] // requires `derive` feature
#[command(name = "limpa-links")]
#[command(about = "Cleans accented URLs and filenames in static site folders", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Report link URLs that need cleaning and optionally rewrite the documents
    CleanLinks(CleanLinksArgs),
    /// Rename HTML files to their cleaned names and fix references to them
    RenameFiles(RenameFilesArgs),
    /// Print the effective configuration
    PrintConfig,
}

#[derive(Debug, Args)]
pub struct CleanLinksArgs {
    /// Site folder holding index.html and sitemap.xml (default: current dir)
    pub folder: Option<PathBuf>,

    /// Rewrite documents without asking
    #[arg(long, conflicts_with = "no_update")]
    pub update: bool,

    /// Report only, never rewrite
    #[arg(long)]
    pub no_update: bool,

    /// Leave a .backup copy next to each rewritten document
    #[arg(long, conflicts_with = "no_backup")]
    pub backup: bool,

    /// Skip the .backup copies
    #[arg(long)]
    pub no_backup: bool,

    /// Append run statistics to a CSV file
    #[arg(long, value_name = "FILE")]
    pub stats_csv: Option<PathBuf>,
}

impl CleanLinksArgs {
    /// None means neither flag was given and the run should ask.
    pub fn update_choice(&self) -> Option<bool> {
        flag_pair(self.update, self.no_update)
    }

    pub fn backup_choice(&self) -> Option<bool> {
        flag_pair(self.backup, self.no_backup)
    }
}

#[derive(Debug, Args)]
pub struct RenameFilesArgs {
    /// Site folder holding index.html and sitemap.xml (default: current dir)
    pub folder: Option<PathBuf>,

    /// Proceed with the rename batch without asking
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Copy originals into the backup folder before renaming
    #[arg(long, conflicts_with = "no_backup")]
    pub backup: bool,

    /// Skip the backup copies
    #[arg(long)]
    pub no_backup: bool,

    /// Update index.html and sitemap.xml references after renaming
    #[arg(long, conflicts_with = "no_rewrite_refs")]
    pub rewrite_refs: bool,

    /// Leave references untouched
    #[arg(long)]
    pub no_rewrite_refs: bool,

    /// Append run statistics to a CSV file
    #[arg(long, value_name = "FILE")]
    pub stats_csv: Option<PathBuf>,
}

impl RenameFilesArgs {
    pub fn backup_choice(&self) -> Option<bool> {
        flag_pair(self.backup, self.no_backup)
    }

    pub fn rewrite_choice(&self) -> Option<bool> {
        flag_pair(self.rewrite_refs, self.no_rewrite_refs)
    }
}

fn flag_pair(yes: bool, no: bool) -> Option<bool> {
    match (yes, no) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        (false, false) => None,
    }
}
