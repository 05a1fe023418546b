use clap::{CommandFactory, Parser};
use dotenv::dotenv;
use limpa_links::app_config;
use limpa_links::cli::{Cli, Commands};
use limpa_links::link_proc::{self, CleanLinksOptions};
use limpa_links::rename_proc::{self, RenameOptions};
use limpa_links::{logging, utils};
use std::path::{Path, PathBuf};
use tracing::error;

fn main() {
    dotenv().ok();

    let _guard = logging::init_logger();

    utils::hide_cursor();

    let args = Cli::parse();

    match args.command {
        Some(Commands::CleanLinks(args)) => {
            let folder = folder_or_cwd(args.folder.clone());
            let opts = CleanLinksOptions {
                update: args.update_choice(),
                backup: args.backup_choice(),
                stats_csv: args.stats_csv,
            };
            if let Err(err) = run_clean_links(&folder, opts) {
                error!("Error: {}", err);
            }
        }
        Some(Commands::RenameFiles(args)) => {
            let folder = folder_or_cwd(args.folder.clone());
            let opts = RenameOptions {
                assume_yes: args.yes,
                backup: args.backup_choice(),
                rewrite_refs: args.rewrite_choice(),
                stats_csv: args.stats_csv,
            };
            if let Err(err) = run_rename_files(&folder, opts) {
                error!("Error: {}", err);
            }
        }
        Some(Commands::PrintConfig) => match app_config::load_configuration() {
            Ok(config) => println!("{:#?}", config),
            Err(err) => error!("Error loading configuration: {}", err),
        },
        None => {
            let _ = Cli::command().print_long_help();
        }
    }

    utils::show_cursor();
}

fn run_clean_links(folder: &Path, opts: CleanLinksOptions) -> Result<(), limpa_links::Error> {
    let config = app_config::load_configuration()?;
    link_proc::run(folder, &config, &opts)?;
    Ok(())
}

fn run_rename_files(folder: &Path, opts: RenameOptions) -> Result<(), limpa_links::Error> {
    let config = app_config::load_configuration()?;
    rename_proc::run(folder, &config, &opts)?;
    Ok(())
}

fn folder_or_cwd(folder: Option<PathBuf>) -> PathBuf {
    folder.unwrap_or_else(|| PathBuf::from("."))
}
