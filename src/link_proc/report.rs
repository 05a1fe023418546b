//! Console report and the original/cleaned URL report file.

use crate::error::Error;
use crate::model::CleanedLink;
use crate::utils;
use colored::*;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub fn print_report(links: &[CleanedLink]) {
    let changed: Vec<&CleanedLink> = links.iter().filter(|l| l.needs_update()).collect();

    println!();
    println!("{}", "LINK CLEANING REPORT".green().bold());
    println!("{}", "=".repeat(60).green());
    println!("Links found:          {}", links.len());
    println!("Links needing update: {}", changed.len());

    for link in &changed {
        println!();
        println!(
            "  {} [{}]",
            utils::file_name_string(&link.document).bold(),
            link.source
        );
        println!("    {}", link.original.red());
        println!("    {}", link.cleaned.green());
    }

    if changed.is_empty() {
        println!();
        println!("{}", "All links are already clean!".green());
    }
}

/// Write the original/cleaned pairs to the report file. Always written,
/// header included, even when nothing needs cleaning.
pub fn write_report_file(path: &Path, links: &[CleanedLink]) -> Result<(), Error> {
    let mut file = File::create(path).map_err(|err| Error::write_failure(path, err))?;
    write_report(&mut file, links).map_err(|err| Error::write_failure(path, err))
}

fn write_report(out: &mut dyn Write, links: &[CleanedLink]) -> std::io::Result<()> {
    writeln!(out, "ORIGINAL URLS -> CLEANED URLS")?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out)?;
    for link in links.iter().filter(|l| l.needs_update()) {
        writeln!(out, "Document: {}", utils::file_name_string(&link.document))?;
        writeln!(out, "Kind: {}", link.source)?;
        writeln!(out, "Original: {}", link.original)?;
        writeln!(out, "Cleaned: {}", link.cleaned)?;
        writeln!(out, "{}", "-".repeat(30))?;
    }
    Ok(())
}
