//! Console output for the rename flow.

use super::apply::ApplyOutcome;
use super::planner::RenamePlan;
use super::rewrite::RewriteOutcome;
use colored::*;
use console::style;

pub fn print_referenced(names: &[String]) {
    println!("Referenced files found: {}", names.len());
    for name in names {
        println!("  - {}", name);
    }
}

pub fn print_plan(plan: &RenamePlan) {
    println!();
    println!("{}", "FILE RENAME REPORT".green().bold());
    println!("{}", "=".repeat(60).green());
    println!("Files to rename: {}", plan.entries.len());

    for (position, entry) in plan.entries.iter().enumerate() {
        let marker = if entry.referenced { "" } else { "  (unreferenced)" };
        println!(
            "{:>3}. {} -> {}{}",
            position + 1,
            entry.old_name.red(),
            entry.new_name.green(),
            marker.dimmed()
        );
    }

    if !plan.conflicts.is_empty() {
        println!();
        println!(
            "{}",
            format!("Naming conflicts resolved: {}", plan.conflicts.len())
                .yellow()
                .bold()
        );
        for conflict in &plan.conflicts {
            println!(
                "  {} <- {}",
                conflict.new_name.yellow(),
                conflict.old_names.join(", ")
            );
        }
    }
}

pub fn print_outcome(outcome: &ApplyOutcome, rewrite: Option<&RewriteOutcome>) {
    println!();
    println!("{}", "Process complete!".green().bold());
    println!(
        "Files renamed: {}",
        style(outcome.completed.len()).green().bold()
    );
    if outcome.backups_created > 0 {
        println!("Backups created: {}", style(outcome.backups_created).cyan());
    }
    if let Some(rewrite) = rewrite {
        if rewrite.index_updated {
            println!("References updated in the index");
        }
        if rewrite.sitemap_updated {
            println!("References updated in the sitemap");
        }
    }
}
