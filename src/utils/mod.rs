use crate::error::Error;
use colored::*;
use std::io::{self, Write};
use std::path::Path;

pub mod prompt;

pub fn hide_cursor() {
    print!("\x1B[?25l");
    io::stdout().flush().unwrap();
}

pub fn show_cursor() {
    print!("\x1B[?25h");
    io::stdout().flush().unwrap();
}

/// Basename as an owned string. Lossy conversion is fine here: plans and
/// reports deal in display names.
pub fn file_name_string(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Errors section shared by both flows' console output.
pub fn print_errors(errors: &[Error]) {
    if errors.is_empty() {
        return;
    }
    println!();
    println!("{}", format!("Errors: {}", errors.len()).red().bold());
    for error in errors {
        println!("  - {}", error.to_string().red());
    }
}
