//! Terminal output helpers.

use colored::Colorize;

/// Prints an error message to stderr.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}
