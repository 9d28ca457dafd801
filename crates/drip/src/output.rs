//! Terminal output utilities
//!
//! Status lines go to stdout, problems to stderr. `--quiet` silences
//! everything except errors and warnings.

use console::style;
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Suppress success, info, header and tree output
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Print a success message
pub fn success(msg: &str) {
    if !is_quiet() {
        println!("{} {}", style("✓").green().bold(), msg);
    }
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Print a warning message
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Print an info message
pub fn info(msg: &str) {
    if !is_quiet() {
        println!("{} {}", style("ℹ").blue().bold(), msg);
    }
}

/// Print a header
pub fn header(msg: &str) {
    if !is_quiet() {
        println!("\n{}", style(msg).bold().underlined());
    }
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    if !is_quiet() {
        println!("  {}: {}", style(key).dim(), value);
    }
}

/// Print pre-rendered tree lines, dimming the connectors
pub fn tree(lines: &[String]) {
    if is_quiet() {
        return;
    }
    for line in lines {
        let split = line
            .char_indices()
            .find(|(_, c)| !matches!(c, '│' | '├' | '└' | '─' | ' '))
            .map(|(i, _)| i)
            .unwrap_or(line.len());
        let (connectors, label) = line.split_at(split);
        println!("  {}{}", style(connectors).dim(), label);
    }
    println!();
}
