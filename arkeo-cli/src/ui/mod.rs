//! Terminal output for the human-readable (non `--json`) mode

use anyhow::Result;
use colored::Colorize;
use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::Duration;

/// Labels are padded to this width so values line up in detail views.
const LABEL_WIDTH: usize = 20;

const RULE_WIDTH: usize = 60;

pub fn success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Section title for a query result.
pub fn header(text: &str) {
    println!("\n{}", text.bold().underline());
}

/// One labelled field of a detail view.
pub fn key_value(key: &str, value: &str) {
    let label = format!("{:<width$}", format!("{}:", key), width = LABEL_WIDTH + 1);
    println!("  {} {}", label.cyan(), value);
}

/// Horizontal rule, narrowed to the terminal when it is smaller.
pub fn separator() {
    let width = match Term::stdout().size_checked() {
        Some((_, cols)) => (cols as usize).min(RULE_WIDTH),
        None => RULE_WIDTH,
    };
    println!("{}", "─".repeat(width).dimmed());
}

/// Closing lines of a list: the count, and the continuation key when the
/// gateway has more pages.
pub fn list_footer(count: usize, noun: &str, next_key: Option<&str>) {
    separator();
    success(&format!("{} {}(s)", count, noun));
    if let Some(key) = next_key {
        info(&format!("More results: --key {}", key));
    }
}

/// Spinner on stderr while a gateway request is in flight.
///
/// Hidden when stderr is not a terminal so piped output stays clean.
pub fn spinner(message: &str) -> ProgressBar {
    if !Term::stderr().is_term() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg} {elapsed:.dim}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "));
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Print any serializable value as pretty JSON on stdout.
pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_json_reports_unserializable_values() {
        assert!(json(&serde_json::json!({"id": "42"})).is_ok());

        let mut tuple_keys = BTreeMap::new();
        tuple_keys.insert((1u8, 2u8), "x");
        assert!(json(&tuple_keys).is_err());
    }
}
