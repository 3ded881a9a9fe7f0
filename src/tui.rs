//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use crate::generator::GenerationSummary;
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Truncate `s` to `width` characters, marking the cut with `…`
fn fit(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Lines shown in the summary box
pub fn summary_lines(summary: &GenerationSummary, seed: Option<u64>) -> Vec<String> {
    let config = &summary.config;
    let mut lines = Vec::new();

    if let Some(path) = &summary.path {
        lines.push(format!("Output:      {}", path.display()));
    }
    lines.push(format!("Test cases:  {}", summary.lines_written));
    lines.push(format!("Vector len:  {}", config.vec_len));
    lines.push(format!(
        "Elements:    {}-bit, range 0..={}",
        config.scalar_bits,
        config.max_value()
    ));
    lines.push(format!(
        "Max dot:     {} (bound {})",
        summary
            .max_dot_product
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string()),
        config.max_dot_product()
    ));
    if let Some(seed) = seed {
        lines.push(format!("Seed:        {}", seed));
    }

    lines
}

/// Print a box summarising a generation run
pub fn print_summary(summary: &GenerationSummary, seed: Option<u64>) {
    let term_width = get_term_width();
    let max_content_width = term_width.saturating_sub(4).max(36);

    let lines = summary_lines(summary, seed);
    let content_width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(36)
        .min(max_content_width);

    let border = "─".repeat(content_width + 2);
    println!("┌{}┐", border);
    for line in &lines {
        println!("│ {:<width$} │", fit(line, content_width), width = content_width);
    }
    println!("└{}┘", border);
}

/// Print the program header
pub fn print_header() {
    let width = get_term_width().min(72);
    println!("{}", "═".repeat(width));
    println!("  Dot product test vector generator");
    println!("{}", "═".repeat(width));
    println!();
}
