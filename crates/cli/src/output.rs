//! Terminal output for a finished run

use colored::Colorize;
use page_lib::GenerationSummary;

/// Print the status line for a run, warning when the table is empty
pub fn print_summary(summary: &GenerationSummary) {
    if summary.samples == 0 {
        print_warning("No metric samples available, wrote an empty table");
    }
    print_success(&summary_line(summary));
}

fn summary_line(summary: &GenerationSummary) -> String {
    format!(
        "Wrote {} ({} rows, {})",
        summary.path.display(),
        summary.samples,
        format_bytes(summary.bytes as u64)
    )
}

fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

/// Format a page size for display
fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;

    if bytes >= KB {
        format!("{:.2}Ki", bytes as f64 / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}
