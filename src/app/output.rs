//! Terminal section formatting shared by the interactive workflows.

use std::path::Path;

use crate::app::commands::finalize::FinalizeReport;

/// Print the application banner.
pub fn print_header(title: &str) {
    println!("{}", "═".repeat(60));
    println!("  {title}");
    println!("{}", "═".repeat(60));
    println!();
}

/// Print a numbered workflow section header.
pub fn print_section(title: &str) {
    println!();
    println!("{}", "─".repeat(60));
    println!("  {title}");
    println!("{}", "─".repeat(60));
    println!();
}

/// Format the end-of-workflow summary.
pub fn format_success_message(report: &FinalizeReport, output_dir: &Path) -> String {
    let mut lines =
        vec![String::new(), "═".repeat(60), "  ✓ POST READY".to_string(), "═".repeat(60), String::new()];

    if let Some(path) = &report.image_saved {
        lines.push(format!("✓ Image saved: {}", path.display()));
    }
    if report.clipboard_copied {
        lines.push("✓ Post text copied to clipboard".to_string());
    }
    if let Some(id) = &report.history_id {
        lines.push(format!("✓ Logged to history (ID: {id})"));
    }

    lines.push(String::new());
    lines.push("TO POST ON WHATSAPP:".to_string());
    lines.push("  1. Open WhatsApp Desktop or Web".to_string());
    lines.push("  2. Go to the meditation updates channel".to_string());
    lines.push("  3. Click attachment icon → Select image from:".to_string());
    lines.push(format!("     {}", output_dir.display()));
    lines.push("  4. Paste text (Cmd+V) in caption field".to_string());
    lines.push("  5. Send!".to_string());
    lines.push(String::new());
    lines.push("═".repeat(60));

    lines.join("\n")
}
