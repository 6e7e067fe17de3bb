use crate::strip::StripReport;
use crate::utils::normalize_display_path;
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use std::io::Write;

/// Helper to create a styled table
fn create_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers);
    table
}

/// Print the lines a strip would remove.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_preview(writer: &mut impl Write, report: &StripReport) -> std::io::Result<()> {
    let path = normalize_display_path(&report.path);
    writeln!(
        writer,
        "{} {}",
        "[DRY-RUN] Lines that would be removed from".yellow(),
        path.bold()
    )?;

    if report.removed.is_empty() {
        writeln!(
            writer,
            "  No lines in range ({} lines in file).",
            report.original_lines
        )?;
        return Ok(());
    }

    let mut table = create_table(vec!["Line", "Content"]);
    for removed in &report.removed {
        table.add_row(vec![
            Cell::new(removed.line).fg(Color::Red),
            Cell::new(&removed.text).add_attribute(Attribute::Dim),
        ]);
    }
    writeln!(writer, "{table}")?;

    writeln!(
        writer,
        "{} {} of {} lines would be removed, {} would remain.",
        "Summary:".bold(),
        report.removed_count().to_string().red().bold(),
        report.original_lines,
        report.remaining_lines.to_string().green()
    )?;
    Ok(())
}

/// Print a one-line account of what a completed strip changed.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_verbose_summary(writer: &mut impl Write, report: &StripReport) -> std::io::Result<()> {
    writeln!(
        writer,
        "[VERBOSE] {}: {} -> {} lines ({} removed)",
        normalize_display_path(&report.path),
        report.original_lines,
        report.remaining_lines,
        report.removed_count()
    )?;
    let requested: usize = report.ranges.iter().map(crate::range::LineRange::len).sum();
    if report.removed_count() < requested {
        writeln!(
            writer,
            "[VERBOSE] {} requested lines were past the end of the file",
            requested - report.removed_count()
        )?;
    }
    Ok(())
}
