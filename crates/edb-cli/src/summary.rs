//! Console summary of a lint run.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use edb_model::IssueSeverity;

use crate::commands::CheckResult;

pub fn print_summary(result: &CheckResult) {
    println!("Files: {}", result.file_count);
    println!("Records: {}", result.record_count);
    for path in &result.report_paths {
        println!("Report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rule"),
        header_cell("Errors"),
        header_cell("Warnings"),
        header_cell("Result"),
    ]);
    apply_summary_table_style(&mut table);

    for report in &result.outcome.reports {
        table.add_row(vec![
            Cell::new(&report.rule),
            count_cell(report.error_count(), Color::Red),
            count_cell(report.warning_count(), Color::Yellow),
            result_cell(report.passed()),
        ]);
    }
    println!("{table}");

    for report in &result.outcome.reports {
        for issue in &report.issues {
            match issue.severity {
                IssueSeverity::Error => eprintln!("ERROR: {}", issue.message),
                IssueSeverity::Warning => eprintln!("WARNING: {}", issue.message),
            }
        }
    }

    if result.outcome.passed() {
        println!("PASSED");
    } else {
        println!(
            "FAILED ({} error(s), {} warning(s))",
            result.outcome.error_count(),
            result.outcome.warning_count()
        );
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    let cell = if count == 0 {
        Cell::new(count).fg(Color::Green)
    } else {
        Cell::new(count).fg(color)
    };
    cell.set_alignment(CellAlignment::Right)
}

fn result_cell(passed: bool) -> Cell {
    if passed {
        Cell::new("pass").fg(Color::Green)
    } else {
        Cell::new("FAIL")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}
