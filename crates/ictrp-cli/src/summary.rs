//! Run summary printing.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ictrp_cli::pipeline::RunResult;
use ictrp_normalize::vocab;

pub fn print_summary(result: &RunResult) {
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: stdout"),
    }
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("Rows read"),
        header_cell("Excluded"),
        header_cell("Documents"),
        header_cell("Duplicate IDs"),
    ]);
    let duplicate_cell = if result.duplicates.is_empty() {
        Cell::new(0).set_alignment(CellAlignment::Right)
    } else {
        Cell::new(result.duplicates.len())
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
            .set_alignment(CellAlignment::Right)
    };
    table.add_row(vec![
        Cell::new(result.rows_read).set_alignment(CellAlignment::Right),
        Cell::new(result.excluded).set_alignment(CellAlignment::Right),
        Cell::new(result.documents).set_alignment(CellAlignment::Right),
        duplicate_cell,
    ]);
    println!("{table}");

    if !result.duplicates.is_empty() {
        println!("Duplicate identifiers (reported, not removed):");
        for duplicate in &result.duplicates {
            println!(
                "  {} ({} occurrences)",
                duplicate.identifier, duplicate.occurrences
            );
        }
    }
}

pub fn print_registries() {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![header_cell("Code"), header_cell("Registry")]);
    for (code, name) in vocab::known_registries() {
        table.add_row(vec![Cell::new(code), Cell::new(name)]);
    }
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
