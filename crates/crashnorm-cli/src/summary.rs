use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: skipped (dry run)"),
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Populated"),
        header_cell("Missing"),
        header_cell("Coverage"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    let total = result.records;
    for (field, populated) in result.counts.rows() {
        let missing = total.saturating_sub(populated);
        table.add_row(vec![
            Cell::new(field).fg(Color::Blue),
            Cell::new(populated),
            missing_cell(missing),
            coverage_cell(populated, total),
        ]);
    }
    table.add_row(vec![
        Cell::new("RECORDS")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");
}

fn missing_cell(missing: usize) -> Cell {
    if missing > 0 {
        Cell::new(missing).fg(Color::Yellow)
    } else {
        dim_cell(missing)
    }
}

fn coverage_cell(populated: usize, total: usize) -> Cell {
    if total == 0 {
        return dim_cell("-");
    }
    let percent = (populated as f64 / total as f64) * 100.0;
    let text = format!("{percent:.1}%");
    if populated == total {
        Cell::new(text).fg(Color::Green)
    } else if percent < 50.0 {
        Cell::new(text).fg(Color::Yellow)
    } else {
        Cell::new(text)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(34)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
