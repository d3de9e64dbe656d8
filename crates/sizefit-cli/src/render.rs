//! Table rendering with comfy-table.
//!
//! The grid functions compute the cell text (labels, resolved values,
//! placeholders) and are pure; the table builders layer styling and row
//! highlighting on top.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use sizefit_i18n::Messages;
use sizefit_match::{PLACEHOLDER, resolve_cell, translate_header};
use sizefit_model::{SectionRef, ShoeEntry, Unit};

/// Column order of a rendered shoe table. Differs from the converter's
/// unit order: lengths go last.
const TABLE_COLUMNS: [Unit; 5] = [Unit::UsMen, Unit::UsWomen, Unit::Uk, Unit::Eu, Unit::Cm];

/// Cell text of the shoe-layout table: one header row of unit labels
/// followed by one row per entry. Columns follow the first entry's fields;
/// gaps render as the placeholder.
pub fn shoe_grid(entries: &[ShoeEntry], messages: &Messages) -> Vec<Vec<String>> {
    let columns: Vec<Unit> = match entries.first() {
        Some(first) => TABLE_COLUMNS
            .into_iter()
            .filter(|unit| first.value(*unit).is_some())
            .collect(),
        None => Vec::new(),
    };

    let mut grid = vec![
        columns
            .iter()
            .map(|unit| messages.unit_label(*unit).to_string())
            .collect::<Vec<_>>(),
    ];
    for entry in entries {
        grid.push(
            columns
                .iter()
                .map(|unit| entry.value(*unit).unwrap_or(PLACEHOLDER).to_string())
                .collect(),
        );
    }
    grid
}

/// Cell text of one clothing-layout section: headers are translated through
/// the locale dictionary, cells resolved through the header resolver.
pub fn clothing_grid(section: &SectionRef<'_>, messages: &Messages) -> Vec<Vec<String>> {
    let mut grid = vec![
        section
            .headers
            .iter()
            .map(|header| translate_header(header, &messages.table_headers).to_string())
            .collect::<Vec<_>>(),
    ];
    for row in section.rows {
        grid.push(
            section
                .headers
                .iter()
                .map(|header| resolve_cell(row, header).to_string())
                .collect(),
        );
    }
    grid
}

/// Cell text of the matched-record panel: unit labels over the values the
/// record exposes.
pub fn match_grid(entry: &ShoeEntry, messages: &Messages) -> Vec<Vec<String>> {
    let columns: Vec<Unit> = TABLE_COLUMNS
        .into_iter()
        .filter(|unit| entry.value(*unit).is_some())
        .collect();
    vec![
        columns
            .iter()
            .map(|unit| messages.unit_label(*unit).to_string())
            .collect(),
        columns
            .iter()
            .map(|unit| entry.value(*unit).unwrap_or(PLACEHOLDER).to_string())
            .collect(),
    ]
}

/// Builds the shoe-layout table, highlighting the matched row when given.
pub fn shoe_table(entries: &[ShoeEntry], messages: &Messages, highlight: Option<usize>) -> Table {
    let mut grid = shoe_grid(entries, messages).into_iter();
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(header_row(grid.next().unwrap_or_default()));

    for (index, row) in grid.enumerate() {
        let highlighted = highlight == Some(index);
        table.add_row(
            row.into_iter()
                .map(|value| {
                    if highlighted {
                        Cell::new(value)
                            .fg(Color::Cyan)
                            .add_attribute(Attribute::Bold)
                    } else {
                        Cell::new(value)
                    }
                })
                .collect::<Vec<_>>(),
        );
    }

    table
}

/// Builds one clothing-layout section table.
pub fn clothing_table(section: &SectionRef<'_>, messages: &Messages) -> Table {
    let mut grid = clothing_grid(section, messages).into_iter();
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(header_row(grid.next().unwrap_or_default()));

    for row in grid {
        table.add_row(
            row.into_iter()
                .map(|value| {
                    if value == PLACEHOLDER {
                        dim_cell(value)
                    } else {
                        Cell::new(value)
                    }
                })
                .collect::<Vec<_>>(),
        );
    }

    table
}

/// Builds the matched-record panel of the converter.
pub fn match_panel(entry: &ShoeEntry, messages: &Messages) -> Table {
    let mut grid = match_grid(entry, messages).into_iter();
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(header_row(grid.next().unwrap_or_default()));
    for row in grid {
        table.add_row(
            row.into_iter()
                .map(|value| Cell::new(value).add_attribute(Attribute::Bold))
                .collect::<Vec<_>>(),
        );
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn header_row(labels: Vec<String>) -> Vec<Cell> {
    labels.iter().map(|label| header_cell(label)).collect()
}
