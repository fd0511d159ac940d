//! Two-column entity tables.
//!
//! Entities produce flat `(label, value)` rows. Consecutive rows sharing a
//! label are merged before layout, so the label prints once as a spanning
//! cell while each value keeps its own ruled row.
use comfy_table::{Cell, CellAlignment, Table, TableComponent};
use std::io::{self, Write};

/// One label/value pair, before merging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub label: String,
    pub value: String,
}

impl Row {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A run of consecutive rows with the same label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedRow {
    pub label: String,
    pub values: Vec<String>,
}

/// Group consecutive rows by label, preserving order.
pub fn merge_rows(rows: &[Row]) -> Vec<MergedRow> {
    let mut merged: Vec<MergedRow> = Vec::new();
    for row in rows {
        match merged.last_mut() {
            Some(last) if last.label == row.label => last.values.push(row.value.clone()),
            _ => merged.push(MergedRow {
                label: row.label.clone(),
                values: vec![row.value.clone()],
            }),
        }
    }
    merged
}

/// Lay out merged rows: left-aligned, ruled between rows, no bottom border.
///
/// Each value gets its own table row; only the first row of a merged group
/// carries the label. [`render`] then opens up the label column of the rules
/// inside a group so the label reads as one spanning cell.
pub fn build_table(rows: &[MergedRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::ASCII_FULL);
    table
        .set_style(TableComponent::LeftBorderIntersections, '+')
        .set_style(TableComponent::RightBorderIntersections, '+');
    for component in [
        TableComponent::BottomBorder,
        TableComponent::BottomBorderIntersections,
        TableComponent::BottomLeftCorner,
        TableComponent::BottomRightCorner,
    ] {
        table.remove_style(component);
    }
    for row in rows {
        for (index, value) in row.values.iter().enumerate() {
            let label = if index == 0 { row.label.as_str() } else { "" };
            table.add_row(vec![Cell::new(label), Cell::new(value)]);
        }
    }
    for column in table.column_iter_mut() {
        column.set_cell_alignment(CellAlignment::Left);
    }
    table
}

/// Render rows as a merged table. Writes nothing for an empty row list.
pub fn render(rows: &[Row]) -> String {
    if rows.is_empty() {
        return String::new();
    }
    let merged = merge_rows(rows);
    // One flag per table row: true when the row continues a merged group.
    let continues: Vec<bool> = merged
        .iter()
        .flat_map(|row| (0..row.values.len()).map(|index| index > 0))
        .collect();

    let mut rule = 0;
    let mut lines = Vec::new();
    for line in build_table(&merged).lines() {
        if !line.starts_with('+') {
            lines.push(line);
            continue;
        }
        // Rule `n` sits directly above table row `n`.
        if continues.get(rule).copied().unwrap_or(false) {
            lines.push(open_label_column(&line));
        } else {
            lines.push(line);
        }
        rule += 1;
    }
    lines.join("\n")
}

/// `+-----+-----+` becomes `+     +-----+`.
fn open_label_column(rule: &str) -> String {
    match rule[1..].find('+') {
        Some(offset) => {
            let split = offset + 1;
            format!("+{}{}", " ".repeat(split - 1), &rule[split..])
        }
        None => rule.to_string(),
    }
}

/// Write the rendered table followed by a newline.
pub fn write_table(out: &mut dyn Write, rows: &[Row]) -> io::Result<()> {
    let rendered = render(rows);
    if rendered.is_empty() {
        return Ok(());
    }
    writeln!(out, "{rendered}")?;
    out.flush()
}
