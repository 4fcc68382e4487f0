use crate::card::structs::{CardRow, LocationCard};
use crate::error::RenderError;
use std::io::Write;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Writes the card as four aligned text columns.
///
/// Per line: label A, value A, label B, value B. Labels are right-aligned
/// and values left-aligned within their column, each column padded to its
/// widest cell. With `bold_labels` the label cells are wrapped in ANSI bold
/// after padding, so the escape bytes never skew the alignment. A column
/// shorter than its sibling renders blank cells.
pub fn write_card<W: Write>(
    card: &LocationCard,
    bold_labels: bool,
    out: &mut W,
) -> Result<(), RenderError> {
    let label_a = column_width(&card.column_a, |row| &row.label);
    let value_a = column_width(&card.column_a, |row| &row.value);
    let label_b = column_width(&card.column_b, |row| &row.label);

    let rows = card.column_a.len().max(card.column_b.len());
    for index in 0..rows {
        let (la, va) = cell(&card.column_a, index);
        let (lb, vb) = cell(&card.column_b, index);
        let la = style_label(&format!("{la:>label_a$}"), bold_labels);
        let lb = style_label(&format!("{lb:>label_b$}"), bold_labels);
        let line = format!("{la} {va:<value_a$}  {lb} {vb}");
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

fn column_width<F>(rows: &[CardRow], field: F) -> usize
where
    F: Fn(&CardRow) -> &String,
{
    rows.iter().map(|row| field(row).len()).max().unwrap_or(0)
}

fn cell(rows: &[CardRow], index: usize) -> (&str, &str) {
    rows.get(index)
        .map_or(("", ""), |row| (row.label.as_str(), row.value.as_str()))
}

fn style_label(padded: &str, bold: bool) -> String {
    if bold {
        format!("{BOLD}{padded}{RESET}")
    } else {
        padded.to_string()
    }
}
