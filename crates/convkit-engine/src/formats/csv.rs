//! CSV column alignment.
//!
//! Rows are split with a small tokenizer that honours double-quoted fields. Every cell
//! is then right-padded so that each column of the first row lines up, with two spaces
//! of slack after the widest cell.

use crate::output::Validation;

/// Extra padding after the widest cell of each column.
const COLUMN_GAP: usize = 2;

pub fn validate(input: &str) -> Validation {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Validation::invalid("Empty CSV input");
    }

    let rows: Vec<Vec<String>> = trimmed.lines().map(split_record).collect();
    Validation::formatted(align(&rows))
}

/// Splits one line on commas outside double quotes. Inside quotes `""` stands for a
/// literal quote. Fields are trimmed.
pub fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }

    fields.push(current.trim().to_string());
    fields
}

fn align(rows: &[Vec<String>]) -> String {
    let columns = rows.first().map_or(0, Vec::len);

    let widths: Vec<usize> = (0..columns)
        .map(|i| {
            rows.iter()
                .map(|row| row.get(i).map_or(0, |cell| cell.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    rows.iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(i, cell)| match widths.get(i) {
                    Some(width) => format!("{cell:<pad$}", pad = width + COLUMN_GAP),
                    None => cell.clone(),
                })
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
