use std::collections::HashMap;

use serde_json::{Map, Number, Value};

use crate::sheets::Cell;

use super::grid::{Grid, Orientation};
use super::ConvertOptions;

/// Assemble the grid's data rows into the sheet's JSON result.
///
/// Returns an array of records, or — when hashing is requested and list-only
/// is not — an object keyed by the hash field's value, later rows
/// overwriting earlier ones at the same key.
pub fn build_records(
    grid: &Grid,
    headers: &HashMap<u32, String>,
    options: &ConvertOptions,
) -> Value {
    let hash_field = options.hash.as_deref().filter(|_| !options.list_only);

    let mut list = Vec::new();
    let mut hashed = Map::new();

    for row in grid.data_rows() {
        let Some(record) = build_row(row, headers, grid.orientation(), options) else {
            continue;
        };

        match hash_field {
            Some(field) => {
                hashed.insert(hash_key(record.get(field)), record);
            }
            None => list.push(record),
        }
    }

    if hash_field.is_some() {
        Value::Object(hashed)
    } else {
        Value::Array(list)
    }
}

/// Build one row's record, or `None` when no cell contributed a value.
fn build_row(
    row: &[Cell],
    headers: &HashMap<u32, String>,
    orientation: Orientation,
    options: &ConvertOptions,
) -> Option<Value> {
    let mut fields = Map::new();
    let mut slots: Vec<Value> = Vec::new();
    let mut has_values = false;

    for cell in row {
        let column = orientation.col_index(cell);

        let name = if options.list_only {
            None
        } else {
            match headers.get(&column) {
                Some(name) => Some(name.clone()),
                // Columns without a header name carry no data in object mode.
                None => continue,
            }
        };

        let Some(value) = coerce_value(cell) else {
            continue;
        };
        has_values = true;

        match name {
            Some(name) => {
                fields.insert(name, value);
            }
            None => {
                let index = column.saturating_sub(1) as usize;
                if slots.len() <= index {
                    slots.resize(index + 1, Value::Null);
                }
                slots[index] = value;
            }
        }
    }

    if !has_values {
        return None;
    }

    Some(if options.list_only {
        Value::Array(slots)
    } else {
        Value::Object(fields)
    })
}

/// Coerce a cell into a JSON value.
///
/// A defined numeric value wins over the raw string, `TRUE`/`FALSE`
/// literals become booleans, non-empty strings pass through, and anything
/// else contributes nothing.
fn coerce_value(cell: &Cell) -> Option<Value> {
    if let Some(numeric) = cell.numeric_value {
        return json_number(numeric);
    }

    match cell.value.as_deref() {
        Some("TRUE") => Some(Value::Bool(true)),
        Some("FALSE") => Some(Value::Bool(false)),
        Some(raw) if !raw.is_empty() => Some(Value::String(raw.to_string())),
        _ => None,
    }
}

/// Integral values serialize without a fractional part (`30`, not `30.0`).
fn json_number(value: f64) -> Option<Value> {
    if value.fract() == 0.0 && value.abs() <= i64::MAX as f64 {
        return Some(Value::from(value as i64));
    }
    Number::from_f64(value).map(Value::Number)
}

/// Object keys must be strings: a string field value is used verbatim, any
/// other value uses its JSON rendering, and a missing field keys as "null".
fn hash_key(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => Value::Null.to_string(),
    }
}
