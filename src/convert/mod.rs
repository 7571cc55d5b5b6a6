//! Conversion core: cell grids to JSON values.
//!
//! This module provides:
//! - Grid reconstruction from unordered cell records (`grid`)
//! - Record building with typed value coercion (`records`)
//! - Document assembly and worksheet selection (`document`)
//!
//! Everything here is pure and synchronous; fetching and file output live
//! elsewhere.

pub mod document;
pub mod grid;
pub mod records;

// Re-export commonly used types and functions
pub use document::{assemble_document, SheetFilter};
pub use grid::{header_map, normalize_key, Grid, Orientation};
pub use records::build_records;

use serde_json::Value;

use crate::sheets::Cell;

/// Options controlling how a sheet's cell grid becomes JSON.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Use the first column, not the first row, as the header.
    pub vertical: bool,
    /// Emit positional arrays instead of named objects.
    pub list_only: bool,
    /// Key each sheet's output by this field's value instead of listing
    /// records in order.
    pub hash: Option<String>,
}

/// Convert one sheet's cells into its JSON result.
pub fn convert_sheet(cells: Vec<Cell>, options: &ConvertOptions) -> Value {
    let orientation = if options.vertical {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    };

    let grid = Grid::from_cells(cells, orientation);
    let headers = grid
        .header_row()
        .map(|row| header_map(row, orientation))
        .unwrap_or_default();

    build_records(&grid, &headers, options)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::sheets::Cell;

    fn cell(row: u32, col: u32, value: &str) -> Cell {
        Cell {
            row,
            col,
            value: Some(value.to_string()),
            numeric_value: None,
        }
    }

    #[test]
    fn test_vertical_mode_uses_first_column_as_header() {
        let cells = vec![
            cell(1, 1, "Name"),
            cell(2, 1, "Age"),
            cell(1, 2, "Ann"),
            Cell {
                row: 2,
                col: 2,
                value: Some("30".to_string()),
                numeric_value: Some(30.0),
            },
        ];

        let options = ConvertOptions {
            vertical: true,
            ..Default::default()
        };

        let result = convert_sheet(cells, &options);
        assert_eq!(result, json!([{ "name": "Ann", "age": 30 }]));
    }
}
