use serde::Deserialize;

use super::types::Cell;

/// Subset of the Sheets API `spreadsheets.get` response.
#[derive(Debug, Deserialize)]
pub struct Spreadsheet {
    #[serde(default)]
    pub sheets: Vec<Sheet>,
}

#[derive(Debug, Deserialize)]
pub struct Sheet {
    #[serde(default)]
    pub properties: SheetProperties,
    #[serde(default)]
    pub data: Vec<GridData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SheetProperties {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridData {
    /// 0-based row the first `row_data` entry describes.
    #[serde(default)]
    pub start_row: u32,
    /// 0-based column the first entry of each row describes.
    #[serde(default)]
    pub start_column: u32,
    #[serde(default)]
    pub row_data: Vec<RowData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowData {
    #[serde(default)]
    pub values: Vec<CellData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellData {
    pub formatted_value: Option<String>,
    pub effective_value: Option<ExtendedValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedValue {
    pub number_value: Option<f64>,
    pub string_value: Option<String>,
    pub bool_value: Option<bool>,
}

/// Flatten a sheet's grid data into cell records.
///
/// Grid positions with neither a formatted value nor a numeric effective
/// value yield no record, so wholly empty rows stay absent from the output.
pub fn flatten_grid(data: &[GridData]) -> Vec<Cell> {
    let mut cells = Vec::new();

    for grid in data {
        for (row_offset, row) in grid.row_data.iter().enumerate() {
            let row_index = grid.start_row + row_offset as u32 + 1;

            for (col_offset, cell) in row.values.iter().enumerate() {
                let col_index = grid.start_column + col_offset as u32 + 1;
                let value = cell.formatted_value.clone().filter(|v| !v.is_empty());
                let numeric = cell.effective_value.as_ref().and_then(|v| v.number_value);

                if value.is_none() && numeric.is_none() {
                    continue;
                }

                cells.push(Cell {
                    row: row_index,
                    col: col_index,
                    value,
                    numeric_value: numeric,
                });
            }
        }
    }

    cells
}
