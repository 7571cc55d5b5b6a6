use serde::{Deserialize, Serialize};

/// A single populated cell of a worksheet.
///
/// Row and column indices are 1-based, matching the spreadsheet UI. Cells
/// are produced by the fetch layer and only read by the conversion core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
    /// Formatted value, as the spreadsheet displays it.
    pub value: Option<String>,
    /// Underlying numeric value, when the cell holds a number.
    pub numeric_value: Option<f64>,
}

/// Metadata for one worksheet of a spreadsheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worksheet {
    pub title: String,
}

/// A worksheet together with its fetched cells.
#[derive(Debug, Clone)]
pub struct SheetCells {
    pub title: String,
    pub cells: Vec<Cell>,
}

/// Credentials forwarded to the Sheets API.
#[derive(Debug, Clone, Default)]
pub enum Credentials {
    /// Unauthenticated access, for public spreadsheets.
    #[default]
    None,
    /// Externally acquired token, sent as `Authorization: <scheme> <value>`.
    Token { value: String, scheme: String },
    /// Username and password, sent as HTTP basic authentication.
    Basic { user: String, password: String },
}
