use std::collections::{BTreeMap, HashMap};

use crate::sheets::Cell;

/// Which axis of the source grid plays the row role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Rows are rows; the first non-empty row is the header.
    #[default]
    Horizontal,
    /// Rows and columns swap; the first non-empty column is the header.
    Vertical,
}

impl Orientation {
    /// 1-based index of the cell along the row role.
    pub fn row_index(&self, cell: &Cell) -> u32 {
        match self {
            Orientation::Horizontal => cell.row,
            Orientation::Vertical => cell.col,
        }
    }

    /// 1-based index of the cell along the column role.
    pub fn col_index(&self, cell: &Cell) -> u32 {
        match self {
            Orientation::Horizontal => cell.col,
            Orientation::Vertical => cell.row,
        }
    }
}

/// A sheet's cells regrouped into ordered rows.
///
/// Buckets are keyed by 0-based row-role index and exist only for rows with
/// at least one populated cell, so genuinely empty rows stay gaps rather
/// than empty buckets.
#[derive(Debug, Default)]
pub struct Grid {
    rows: BTreeMap<u32, Vec<Cell>>,
    orientation: Orientation,
}

impl Grid {
    /// Rebuild the ordered grid from an unordered flat cell list.
    pub fn from_cells(cells: Vec<Cell>, orientation: Orientation) -> Self {
        let mut rows: BTreeMap<u32, Vec<Cell>> = BTreeMap::new();

        for cell in cells {
            let row_index = orientation.row_index(&cell).saturating_sub(1);
            rows.entry(row_index).or_default().push(cell);
        }

        for bucket in rows.values_mut() {
            // Stable sort: equal column indices keep arrival order, a data
            // anomaly rather than a contract.
            bucket.sort_by_key(|cell| orientation.col_index(cell));
        }

        Grid { rows, orientation }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The first non-empty row; consumed as the header in every mode.
    pub fn header_row(&self) -> Option<&[Cell]> {
        self.rows.values().next().map(Vec::as_slice)
    }

    /// All rows after the header row, in ascending row order.
    pub fn data_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.values().skip(1).map(Vec::as_slice)
    }
}

/// Derive the column-index → property-name map from the header row.
///
/// Only non-empty string header cells name a column; numeric or blank
/// header cells leave their column unnamed, and unnamed columns are dropped
/// in object mode.
pub fn header_map(row: &[Cell], orientation: Orientation) -> HashMap<u32, String> {
    let mut map = HashMap::new();

    for cell in row {
        if cell.numeric_value.is_some() {
            continue;
        }
        let Some(raw) = cell.value.as_deref() else {
            continue;
        };
        if raw.is_empty() {
            continue;
        }
        map.insert(orientation.col_index(cell), normalize_key(raw));
    }

    map
}

/// Normalize a header name or worksheet title into a property key.
///
/// Trims, lower-cases, treats `-` and space as separators, and re-joins the
/// tokens camel-case style: `"First Name"` → `"firstName"`.
pub fn normalize_key(raw: &str) -> String {
    let trimmed = raw.trim();

    // A name without separators that does not start upper-case is already
    // in key form; passing it through keeps normalization idempotent.
    if !trimmed.contains([' ', '-']) && !trimmed.chars().next().is_some_and(char::is_uppercase) {
        return trimmed.to_string();
    }

    let lowered = trimmed.to_lowercase();
    let mut key = String::with_capacity(lowered.len());

    for (index, token) in lowered
        .split([' ', '-'])
        .filter(|token| !token.is_empty())
        .enumerate()
    {
        if index == 0 {
            key.push_str(token);
        } else {
            let mut chars = token.chars();
            if let Some(first) = chars.next() {
                key.extend(first.to_uppercase());
                key.push_str(chars.as_str());
            }
        }
    }

    key
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(row: u32, col: u32, value: &str) -> Cell {
        Cell {
            row,
            col,
            value: Some(value.to_string()),
            numeric_value: None,
        }
    }

    fn numeric_cell(row: u32, col: u32, value: f64) -> Cell {
        Cell {
            row,
            col,
            value: Some(value.to_string()),
            numeric_value: Some(value),
        }
    }

    #[test]
    fn test_grid_orders_unordered_cells() {
        let cells = vec![cell(2, 2, "d"), cell(1, 2, "b"), cell(2, 1, "c"), cell(1, 1, "a")];
        let grid = Grid::from_cells(cells, Orientation::Horizontal);

        let header: Vec<_> = grid
            .header_row()
            .unwrap()
            .iter()
            .map(|c| c.value.clone().unwrap())
            .collect();
        assert_eq!(header, vec!["a", "b"]);

        let data: Vec<Vec<_>> = grid
            .data_rows()
            .map(|row| row.iter().map(|c| c.value.clone().unwrap()).collect())
            .collect();
        assert_eq!(data, vec![vec!["c", "d"]]);
    }

    #[test]
    fn test_grid_skips_leading_empty_rows() {
        // Rows 1 and 2 are empty; row 3 must become the header.
        let cells = vec![cell(4, 1, "Ann"), cell(3, 1, "Name")];
        let grid = Grid::from_cells(cells, Orientation::Horizontal);

        let header = grid.header_row().unwrap();
        assert_eq!(header[0].value.as_deref(), Some("Name"));
        assert_eq!(grid.data_rows().count(), 1);
    }

    #[test]
    fn test_grid_keeps_interior_gaps_out_of_data_rows() {
        // Row 3 is a gap: it produces no bucket at all.
        let cells = vec![cell(1, 1, "Name"), cell(2, 1, "Ann"), cell(4, 1, "Ben")];
        let grid = Grid::from_cells(cells, Orientation::Horizontal);

        let data: Vec<_> = grid
            .data_rows()
            .map(|row| row[0].value.clone().unwrap())
            .collect();
        assert_eq!(data, vec!["Ann", "Ben"]);
    }

    #[test]
    fn test_empty_sheet_has_no_rows() {
        let grid = Grid::from_cells(Vec::new(), Orientation::Horizontal);
        assert!(grid.header_row().is_none());
        assert_eq!(grid.data_rows().count(), 0);
    }

    #[test]
    fn test_vertical_orientation_swaps_roles() {
        // First column is the header, each further column is a record.
        let cells = vec![cell(1, 1, "Name"), cell(1, 2, "Ann"), cell(2, 1, "Age")];
        let grid = Grid::from_cells(cells, Orientation::Vertical);

        let header: Vec<_> = grid
            .header_row()
            .unwrap()
            .iter()
            .map(|c| c.value.clone().unwrap())
            .collect();
        assert_eq!(header, vec!["Name", "Age"]);

        let data: Vec<Vec<_>> = grid
            .data_rows()
            .map(|row| row.iter().map(|c| c.value.clone().unwrap()).collect())
            .collect();
        assert_eq!(data, vec![vec!["Ann"]]);
    }

    #[test]
    fn test_header_map_skips_numeric_and_blank_cells() {
        let row = vec![
            cell(1, 1, "First Name"),
            numeric_cell(1, 2, 30.0),
            cell(1, 3, ""),
            cell(1, 4, "Age"),
        ];

        let map = header_map(&row, Orientation::Horizontal);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&1).map(String::as_str), Some("firstName"));
        assert_eq!(map.get(&4).map(String::as_str), Some("age"));
        assert!(!map.contains_key(&2));
        assert!(!map.contains_key(&3));
    }

    #[test]
    fn test_normalize_key_camel_cases() {
        assert_eq!(normalize_key("First Name"), "firstName");
        assert_eq!(normalize_key("  Last--Name "), "lastName");
        assert_eq!(normalize_key("AGE"), "age");
        assert_eq!(normalize_key("zip code 2"), "zipCode2");
        assert_eq!(normalize_key("name"), "name");
    }

    #[test]
    fn test_normalize_key_is_idempotent() {
        for raw in ["First Name", "AGE", "zip code 2", "name", "a-b-c"] {
            let once = normalize_key(raw);
            assert_eq!(normalize_key(&once), once, "not idempotent for {:?}", raw);
        }
    }
}
