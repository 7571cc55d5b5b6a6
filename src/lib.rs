//! Convert a Google Spreadsheet into structured JSON.
//!
//! One-shot batch pipeline: fetch the worksheet list, fetch every selected
//! worksheet's cells concurrently, rebuild each cell grid, turn it into
//! records, merge the per-sheet results into a single document, write it to
//! a file.

pub mod cli;
pub mod convert;
pub mod error;
pub mod output;
pub mod sheets;

use std::path::PathBuf;

use tracing::info;

use convert::{assemble_document, convert_sheet, ConvertOptions, SheetFilter};
use error::Error;
use sheets::{Credentials, SheetCells, SheetsClient};

/// Everything one invocation needs.
#[derive(Debug)]
pub struct RunOptions {
    pub spreadsheet_id: String,
    /// File the JSON document is written to.
    pub file: PathBuf,
    pub credentials: Credentials,
    /// Worksheet title filter; `None` selects every worksheet.
    pub worksheet: Option<Vec<String>>,
    /// Pretty-print the output with 4-space indentation.
    pub beautify: bool,
    pub convert: ConvertOptions,
}

/// Fetch, convert and write the spreadsheet.
pub async fn run(options: RunOptions) -> Result<(), Error> {
    let RunOptions {
        spreadsheet_id,
        file,
        credentials,
        worksheet,
        beautify,
        convert,
    } = options;

    let client = SheetsClient::new(credentials)?;

    let worksheets = client.fetch_worksheets(&spreadsheet_id).await?;
    let filter = SheetFilter::new(worksheet);
    let selected: Vec<_> = worksheets
        .into_iter()
        .filter(|worksheet| filter.matches(&worksheet.title))
        .collect();

    info!("converting {} worksheet(s)", selected.len());

    let fetched = client.fetch_all(&spreadsheet_id, selected).await?;
    let results = fetched
        .into_iter()
        .map(|SheetCells { title, cells }| (title, convert_sheet(cells, &convert)))
        .collect();

    let document = assemble_document(results);
    output::write_document(&file, &document, beautify)
}
