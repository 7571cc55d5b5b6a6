use std::time::Duration;

use futures::future;
use tracing::{debug, info};

use crate::error::Error;

use super::api::{flatten_grid, Spreadsheet};
use super::types::{Cell, Credentials, SheetCells, Worksheet};

const API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Fields requested for a cell fetch, trimmed to what conversion needs.
const CELL_FIELDS: &str =
    "sheets.data(startRow,startColumn,rowData.values(formattedValue,effectiveValue))";

/// HTTP client for the Google Sheets API.
#[derive(Debug)]
pub struct SheetsClient {
    client: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl SheetsClient {
    pub fn new(credentials: Credentials) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: API_BASE.to_string(),
            credentials,
        })
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let mut request = self.client.get(url).header("Accept", "application/json");

        match &self.credentials {
            Credentials::None => {}
            Credentials::Token { value, scheme } => {
                request = request.header("Authorization", format!("{} {}", scheme, value));
            }
            Credentials::Basic { user, password } => {
                request = request.basic_auth(user, Some(password.as_str()));
            }
        }

        request
    }

    /// Fetch the title of every worksheet in the spreadsheet.
    pub async fn fetch_worksheets(&self, spreadsheet_id: &str) -> Result<Vec<Worksheet>, Error> {
        let url = format!("{}/{}", self.base_url, spreadsheet_id);
        let response = self
            .get(&url)
            .query(&[("fields", "sheets.properties.title")])
            .send()
            .await?;

        let spreadsheet: Spreadsheet = check_status(response).await?.json().await?;
        let worksheets: Vec<Worksheet> = spreadsheet
            .sheets
            .into_iter()
            .map(|sheet| Worksheet {
                title: sheet.properties.title,
            })
            .collect();

        info!("spreadsheet has {} worksheet(s)", worksheets.len());
        Ok(worksheets)
    }

    /// Fetch every populated cell of one worksheet.
    pub async fn fetch_cells(&self, spreadsheet_id: &str, title: &str) -> Result<Vec<Cell>, Error> {
        let url = format!("{}/{}", self.base_url, spreadsheet_id);
        let response = self
            .get(&url)
            .query(&[
                ("ranges", quote_range(title).as_str()),
                ("includeGridData", "true"),
                ("fields", CELL_FIELDS),
            ])
            .send()
            .await?;

        let spreadsheet: Spreadsheet = check_status(response).await?.json().await?;
        let cells = spreadsheet
            .sheets
            .first()
            .map(|sheet| flatten_grid(&sheet.data))
            .unwrap_or_default();

        debug!("worksheet '{}': {} populated cell(s)", title, cells.len());
        Ok(cells)
    }

    /// Fetch the cells of all given worksheets concurrently and wait for
    /// every fetch to settle. The first error fails the whole batch; no
    /// partial results are delivered.
    pub async fn fetch_all(
        &self,
        spreadsheet_id: &str,
        worksheets: Vec<Worksheet>,
    ) -> Result<Vec<SheetCells>, Error> {
        let fetches = worksheets.into_iter().map(|worksheet| async move {
            let cells = self.fetch_cells(spreadsheet_id, &worksheet.title).await?;
            Ok(SheetCells {
                title: worksheet.title,
                cells,
            })
        });

        future::try_join_all(fetches).await
    }
}

/// Quote a worksheet title for use as an A1 range reference.
fn quote_range(title: &str) -> String {
    format!("'{}'", title.replace('\'', "''"))
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, Error> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(Error::Auth { status, message });
    }

    Err(Error::Api { status, message })
}
