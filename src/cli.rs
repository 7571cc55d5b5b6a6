use std::path::PathBuf;

use clap::Parser;

use crate::convert::ConvertOptions;
use crate::sheets::Credentials;
use crate::RunOptions;

/// Convert a Google Spreadsheet into structured JSON.
#[derive(Debug, Parser)]
#[command(name = "sheets2json", version)]
#[command(about = "Convert a Google Spreadsheet into structured JSON")]
pub struct Cli {
    /// Spreadsheet ID, as it appears in the document URL
    pub spreadsheet_id: String,

    /// File the JSON document is written to
    pub file: PathBuf,

    /// User to login
    #[arg(short, long)]
    pub user: Option<String>,

    /// Password to login
    #[arg(short, long)]
    pub password: Option<String>,

    /// Auth token acquired externally
    #[arg(short, long)]
    pub token: Option<String>,

    /// Type of the informed token (defaults to Bearer)
    #[arg(short = 'y', long)]
    pub tokentype: Option<String>,

    /// Worksheet name(s) to include (defaults to all worksheets)
    #[arg(short, long, value_name = "sheetname[,sheetname]", value_delimiter = ',')]
    pub worksheet: Option<Vec<String>>,

    /// Column to hash the final JSON by
    #[arg(short = 'c', long, value_name = "column")]
    pub hash: Option<String>,

    /// Use the first column as header
    #[arg(short = 'i', long)]
    pub vertical: bool,

    /// Ignore headers and just list the values in arrays
    #[arg(short, long)]
    pub list_only: bool,

    /// Beautify final JSON
    #[arg(short, long)]
    pub beautify: bool,
}

impl Cli {
    /// Resolve the parsed flags into run options.
    pub fn into_options(self) -> RunOptions {
        let credentials = if let Some(value) = self.token {
            Credentials::Token {
                value,
                scheme: self.tokentype.unwrap_or_else(|| "Bearer".to_string()),
            }
        } else if let (Some(user), Some(password)) = (self.user, self.password) {
            Credentials::Basic { user, password }
        } else {
            Credentials::None
        };

        RunOptions {
            spreadsheet_id: self.spreadsheet_id,
            file: self.file,
            credentials,
            worksheet: self.worksheet,
            beautify: self.beautify,
            convert: ConvertOptions {
                vertical: self.vertical,
                list_only: self.list_only,
                hash: self.hash,
            },
        }
    }
}
