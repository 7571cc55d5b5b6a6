//! Serialization and file output for the assembled document.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};
use tracing::info;

use crate::error::Error;

/// Serialize the document, 4-space-indented when `beautify` is set.
pub fn render_document(document: &Value, beautify: bool) -> Result<String, Error> {
    if !beautify {
        return Ok(document.to_string());
    }

    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    document.serialize(&mut serializer)?;

    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Render the document and write it to the output file.
pub fn write_document(path: &Path, document: &Value, beautify: bool) -> Result<(), Error> {
    let rendered = render_document(document, beautify)?;
    fs::write(path, rendered)?;

    info!("wrote {}", path.display());
    Ok(())
}
