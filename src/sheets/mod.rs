//! Fetch layer for the Google Sheets API.
//!
//! This module provides:
//! - Worksheet metadata and cell records (`types`)
//! - Response decoding for the v4 REST API (`api`)
//! - An authenticated HTTP client with concurrent per-sheet fetching (`client`)

pub mod api;
pub mod client;
pub mod types;

// Re-export commonly used types
pub use client::SheetsClient;
pub use types::{Cell, Credentials, SheetCells, Worksheet};
