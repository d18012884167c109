//! Export functionality for aggregated results
//!
//! Currently supports CSV export of per-condition summary rows, the artifact
//! every downstream visualization consumes.

mod summary_csv;

pub use summary_csv::{SUMMARY_HEADER, SummaryCsvExporter};
