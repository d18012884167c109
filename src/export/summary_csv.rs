//! CSV export of aggregated summary rows.

use std::{fs::File, io::BufWriter, path::Path};

use crate::{
    aggregate::AggregateRow,
    error::{Error, Result},
};

/// Fixed output column order. Downstream plotting reads these by name, so the
/// header is written even when there are no rows.
pub const SUMMARY_HEADER: [&str; 6] = [
    "game_key",
    "player_variant",
    "move_order_variant",
    "prop_superrational",
    "prop_send",
    "n_samples",
];

/// Exporter for the per-condition summary CSV.
pub struct SummaryCsvExporter;

impl SummaryCsvExporter {
    /// Write the summary CSV to `path`.
    ///
    /// Proportions serialize as decimal fractions and a `None` `prop_send`
    /// serializes as an empty field. Rows arrive already sorted from the
    /// aggregator, so output is byte-identical across re-runs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be created and
    /// [`Error::Csv`] on serialization failure.
    ///
    /// # Returns
    /// Number of rows written (excluding the header).
    pub fn export(rows: &[AggregateRow], path: &Path) -> Result<usize> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create output file '{}'", path.display()),
            source,
        })?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(BufWriter::new(file));

        writer.write_record(SUMMARY_HEADER)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush().map_err(|source| Error::Io {
            operation: format!("flush output file '{}'", path.display()),
            source,
        })?;

        Ok(rows.len())
    }
}
