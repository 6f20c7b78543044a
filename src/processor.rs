//! Single-pass read-and-classify stage.
//!
//! Reads the whole report into memory as normalized records while
//! accumulating the two channel totals. Rows are never rejected for bad
//! data; only fully blank rows, and rows the CSV layer cannot
//! materialize, are dropped and counted as invalid.

use crate::amount::parse_amount;
use crate::encoding::Encoding;
use crate::error::{ReportError, Result};
use crate::record::{NormalizedRecord, RawRow, AMOUNT_COLUMNS, CHANNEL_COLUMNS};
use csv::ReaderBuilder;
use log::{debug, warn};
use std::fs;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// The channel literal that routes an amount into the cash total.
/// Matched against the trimmed, lower-cased cell value; every other
/// channel counts as card/other.
pub const CASH_CHANNEL: &str = "caja seccional";

/// Reads the receipts report and accumulates per-channel totals.
///
/// Records are kept in input order here; the export stage reverses them.
#[derive(Debug, Default)]
pub struct ReceiptProcessor {
    records: Vec<NormalizedRecord>,
    cash_total: f64,
    card_total: f64,
    rows_read: usize,
    rows_invalid: usize,
}

impl ReceiptProcessor {
    /// Creates an empty processor with zeroed totals.
    pub fn new() -> Self {
        ReceiptProcessor::default()
    }

    /// Opens, decodes and processes the report at `path`.
    ///
    /// A missing file maps to [`ReportError::InputNotFound`] so the CLI
    /// can report it distinctly; every other failure propagates as-is.
    pub fn process_file(&mut self, path: &Path, encoding: Encoding) -> Result<()> {
        let bytes = fs::read(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ReportError::InputNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ReportError::Io(e)
            }
        })?;
        let text = encoding.decode(bytes)?;
        self.process_reader(text.as_bytes())
    }

    /// Processes CSV data with a header row from any reader.
    ///
    /// Column order in the header is irrelevant; cells are resolved by
    /// name with known synonym spellings. Ragged rows are accepted.
    pub fn process_reader<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);
        let headers = csv_reader.headers()?.clone();

        for (row_idx, result) in csv_reader.records().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row
            self.rows_read += 1;

            let fields = match result {
                Ok(fields) => fields,
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row_num, e);
                    self.rows_invalid += 1;
                    continue;
                }
            };

            let row = RawRow::new(&headers, &fields);
            if row.is_blank() {
                self.rows_invalid += 1;
                continue;
            }

            self.process_row(&row, row_num);
        }

        Ok(())
    }

    /// Classifies one row and appends its normalized form.
    fn process_row(&mut self, row: &RawRow<'_>, row_num: usize) {
        let channel = row.first_non_empty(&CHANNEL_COLUMNS).trim().to_string();
        let amount = parse_amount(row.first_non_empty(&AMOUNT_COLUMNS));

        if channel.to_lowercase() == CASH_CHANNEL {
            self.cash_total += amount;
            debug!("Row {}: {} -> cash ({})", row_num, amount, channel);
        } else {
            self.card_total += amount;
            debug!("Row {}: {} -> card/other ({})", row_num, amount, channel);
        }

        self.records
            .push(NormalizedRecord::from_row(row, amount, &channel));
    }

    /// Post-scan status line, printed once after the whole file is read.
    pub fn scan_summary(&self) -> String {
        format!(
            "Leídas: {} filas. Registros válidos: {}. Filas inválidas/ignoras: {}",
            self.rows_read,
            self.records.len(),
            self.rows_invalid
        )
    }

    /// Normalized records in input order.
    pub fn records(&self) -> &[NormalizedRecord] {
        &self.records
    }

    /// Sum of amounts whose channel is the cash literal.
    pub fn cash_total(&self) -> f64 {
        self.cash_total
    }

    /// Sum of amounts for every other channel.
    pub fn card_total(&self) -> f64 {
        self.card_total
    }

    /// Data rows the CSV layer yielded, valid or not.
    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    /// Blank or unreadable rows that were skipped.
    pub fn rows_invalid(&self) -> usize {
        self.rows_invalid
    }
}
