//! Income-sheet export and console summary.
//!
//! The export writes the fixed ten-column header followed by the records
//! in reverse of the order they were read, so the most recent receipt
//! comes first in the sheet.

use crate::encoding::Encoding;
use crate::error::Result;
use crate::record::{NormalizedRecord, OUTPUT_COLUMNS};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Writes the income sheet to any writer.
///
/// The header is always present, even for an empty record set.
pub fn export<W: Write>(records: &[NormalizedRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(OUTPUT_COLUMNS)?;
    for record in records.iter().rev() {
        csv_writer.serialize(record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Renders the sheet in memory and writes it to `path` in the requested
/// encoding.
pub fn export_to_file(
    records: &[NormalizedRecord],
    path: &Path,
    encoding: Encoding,
) -> Result<()> {
    let mut buffer = Vec::new();
    export(records, &mut buffer)?;

    // The csv writer always produces UTF-8; re-encode for the target.
    let text = Encoding::Utf8.decode(buffer)?;
    fs::write(path, encoding.encode(&text)?)?;
    Ok(())
}

/// Formats one total for the summary block.
///
/// Strictly positive totals render as `$X.XX`. Zero and negative totals
/// collapse to the literal ` $0.00`, as the spreadsheet this tool
/// replaces did. Possibly a cosmetic bug upstream, kept as-is.
fn format_total(value: f64) -> String {
    if value > 0.0 {
        format!("${value:.2}")
    } else {
        String::from(" $0.00")
    }
}

/// Writes the end-of-run totals block: a title line, the card/other
/// total and the cash total.
pub fn write_summary<W: Write>(cash_total: f64, card_total: f64, mut out: W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Rendición del Día ---")?;
    writeln!(
        out,
        "Total Tarjeta / Aplicaciones: {}",
        format_total(card_total)
    )?;
    writeln!(
        out,
        "Total Efectivo (Caja Seccional): {}",
        format_total(cash_total)
    )?;
    Ok(())
}
