//! Row access and the normalized output record.
//!
//! Input headers drift across report exports: the channel column has two
//! known spellings and the amount column sometimes carries a trailing
//! space. Cells are therefore looked up by candidate name lists with an
//! empty-string default instead of fixed positions.

use crate::amount::format_amount;
use csv::StringRecord;
use serde::Serialize;

/// Accepted spellings of the payment-channel column, in lookup order.
pub const CHANNEL_COLUMNS: [&str; 2] = ["Medio de cobranza", "Medio de cobro"];

/// Accepted spellings of the amount column. The second entry keeps the
/// trailing space some exports carry in the header.
pub const AMOUNT_COLUMNS: [&str; 2] = ["Importe", "Importe "];

/// Column order of the exported income sheet.
pub const OUTPUT_COLUMNS: [&str; 10] = [
    "Nro. recibo",
    "Fecha recibo",
    "Nombre",
    "Nota crédito",
    "Referencia",
    "Lote",
    "Cupon",
    "Importe",
    "Medio de cobranza",
    "Usuario alta",
];

/// A borrowed view of one data row joined with the header record.
///
/// Ragged rows are tolerated: a cell whose column index falls past the
/// end of this particular row resolves like a missing column.
pub struct RawRow<'a> {
    headers: &'a StringRecord,
    fields: &'a StringRecord,
}

impl<'a> RawRow<'a> {
    pub fn new(headers: &'a StringRecord, fields: &'a StringRecord) -> Self {
        RawRow { headers, fields }
    }

    /// Returns the cell under the exact column name, if the column exists
    /// and the row is long enough.
    pub fn value(&self, column: &str) -> Option<&'a str> {
        let idx = self.headers.iter().position(|h| h == column)?;
        self.fields.get(idx)
    }

    /// Returns the cell under `column`, or `""` when absent.
    pub fn value_or_default(&self, column: &str) -> &'a str {
        self.value(column).unwrap_or("")
    }

    /// Returns the first non-empty cell among the candidate columns, or
    /// `""` when no candidate has a value.
    pub fn first_non_empty(&self, columns: &[&str]) -> &'a str {
        columns
            .iter()
            .filter_map(|c| self.value(c))
            .find(|v| !v.is_empty())
            .unwrap_or("")
    }

    /// A row is blank when every cell is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|f| f.trim().is_empty())
    }
}

/// One row of the income sheet.
///
/// Field order matches [`OUTPUT_COLUMNS`]. `Lote` and `Cupon` have no
/// source column and stay empty. Immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedRecord {
    /// Receipt number, copied verbatim (`Nro. recibo`)
    #[serde(rename = "Nro. recibo")]
    pub receipt_number: String,

    /// Receipt date, copied verbatim (`Fecha recibo`)
    #[serde(rename = "Fecha recibo")]
    pub receipt_date: String,

    /// Payer name, copied verbatim (`Nombre`)
    #[serde(rename = "Nombre")]
    pub name: String,

    /// Credit note reference, copied verbatim (`Nota crédito`)
    #[serde(rename = "Nota crédito")]
    pub credit_note: String,

    /// Free-form reference, copied verbatim (`Referencia`)
    #[serde(rename = "Referencia")]
    pub reference: String,

    /// Batch column of the sheet; always empty (`Lote`)
    #[serde(rename = "Lote")]
    pub batch: String,

    /// Coupon column of the sheet; always empty (`Cupon`)
    #[serde(rename = "Cupon")]
    pub coupon: String,

    /// Parsed amount rendered with two decimals (`Importe`)
    #[serde(rename = "Importe")]
    pub amount: String,

    /// Trimmed payment channel (`Medio de cobranza`)
    #[serde(rename = "Medio de cobranza")]
    pub channel: String,

    /// User who entered the receipt, copied verbatim (`Usuario alta`)
    #[serde(rename = "Usuario alta")]
    pub created_by: String,
}

impl NormalizedRecord {
    /// Builds the output row from an input row plus the already-parsed
    /// amount and trimmed channel value.
    pub fn from_row(row: &RawRow<'_>, amount: f64, channel: &str) -> Self {
        NormalizedRecord {
            receipt_number: row.value_or_default("Nro. recibo").to_string(),
            receipt_date: row.value_or_default("Fecha recibo").to_string(),
            name: row.value_or_default("Nombre").to_string(),
            credit_note: row.value_or_default("Nota crédito").to_string(),
            reference: row.value_or_default("Referencia").to_string(),
            batch: String::new(),
            coupon: String::new(),
            amount: format_amount(amount),
            channel: channel.to_string(),
            created_by: row.value_or_default("Usuario alta").to_string(),
        }
    }
}
