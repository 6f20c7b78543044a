//! # Rendicion
//!
//! Batch processor for daily receipt reports: classifies each receipt by
//! payment channel, accumulates cash and card totals, and exports a
//! reordered income sheet.
//!
//! ## Design Principles
//!
//! - **Lenient parsing**: malformed amount cells resolve to 0.0 instead
//!   of aborting the batch
//! - **Synonym-tolerant columns**: known header spellings resolve by
//!   candidate lists; missing columns default to empty
//! - **Deterministic output**: records export in reverse read order under
//!   a fixed ten-column header
//!
//! ## Example
//!
//! ```
//! use rendicion::ReceiptProcessor;
//!
//! let csv = "Nro. recibo,Importe,Medio de cobranza\n1,\"1.234,56\",Caja Seccional\n";
//! let mut processor = ReceiptProcessor::new();
//! processor.process_reader(csv.as_bytes()).unwrap();
//! assert_eq!(processor.cash_total(), 1234.56);
//! ```

pub mod amount;
pub mod encoding;
pub mod error;
pub mod processor;
pub mod record;
pub mod report;

pub use amount::{format_amount, parse_amount};
pub use encoding::Encoding;
pub use error::{ReportError, Result};
pub use processor::ReceiptProcessor;
pub use record::{NormalizedRecord, OUTPUT_COLUMNS};
