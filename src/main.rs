//! Rendicion CLI
//!
//! Reads a receipts report, splits the totals by payment channel and
//! writes the income sheet alongside a console summary.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- -i Reporte_Recibos3.csv -o planilla_ingreso.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use clap::Parser;
use rendicion::{report, Encoding, ReceiptProcessor, ReportError, Result};
use std::io;
use std::path::PathBuf;
use std::process;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Procesar CSV de rendición y exportar planilla de ingresos"
)]
struct Cli {
    /// Archivo CSV de entrada
    #[arg(short, long, default_value = "Reporte_Recibos3.csv")]
    input: PathBuf,

    /// Archivo CSV de salida
    #[arg(short, long, default_value = "planilla_ingreso.csv")]
    output: PathBuf,

    /// Encoding del archivo CSV
    #[arg(short, long, default_value = "utf-8")]
    encoding: String,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        match e {
            ReportError::InputNotFound { path } => {
                println!("Archivo no encontrado: {}", path.display());
                process::exit(2);
            }
            other => {
                eprintln!("Error: {}", other);
                process::exit(1);
            }
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let encoding = Encoding::from_label(&cli.encoding)?;

    let mut processor = ReceiptProcessor::new();
    processor.process_file(&cli.input, encoding)?;
    println!("{}", processor.scan_summary());

    report::export_to_file(processor.records(), &cli.output, encoding)?;
    report::write_summary(processor.cash_total(), processor.card_total(), io::stdout())?;

    Ok(())
}
