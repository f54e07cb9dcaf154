//! `invoicer` command-line front end.
//!
//! Reads a detail blob from a file or stdin, assembles the invoice and prints
//! it as JSON (for a renderer) or as a plain text listing.

pub mod config;
pub mod output;

use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;

use invoicer_invoicing::{InvoiceRequest, assemble_invoice};

pub use config::{Numbering, OutputFormat};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "invoicer",
    version,
    about = "Turn free-form invoice details into a priced invoice"
)]
pub struct Cli {
    /// File with one `<description> <quantity> <unit price>` line per item (`-` reads stdin)
    #[arg(long, short = 'd', default_value = "-")]
    pub details: String,

    /// Client name
    #[arg(long, default_value = "")]
    pub client: String,

    /// Invoice date (defaults to today)
    #[arg(long, default_value = "")]
    pub date: String,

    /// Event date (defaults to today)
    #[arg(long, default_value = "")]
    pub event_date: String,

    /// Event place
    #[arg(long, default_value = "")]
    pub event_place: String,

    /// Where invoice sequence numbers come from
    #[arg(long, value_enum, env = "INVOICER_NUMBERING", default_value_t = Numbering::Clock)]
    pub numbering: Numbering,

    /// First sequence handed out by `--numbering counter`
    #[arg(long, env = "INVOICER_COUNTER_START", default_value_t = 1)]
    pub counter_start: u32,

    /// Output format
    #[arg(long, short = 'o', value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,
}

impl Cli {
    fn request(&self, details: String) -> InvoiceRequest {
        InvoiceRequest {
            date: self.date.clone(),
            client: self.client.clone(),
            event_date: self.event_date.clone(),
            event_place: self.event_place.clone(),
            details,
        }
    }
}

/// Run the command, writing the invoice to stdout.
pub fn run(cli: &Cli) -> Result<()> {
    let details = read_details(&cli.details)?;
    let stdout = std::io::stdout();
    run_with(cli, details, &mut stdout.lock())
}

/// Assemble an invoice from already-loaded `details` and write it to `out`.
pub fn run_with(cli: &Cli, details: String, out: &mut impl Write) -> Result<()> {
    let source = cli.numbering.source(cli.counter_start);
    let request = cli.request(details);

    let invoice = assemble_invoice(&request, &Local::now(), &*source)
        .context("could not build invoice from details")?;

    tracing::info!(
        number = %invoice.number(),
        items = invoice.items().len(),
        grand_total = %invoice.grand_total(),
        "invoice ready"
    );

    match cli.output {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &invoice)
                .context("failed to serialize invoice")?;
            writeln!(out)?;
        }
        OutputFormat::Text => output::write_text(out, &invoice)?,
    }
    Ok(())
}

fn read_details(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read details from stdin")?;
        return Ok(buf);
    }

    std::fs::read_to_string(Path::new(path))
        .with_context(|| format!("failed to read details from {path}"))
}
