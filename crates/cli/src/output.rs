//! Plain-text invoice listing.

use std::io::{self, Write};

use invoicer_invoicing::Invoice;

const DESCRIPTION_HEADER: &str = "Description";

/// Write `invoice` as an aligned text table.
pub fn write_text(out: &mut impl Write, invoice: &Invoice) -> io::Result<()> {
    let recipient = invoice.recipient();
    writeln!(out, "Invoice {}", invoice.number())?;
    writeln!(out, "Date:     {}", invoice.date())?;
    writeln!(out, "Bill to:  {}", recipient.name)?;
    writeln!(
        out,
        "Event:    {}, {}",
        recipient.event_date, recipient.event_place
    )?;
    writeln!(out)?;

    let desc_width = invoice
        .items()
        .iter()
        .map(|item| item.description().chars().count())
        .chain([DESCRIPTION_HEADER.len()])
        .max()
        .unwrap_or(DESCRIPTION_HEADER.len());

    writeln!(
        out,
        "{:>3}  {:<desc_width$}  {:>6}  {:>14}  {:>16}",
        "#", DESCRIPTION_HEADER, "Qty", "Unit price", "Total"
    )?;
    for item in invoice.items() {
        writeln!(
            out,
            "{:>3}  {:<desc_width$}  {:>6}  {:>14}  {:>16}",
            item.number(),
            item.description(),
            item.quantity(),
            item.unit_price(),
            item.total_price()
        )?;
    }

    let label_width = 3 + 2 + desc_width + 2 + 6 + 2 + 14;
    writeln!(
        out,
        "{:>label_width$}  {:>16}",
        "Grand total",
        invoice.grand_total()
    )?;
    Ok(())
}
