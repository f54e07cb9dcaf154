use core::fmt::Display;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use invoicer_core::{DomainResult, ValueObject};

use crate::date::format_date;
use crate::detail::{Item, parse_details};
use crate::money::Amount;
use crate::number::{InvoiceNumber, NumberSource, next_invoice_number};
use crate::text::title_case;

/// Raw invoice form fields as entered by a user.
///
/// Empty `date` / `event_date` fall back to the issue date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceRequest {
    pub date: String,
    pub client: String,
    pub event_date: String,
    pub event_place: String,
    /// One item per line: `<description> <quantity> <unit price>`.
    pub details: String,
}

/// Who the invoice is addressed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipient {
    pub name: String,
    pub event_date: String,
    pub event_place: String,
}

impl ValueObject for Recipient {}

/// A fully formatted invoice, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invoice {
    number: InvoiceNumber,
    date: String,
    recipient: Recipient,
    items: Vec<Item>,
    grand_total: Amount,
}

impl Invoice {
    pub fn number(&self) -> &InvoiceNumber {
        &self.number
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn grand_total(&self) -> Amount {
        self.grand_total
    }
}

impl ValueObject for Invoice {}

/// Build an [`Invoice`] from form fields issued at `now`.
///
/// Fails only when the detail lines are malformed; see
/// [`parse_details`](crate::detail::parse_details).
pub fn assemble_invoice<Tz, S>(
    request: &InvoiceRequest,
    now: &DateTime<Tz>,
    numbers: &S,
) -> DomainResult<Invoice>
where
    Tz: TimeZone,
    Tz::Offset: Display,
    S: NumberSource + ?Sized,
{
    let issued_on = format_date(now);
    let or_issue_date = |value: &str| {
        if value.is_empty() {
            issued_on.clone()
        } else {
            title_case(value)
        }
    };

    let (items, grand_total) = parse_details(&request.details)?.into_parts();

    let invoice = Invoice {
        number: next_invoice_number(now, numbers),
        date: or_issue_date(&request.date),
        recipient: Recipient {
            name: title_case(&request.client),
            event_date: or_issue_date(&request.event_date),
            event_place: title_case(&request.event_place),
        },
        items,
        grand_total,
    };

    tracing::debug!(
        number = %invoice.number,
        items = invoice.items.len(),
        grand_total = invoice.grand_total.value(),
        "invoice assembled"
    );

    Ok(invoice)
}
