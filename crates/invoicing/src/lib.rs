//! Invoicing core: detail parsing and invoice formatting.
//!
//! This crate turns a free-form detail blob into priced line items and
//! renders amounts, dates and invoice numbers as display strings. It is
//! deterministic domain logic only (no IO, no HTTP, no templates); rendering
//! the result into a document belongs to the caller.

pub mod date;
pub mod detail;
pub mod invoice;
pub mod money;
pub mod number;
pub mod text;

pub use date::{format_date, today};
pub use detail::{Item, ParseResult, parse_details};
pub use invoice::{Invoice, InvoiceRequest, Recipient, assemble_invoice};
pub use money::{Amount, format_currency};
pub use number::{
    ClockDigits, InvoiceNumber, MonotonicCounter, NumberSource, generate_invoice_number,
    next_invoice_number,
};
pub use text::title_case;
