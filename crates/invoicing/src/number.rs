//! Invoice numbers.
//!
//! An invoice number is `INV/<month>/<sequence>` with the sequence padded to
//! three digits. Where the sequence comes from is a [`NumberSource`]'s
//! business: the core only formats it.
//!
//! [`ClockDigits`] keeps the historical scheme (both digits taken from the
//! current second). It collides whenever two invoices land in the same
//! second bucket and must not be used as a key. [`MonotonicCounter`] is the
//! in-process alternative; anything that needs uniqueness across processes
//! should allocate sequences from its own store and implement the trait.

use core::sync::atomic::{AtomicU32, Ordering};

use chrono::{DateTime, Datelike, NaiveDateTime, TimeZone, Timelike};
use serde::Serialize;

use invoicer_core::ValueObject;

/// Formatted invoice number, e.g. `INV/3/077`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct InvoiceNumber(String);

impl InvoiceNumber {
    /// Format a month (1-12) and sequence into an invoice number.
    pub fn format(month: u32, sequence: u32) -> Self {
        Self(format!("INV/{month}/{sequence:03}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for InvoiceNumber {}

impl core::fmt::Display for InvoiceNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Supplies the sequence part of an invoice number.
pub trait NumberSource {
    /// Sequence for an invoice issued at local wall-clock time `at`.
    fn next_sequence(&self, at: &NaiveDateTime) -> u32;
}

/// Historical clock-derived numbering: `<s><s>` where `s = second % 10`,
/// with `00` bumped to `01`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockDigits;

impl NumberSource for ClockDigits {
    fn next_sequence(&self, at: &NaiveDateTime) -> u32 {
        let first = at.second() % 10;
        let mut second = at.second() % 10;
        if first == 0 && second == 0 {
            second = 1;
        }
        first * 10 + second
    }
}

/// In-process increasing sequence, safe to share between threads.
///
/// Wraps around after `u32::MAX`.
#[derive(Debug)]
pub struct MonotonicCounter {
    next: AtomicU32,
}

impl MonotonicCounter {
    pub fn new(start: u32) -> Self {
        Self {
            next: AtomicU32::new(start),
        }
    }
}

impl Default for MonotonicCounter {
    fn default() -> Self {
        Self::new(1)
    }
}

impl NumberSource for MonotonicCounter {
    fn next_sequence(&self, _at: &NaiveDateTime) -> u32 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

/// Number an invoice issued at `now` using `source` for the sequence.
///
/// The month is taken from `now` in its own time zone.
pub fn next_invoice_number<Tz, S>(now: &DateTime<Tz>, source: &S) -> InvoiceNumber
where
    Tz: TimeZone,
    S: NumberSource + ?Sized,
{
    let at = now.naive_local();
    InvoiceNumber::format(at.month(), source.next_sequence(&at))
}

/// Clock-derived invoice number, `INV/<month>/0<d><d>`. Not unique.
pub fn generate_invoice_number<Tz: TimeZone>(now: &DateTime<Tz>) -> InvoiceNumber {
    next_invoice_number(now, &ClockDigits)
}
