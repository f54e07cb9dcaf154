//! Free-form invoice detail parsing.
//!
//! One line per item, tokens separated by a single space:
//!
//! ```text
//! <description words...> <quantity> <unit price>
//! ```
//!
//! The last token is the unit price, the one before it the quantity, and
//! everything earlier (rejoined with single spaces) the description. A
//! malformed line rejects the whole blob; no line is ever skipped from the
//! total.

use serde::Serialize;

use invoicer_core::{DomainError, DomainResult, MalformedReason, ValueObject};

use crate::money::Amount;

/// A single priced line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    number: usize,
    description: String,
    quantity: u64,
    unit_price: Amount,
    total_price: Amount,
}

impl Item {
    /// 1-based position among the parsed items.
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn unit_price(&self) -> Amount {
        self.unit_price
    }

    /// `quantity × unit_price`.
    pub fn total_price(&self) -> Amount {
        self.total_price
    }
}

impl ValueObject for Item {}

/// Ordered items plus their grand total.
///
/// Invariant: `grand_total` equals the sum of every item's total. It is only
/// ever computed by [`parse_details`], never set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    items: Vec<Item>,
    grand_total: Amount,
}

impl ParseResult {
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn grand_total(&self) -> Amount {
        self.grand_total
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_parts(self) -> (Vec<Item>, Amount) {
        (self.items, self.grand_total)
    }
}

impl ValueObject for ParseResult {}

/// Parse a detail blob into items and a grand total.
///
/// Lines are separated by `\n`; a trailing `\r` is tolerated. Blank lines are
/// skipped and do not consume an item number. Errors report the 1-based line
/// index in `input`, not the item number.
pub fn parse_details(input: &str) -> DomainResult<ParseResult> {
    let mut items = Vec::new();
    let mut grand_total = Amount::ZERO;

    for (index, raw) in input.split('\n').enumerate() {
        let line = index + 1;
        if raw.trim().is_empty() {
            continue;
        }

        let item = parse_line(items.len() + 1, line, raw)?;
        grand_total = grand_total
            .checked_add(item.total_price)
            .ok_or_else(|| DomainError::overflow(line))?;
        items.push(item);
    }

    Ok(ParseResult { items, grand_total })
}

fn parse_line(number: usize, line: usize, raw: &str) -> DomainResult<Item> {
    let tokens: Vec<&str> = raw.split(' ').collect();
    let n = tokens.len();
    if n < 2 {
        return Err(DomainError::malformed(
            line,
            MalformedReason::TooFewTokens { found: n },
        ));
    }

    let quantity_token = tokens[n - 2];
    let price_token = tokens[n - 1].trim_end_matches('\r');

    let quantity: u64 = quantity_token.parse().map_err(|_| {
        DomainError::malformed(
            line,
            MalformedReason::InvalidQuantity(quantity_token.to_string()),
        )
    })?;
    let unit_price: u64 = price_token.parse().map_err(|_| {
        DomainError::malformed(
            line,
            MalformedReason::InvalidUnitPrice(price_token.to_string()),
        )
    })?;

    let unit_price = Amount::new(unit_price);
    let total_price = unit_price
        .checked_mul(quantity)
        .ok_or_else(|| DomainError::overflow(line))?;

    Ok(Item {
        number,
        description: tokens[..n - 2].join(" "),
        quantity,
        unit_price,
        total_price,
    })
}
