//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Why a single detail line could not be turned into an item.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// The line needs at least a quantity and a unit price.
    #[error("expected at least 2 space-separated tokens, found {found}")]
    TooFewTokens { found: usize },

    /// The second-to-last token is not a base-10 unsigned integer.
    #[error("quantity {0:?} is not a whole number")]
    InvalidQuantity(String),

    /// The last token is not a base-10 unsigned integer.
    #[error("unit price {0:?} is not a whole number")]
    InvalidUnitPrice(String),
}

/// Domain-level error.
///
/// Every variant is a per-request condition: nothing here is fatal to a
/// long-running host, and each carries enough context (line index, offending
/// token or value) to build a user-facing message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A detail line could not be parsed. `line` is the 1-based index in the input.
    #[error("malformed detail line {line}: {reason}")]
    MalformedLine { line: usize, reason: MalformedReason },

    /// Currency formatting only accepts non-negative amounts.
    #[error("cannot format negative amount {0} as currency")]
    InvalidCurrencyInput(i64),

    /// A line total or the running grand total no longer fits in 64 bits.
    #[error("amount overflow at detail line {line}")]
    AmountOverflow { line: usize },

    /// A value failed validation (e.g. unknown configuration value).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn malformed(line: usize, reason: MalformedReason) -> Self {
        Self::MalformedLine { line, reason }
    }

    pub fn overflow(line: usize) -> Self {
        Self::AmountOverflow { line }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// The 1-based input line this error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedLine { line, .. } | Self::AmountOverflow { line } => Some(*line),
            Self::InvalidCurrencyInput(_) | Self::Validation(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_line_message_names_line_and_token() {
        let err = DomainError::malformed(3, MalformedReason::InvalidQuantity("four".to_string()));
        assert_eq!(
            err.to_string(),
            "malformed detail line 3: quantity \"four\" is not a whole number"
        );
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn currency_errors_carry_no_line() {
        let err = DomainError::InvalidCurrencyInput(-5);
        assert_eq!(err.line(), None);
        assert!(err.to_string().contains("-5"));
    }
}
