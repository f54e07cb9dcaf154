//! Whole-unit amounts and their grouped currency rendering.
//!
//! Amounts are plain integers in the smallest unit the invoice deals in; there
//! is no decimal part and no currency symbol. Rendering groups digits in
//! triples from the right, joined by `.` (`1234567` → `1.234.567`).

use core::fmt;

use serde::{Serialize, Serializer};

use invoicer_core::{DomainError, DomainResult, ValueObject};

/// Separator placed between digit groups.
pub const GROUP_SEPARATOR: char = '.';

/// Non-negative whole-unit amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    pub fn checked_mul(self, factor: u64) -> Option<Amount> {
        self.0.checked_mul(factor).map(Amount)
    }
}

impl ValueObject for Amount {}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl TryFrom<i64> for Amount {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Amount)
            .map_err(|_| DomainError::InvalidCurrencyInput(value))
    }
}

/// Zero renders as `"0"`, never as an empty string.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let len = digits.len();
        let mut grouped = String::with_capacity(len + len / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i != 0 && (len - i) % 3 == 0 {
                grouped.push(GROUP_SEPARATOR);
            }
            grouped.push(ch);
        }
        f.pad(&grouped)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Render `value` as a grouped currency string.
///
/// Negative input is rejected with [`DomainError::InvalidCurrencyInput`].
pub fn format_currency(value: i64) -> DomainResult<String> {
    Amount::try_from(value).map(|amount| amount.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn groups_digits_in_triples_from_the_right() {
        assert_eq!(format_currency(7).unwrap(), "7");
        assert_eq!(format_currency(999).unwrap(), "999");
        assert_eq!(format_currency(1000).unwrap(), "1.000");
        assert_eq!(format_currency(2400).unwrap(), "2.400");
        assert_eq!(format_currency(100_000).unwrap(), "100.000");
        assert_eq!(format_currency(1_234_567).unwrap(), "1.234.567");
    }

    #[test]
    fn zero_renders_as_explicit_zero() {
        assert_eq!(format_currency(0).unwrap(), "0");
        assert_eq!(Amount::ZERO.to_string(), "0");
    }

    #[test]
    fn largest_amount_is_grouped() {
        assert_eq!(Amount::new(u64::MAX).to_string(), "18.446.744.073.709.551.615");
    }

    #[test]
    fn negative_input_is_rejected() {
        let err = format_currency(-1).unwrap_err();
        assert_eq!(err, DomainError::InvalidCurrencyInput(-1));
    }

    #[test]
    fn display_respects_width_for_aligned_output() {
        assert_eq!(format!("{:>8}", Amount::new(2400)), "   2.400");
    }

    #[test]
    fn checked_arithmetic_reports_overflow() {
        assert_eq!(Amount::new(150).checked_mul(4), Some(Amount::new(600)));
        assert_eq!(Amount::new(u64::MAX).checked_add(Amount::new(1)), None);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: removing the separators gives back the original digits.
        #[test]
        fn stripping_separators_round_trips(value in 0i64..=i64::MAX) {
            let formatted = format_currency(value).unwrap();
            let digits: String = formatted.chars().filter(|c| *c != GROUP_SEPARATOR).collect();
            prop_assert_eq!(digits.parse::<i64>().unwrap(), value);
        }

        /// Property: every group after the first has exactly three digits.
        #[test]
        fn inner_groups_have_three_digits(value in any::<u64>()) {
            let formatted = Amount::new(value).to_string();
            let groups: Vec<&str> = formatted.split(GROUP_SEPARATOR).collect();
            prop_assert!(!groups[0].is_empty() && groups[0].len() <= 3);
            prop_assert!(!groups[0].starts_with('0') || formatted == "0");
            for group in &groups[1..] {
                prop_assert_eq!(group.len(), 3);
            }
        }
    }
}
