//! Value object trait: equality by value, not identity.
//!
//! Everything the invoicing core produces (amounts, items, parse results,
//! invoice numbers) is a value object: built once per request, never mutated,
//! compared by its contents.

/// Marker trait for value objects.
///
/// Implementors are **immutable** and **compared by value**. To "change" one,
/// build a new one. Because they hold no shared state, they can be handed to
/// concurrent callers freely.
///
/// The trait requires:
/// - **Clone**: values are passed around by copy/clone, not by reference to a store
/// - **PartialEq**: two values with the same contents are the same value
/// - **Debug**: values show up in logs and test failures
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Amount(u64);
///
/// impl ValueObject for Amount {}
///
/// assert_eq!(Amount(2_400), Amount(2_400));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
