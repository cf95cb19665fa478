//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, so two instances built from the same values are equal and
//! interchangeable (lookup, set membership, classification).

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ## Design Constraints
///
/// - **Clone**: values can be copied freely
/// - **Eq + Hash**: equal values must hash identically so they can key maps and sets
/// - **Debug**: values show up in logs and test failures
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Price {
///     amount_minor: u64,
///     currency: String,
/// }
///
/// impl ValueObject for Price {}
///
/// let a = Price { amount_minor: 999, currency: "USD".to_string() };
/// let b = Price { amount_minor: 999, currency: "USD".to_string() };
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + Eq + core::hash::Hash + core::fmt::Debug {}
