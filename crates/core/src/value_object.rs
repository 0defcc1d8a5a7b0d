//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values; two
/// `Quantity(3)` are the same thing, while two orders with identical lines are
/// still different orders (see [`crate::Entity`]).
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct GradeKey {
///     reference: String,
///     color: String,
/// }
///
/// impl ValueObject for GradeKey {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
