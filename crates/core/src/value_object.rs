//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: they are defined entirely by their
/// attribute values and are immutable once built. A derived stock keeping unit
/// code is one; the stock line it identifies is an [`Entity`](crate::Entity).
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Code(String);
///
/// impl ValueObject for Code {}
///
/// assert_eq!(Code("BASSP".into()), Code("BASSP".into()));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
