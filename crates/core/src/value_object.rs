//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are compared by their attribute values.
/// To "modify" one, build a new value (e.g. via a `with_*` helper).
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct PostalCode(String);
///
/// impl ValueObject for PostalCode {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
