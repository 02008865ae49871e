//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two values with the same attributes are
/// equal. Container specifications and beverage kinds are value objects; a
/// beverage sitting in a machine is not, because its remaining life changes.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
