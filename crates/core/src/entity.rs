//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// A vending machine is an entity: its contents change every simulated day,
/// but it stays the same machine.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
