//! Entity trait: identity that survives state changes.

/// Entity marker + minimal interface.
///
/// Two persons with the same name and age are still different people; only
/// the identifier decides.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
