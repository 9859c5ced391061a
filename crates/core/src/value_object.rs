//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity** and are **immutable**: to "modify" one,
/// build a new one. `Money { amount: 100, currency: USD }` is a value object;
/// a `Person` is an entity.
///
/// ```ignore
/// let m1 = Money::new(100, "USD");
/// let m2 = Money::new(100, "USD");
/// assert_eq!(m1, m2);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
