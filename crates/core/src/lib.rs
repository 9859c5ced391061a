//! `kinship-core` — shared domain building blocks.
//!
//! Error model, identity and value-object markers used by the money, jobs,
//! people and family crates. Pure domain code (no IO).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::PersonId;
pub use value_object::ValueObject;
