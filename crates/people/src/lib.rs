//! People domain module (individuals, employment and marriage).
//!
//! Persons are shared by reference ([`SharedPerson`]). Spouse links are
//! non-owning so two married persons never keep each other alive.

pub mod person;

pub use person::{MIN_MARRIAGE_AGE, MIN_WORKING_AGE, Person, SharedPerson};
