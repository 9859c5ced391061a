//! Family domain module (households built from a married couple).

pub mod family;

pub use family::{CHILD_BEARING_AGE, Family, HOUSEHOLD_HOURS};
