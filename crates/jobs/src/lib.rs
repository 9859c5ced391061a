//! Jobs domain module (compensation, income and raises).

pub mod job;

pub use job::{Compensation, Job};
