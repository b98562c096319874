//! Use cases - User story orchestration.
//!
//! Use cases drive domain aggregates and route their outcomes to ports.

pub mod enrollment;

pub use enrollment::EnrollStudents;
