//! Closed classification types shared across the domain.

pub mod level;

pub use level::Level;
