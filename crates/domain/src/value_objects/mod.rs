//! Value objects - small immutable values compared by content

pub mod duration;

pub use duration::{DurationMinutes, DEFAULT_DURATION_MINUTES};
