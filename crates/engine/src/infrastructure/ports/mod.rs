//! Port traits for infrastructure boundaries.
//!
//! Ports exist for:
//! - Console output (confirmation messages and reports)

mod output;

pub use output::OutputPort;

#[cfg(test)]
pub use output::MockOutputPort;
