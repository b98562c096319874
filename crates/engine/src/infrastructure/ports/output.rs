//! Output port for user-facing text.

/// Destination for user-facing lines of text.
///
/// Confirmation messages and reports go through this port; diagnostics go
/// through `tracing` instead.
#[cfg_attr(test, mockall::automock)]
pub trait OutputPort: Send + Sync {
    fn write_line(&self, line: &str);
}
