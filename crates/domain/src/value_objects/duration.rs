//! Content duration in minutes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Duration assigned to content created without an explicit one
pub const DEFAULT_DURATION_MINUTES: i32 = 60;

/// Length of a piece of educational content, in minutes.
///
/// Any integer is accepted, including zero and negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DurationMinutes(i32);

impl DurationMinutes {
    pub fn new(minutes: i32) -> Self {
        Self(minutes)
    }

    /// Returns the number of minutes.
    pub fn as_minutes(&self) -> i32 {
        self.0
    }
}

impl Default for DurationMinutes {
    fn default() -> Self {
        Self(DEFAULT_DURATION_MINUTES)
    }
}

impl fmt::Display for DurationMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.0)
    }
}

impl From<i32> for DurationMinutes {
    fn from(minutes: i32) -> Self {
        Self(minutes)
    }
}

impl From<DurationMinutes> for i32 {
    fn from(duration: DurationMinutes) -> i32 {
        duration.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_sixty_minutes() {
        assert_eq!(DurationMinutes::default().as_minutes(), 60);
    }

    #[test]
    fn accepts_zero_and_negative() {
        assert_eq!(DurationMinutes::new(0).as_minutes(), 0);
        assert_eq!(DurationMinutes::new(-15).as_minutes(), -15);
    }

    #[test]
    fn displays_with_unit() {
        assert_eq!(DurationMinutes::new(45).to_string(), "45 min");
    }

    #[test]
    fn serializes_as_plain_number() {
        assert_eq!(serde_json::to_string(&DurationMinutes::new(90)).unwrap(), "90");
    }
}
