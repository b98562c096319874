//! Educational content entity (Conteúdo Educacional)

use serde::{Deserialize, Serialize};

use crate::value_objects::DurationMinutes;

/// A named unit of learning material with a duration in minutes.
///
/// Content created with [`EducationalContent::new`] lasts 60 minutes;
/// use [`EducationalContent::with_duration`] to set another length.
///
/// # Example
///
/// ```
/// use formacao_domain::EducationalContent;
///
/// let intro = EducationalContent::new("Algoritmos");
/// assert_eq!(intro.duration().as_minutes(), 60);
///
/// let short = EducationalContent::new("Pensamento Computacional").with_duration(45);
/// assert_eq!(short.duration().as_minutes(), 45);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EducationalContent {
    name: String,
    #[serde(default)]
    duration: DurationMinutes,
}

impl EducationalContent {
    /// Create content with the default duration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            duration: DurationMinutes::default(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the content's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the content's duration.
    #[inline]
    pub fn duration(&self) -> DurationMinutes {
        self.duration
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Set the content's duration. Any value is accepted.
    pub fn with_duration(mut self, minutes: impl Into<DurationMinutes>) -> Self {
        self.duration = minutes.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_duration() {
        let content = EducationalContent::new("Algorithms");
        assert_eq!(content.name(), "Algorithms");
        assert_eq!(content.duration().as_minutes(), 60);
    }

    #[test]
    fn with_duration_overrides_default() {
        let content = EducationalContent::new("Computational Thinking").with_duration(45);
        assert_eq!(content.duration().as_minutes(), 45);
    }

    #[test]
    fn negative_duration_is_kept() {
        let content = EducationalContent::new("Odd").with_duration(-10);
        assert_eq!(content.duration().as_minutes(), -10);
    }

    #[test]
    fn missing_duration_deserializes_to_default() {
        let content: EducationalContent =
            serde_json::from_str(r#"{"name":"Algorithms"}"#).unwrap();
        assert_eq!(content.duration().as_minutes(), 60);
    }
}
