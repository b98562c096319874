//! Student entity (Aluno)

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named individual who can be enrolled in a program.
///
/// Students compare by value: two students with the same name are equal.
/// Names are taken as given, so empty or repeated names are accepted.
///
/// # Example
///
/// ```
/// use formacao_domain::Student;
///
/// let student = Student::new("Gabriel");
/// assert_eq!(student.name(), "Gabriel");
/// assert_eq!(student, Student::new("Gabriel"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Student {
    name: String,
}

impl Student {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the student's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_name() {
        assert_eq!(Student::new("Lia"), Student::new("Lia"));
        assert_ne!(Student::new("Lia"), Student::new("Lucas"));
    }

    #[test]
    fn accepts_empty_name() {
        let student = Student::new("");
        assert_eq!(student.name(), "");
    }

    #[test]
    fn displays_name() {
        assert_eq!(Student::new("Daniela").to_string(), "Daniela");
    }
}
