//! Program aggregate (Formação) - a leveled bundle of content with a roster
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: the roster can only grow through [`Program::enroll`]
//! - **Fixed contents**: content is set at construction and has no mutator
//! - **Snapshots out**: [`Program::enrolled_students`] returns an owned copy
//! - **Events from mutations**: enrolling returns a [`ProgramUpdate`]

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::entities::{EducationalContent, Student};
use crate::events::ProgramUpdate;
use crate::types::Level;
use crate::ProgramId;

/// A training program
///
/// # Invariants
///
/// - `contents` keeps the order given at construction and never changes
/// - The roster is append-only and ordered by call order, then argument order
/// - The same student may appear in the roster more than once
///
/// # Example
///
/// ```
/// use formacao_domain::{EducationalContent, Level, Program, Student};
///
/// let mut program = Program::new(
///     "Lógica de Programação Essencial",
///     Level::Basic,
///     vec![EducationalContent::new("Algoritmos")],
/// );
/// program.enroll([Student::new("Lucas")]);
///
/// assert_eq!(program.enrolled_students(), vec![Student::new("Lucas")]);
/// ```
#[derive(Debug, Clone)]
pub struct Program {
    // Identity
    id: ProgramId,

    // Core attributes
    name: String,
    level: Level,
    contents: Vec<EducationalContent>,

    // Roster (append-only)
    enrolled: Vec<Student>,
}

impl Program {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a program with an empty roster. An empty `contents` list is allowed.
    pub fn new(name: impl Into<String>, level: Level, contents: Vec<EducationalContent>) -> Self {
        Self {
            id: ProgramId::new(),
            name: name.into(),
            level,
            contents,
            enrolled: Vec::new(),
        }
    }

    // =========================================================================
    // Accessors (read-only)
    // =========================================================================

    /// Returns the program's unique identifier.
    #[inline]
    pub fn id(&self) -> ProgramId {
        self.id
    }

    /// Returns the program's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the program's difficulty level.
    #[inline]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the program's content, in construction order.
    #[inline]
    pub fn contents(&self) -> &[EducationalContent] {
        &self.contents
    }

    /// Sum of all content durations, in minutes.
    pub fn total_duration(&self) -> i64 {
        self.contents
            .iter()
            .map(|c| i64::from(c.duration().as_minutes()))
            .sum()
    }

    // =========================================================================
    // Roster Accessors
    // =========================================================================

    /// Returns a snapshot of the enrolled students.
    ///
    /// The returned `Vec` is a fresh copy: changing it does not touch the
    /// program, and later enrollments do not show up in it.
    pub fn enrolled_students(&self) -> Vec<Student> {
        self.enrolled.clone()
    }

    /// Number of roster entries, counting repeated enrollments.
    #[inline]
    pub fn enrolled_count(&self) -> usize {
        self.enrolled.len()
    }

    /// Whether the student appears in the roster at least once.
    pub fn is_enrolled(&self, student: &Student) -> bool {
        self.enrolled.contains(student)
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    /// Enroll one or more students, appending them in the order given.
    ///
    /// Duplicates are not filtered. An empty input leaves the roster unchanged
    /// and yields [`ProgramUpdate::NoStudentsEnrolled`].
    pub fn enroll<I>(&mut self, students: I) -> ProgramUpdate
    where
        I: IntoIterator<Item = Student>,
    {
        let added: Vec<Student> = students.into_iter().collect();
        if added.is_empty() {
            return ProgramUpdate::NoStudentsEnrolled {
                program_id: self.id,
            };
        }

        self.enrolled.extend(added.iter().cloned());
        ProgramUpdate::StudentsEnrolled {
            program_id: self.id,
            program_name: self.name.clone(),
            students: added,
        }
    }
}

// ============================================================================
// Serde Implementation
// ============================================================================

/// Intermediate format for serialization that exposes the roster as data.
#[derive(Serialize, Deserialize)]
struct ProgramWireFormat {
    id: ProgramId,
    name: String,
    level: Level,
    contents: Vec<EducationalContent>,
    #[serde(default)]
    enrolled: Vec<Student>,
}

impl Serialize for Program {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let wire = ProgramWireFormat {
            id: self.id,
            name: self.name.clone(),
            level: self.level,
            contents: self.contents.clone(),
            enrolled: self.enrolled.clone(),
        };
        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Program {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = ProgramWireFormat::deserialize(deserializer)?;

        Ok(Program {
            id: wire.id,
            name: wire.name,
            level: wire.level,
            contents: wire.contents,
            enrolled: wire.enrolled,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
