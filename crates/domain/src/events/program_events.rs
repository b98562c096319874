//! Program mutation outcomes.

use crate::entities::Student;
use crate::ProgramId;

/// Outcome of enrolling students in a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgramUpdate {
    /// Students were appended to the roster, in the order given.
    StudentsEnrolled {
        program_id: ProgramId,
        program_name: String,
        students: Vec<Student>,
    },
    /// The enrollment call carried no students; the roster is unchanged.
    NoStudentsEnrolled { program_id: ProgramId },
}

impl ProgramUpdate {
    /// Confirmation text for a successful enrollment.
    ///
    /// Returns `None` when no students were enrolled, so an empty name list
    /// is never reported.
    pub fn confirmation_message(&self) -> Option<String> {
        match self {
            ProgramUpdate::StudentsEnrolled {
                program_name,
                students,
                ..
            } => {
                let names = students
                    .iter()
                    .map(Student::name)
                    .collect::<Vec<_>>()
                    .join(", ");
                Some(format!(
                    "Matrícula realizada com sucesso para: {} na formação {}.",
                    names, program_name
                ))
            }
            ProgramUpdate::NoStudentsEnrolled { .. } => None,
        }
    }

    /// Number of students added by this mutation.
    pub fn enrolled_count(&self) -> usize {
        match self {
            ProgramUpdate::StudentsEnrolled { students, .. } => students.len(),
            ProgramUpdate::NoStudentsEnrolled { .. } => 0,
        }
    }
}
