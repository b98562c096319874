//! Enroll students use case - appends students to a program and confirms it.

use std::sync::Arc;

use formacao_domain::{Program, ProgramUpdate, Student};

use crate::infrastructure::ports::OutputPort;

/// Enrolls students in a program and writes the confirmation message.
///
/// Zero students is a no-op: nothing is written and the roster is unchanged.
pub struct EnrollStudents {
    output: Arc<dyn OutputPort>,
}

impl EnrollStudents {
    pub fn new(output: Arc<dyn OutputPort>) -> Self {
        Self { output }
    }

    /// Enroll `students`, in order, at the end of the program's roster.
    pub fn execute<I>(&self, program: &mut Program, students: I) -> ProgramUpdate
    where
        I: IntoIterator<Item = Student>,
    {
        let update = program.enroll(students);

        match update.confirmation_message() {
            Some(message) => {
                tracing::info!(
                    program_id = %program.id(),
                    program = %program.name(),
                    enrolled = update.enrolled_count(),
                    roster_size = program.enrolled_count(),
                    "Students enrolled"
                );
                self.output.write_line(&message);
            }
            None => {
                tracing::debug!(
                    program_id = %program.id(),
                    "Enrollment called without students, roster unchanged"
                );
            }
        }

        update
    }
}
