//! Sample catalog: two programs, four students, five pieces of content.

use std::sync::Arc;

use anyhow::Context;
use formacao_domain::{EducationalContent, Level, Program, Student};

use crate::config::{AppConfig, ReportFormat};
use crate::infrastructure::ports::OutputPort;
use crate::report;
use crate::use_cases::EnrollStudents;

/// Build the sample programs, enroll students and write both reports.
///
/// Each program's report follows its own enrollments. The text format closes
/// with a one-line roster summary of the second program.
///
/// Returns the programs in the order they were reported.
pub fn run(config: &AppConfig, output: Arc<dyn OutputPort>) -> anyhow::Result<Vec<Program>> {
    let enroll = EnrollStudents::new(output.clone());

    let gabriel = Student::new("Gabriel");
    let lia = Student::new("Lia");
    let daniela = Student::new("Daniela");
    let lucas = Student::new("Lucas");

    let mut kotlin = Program::new(
        "Formação Completa Kotlin Developer",
        Level::Intermediate,
        vec![
            EducationalContent::new("Introdução ao Kotlin").with_duration(90),
            EducationalContent::new("Programação Orientada a Objetos com Kotlin").with_duration(120),
            EducationalContent::new("Corrotinas em Kotlin").with_duration(180),
        ],
    );
    let mut logic = Program::new(
        "Lógica de Programação Essencial",
        Level::Basic,
        vec![
            EducationalContent::new("Algoritmos"),
            EducationalContent::new("Pensamento Computacional").with_duration(45),
        ],
    );
    tracing::debug!(
        kotlin_id = %kotlin.id(),
        logic_id = %logic.id(),
        "Sample programs created"
    );

    enroll.execute(&mut kotlin, [gabriel, lia]);
    enroll.execute(&mut kotlin, [daniela]);
    write_report(config.report_format, &kotlin, output.as_ref())?;

    enroll.execute(&mut logic, [lucas]);
    write_report(config.report_format, &logic, output.as_ref())?;
    if config.report_format == ReportFormat::Text {
        output.write_line("");
        output.write_line(&report::roster_summary(&logic));
    }

    Ok(vec![kotlin, logic])
}

fn write_report(
    format: ReportFormat,
    program: &Program,
    output: &dyn OutputPort,
) -> anyhow::Result<()> {
    match format {
        ReportFormat::Text => {
            for line in report::program_report(program) {
                output.write_line(&line);
            }
        }
        ReportFormat::Json => {
            let json = report::program_report_json(program)
                .with_context(|| format!("rendering report for '{}'", program.name()))?;
            output.write_line(&json);
        }
    }
    Ok(())
}
