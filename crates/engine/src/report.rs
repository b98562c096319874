//! Rendering of a program's state for the console.

use formacao_domain::{EducationalContent, Level, Program, ProgramId, Student};
use serde::Serialize;

/// Full text report: header, level, contents with durations, and roster.
pub fn program_report(program: &Program) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        format!("--- Detalhes da Formação: {} ---", program.name()),
        format!("Nível: {}", program.level()),
        String::new(),
        "Conteúdos da Formação:".to_string(),
    ];

    lines.extend(program.contents().iter().map(content_line));

    lines.push(String::new());
    lines.push("Alunos Inscritos:".to_string());
    lines.extend(
        program
            .enrolled_students()
            .iter()
            .map(|student| format!("- {}", student)),
    );

    lines
}

/// One-line roster summary: `Alunos Inscritos: <name>, <name>`.
pub fn roster_summary(program: &Program) -> String {
    let names = program
        .enrolled_students()
        .iter()
        .map(Student::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("Alunos Inscritos: {}", names)
}

fn content_line(content: &EducationalContent) -> String {
    format!("- {} (Duração: {})", content.name(), content.duration())
}

#[derive(Serialize)]
struct ProgramReport<'a> {
    id: ProgramId,
    name: &'a str,
    level: Level,
    total_duration_minutes: i64,
    contents: &'a [EducationalContent],
    enrolled: Vec<Student>,
}

/// JSON report carrying the same data as [`program_report`].
pub fn program_report_json(program: &Program) -> Result<String, serde_json::Error> {
    let report = ProgramReport {
        id: program.id(),
        name: program.name(),
        level: program.level(),
        total_duration_minutes: program.total_duration(),
        contents: program.contents(),
        enrolled: program.enrolled_students(),
    };
    serde_json::to_string_pretty(&report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logic_program() -> Program {
        let mut program = Program::new(
            "P",
            Level::Basic,
            vec![
                EducationalContent::new("Algorithms"),
                EducationalContent::new("Computational Thinking").with_duration(45),
            ],
        );
        program.enroll([Student::new("Lucas")]);
        program
    }

    #[test]
    fn text_report_lists_contents_and_roster() {
        let lines = program_report(&logic_program());

        assert_eq!(
            lines,
            vec![
                "",
                "--- Detalhes da Formação: P ---",
                "Nível: Básico",
                "",
                "Conteúdos da Formação:",
                "- Algorithms (Duração: 60 min)",
                "- Computational Thinking (Duração: 45 min)",
                "",
                "Alunos Inscritos:",
                "- Lucas",
            ]
        );
    }

    #[test]
    fn text_report_with_empty_program() {
        let program = Program::new("Vazia", Level::Hard, Vec::new());
        let lines = program_report(&program);

        assert!(lines.contains(&"Nível: Difícil".to_string()));
        assert_eq!(lines.last().map(String::as_str), Some("Alunos Inscritos:"));
    }

    #[test]
    fn roster_summary_joins_names() {
        let mut program = Program::new("Q", Level::Intermediate, Vec::new());
        program.enroll([Student::new("Gabriel"), Student::new("Lia")]);
        program.enroll([Student::new("Daniela")]);

        assert_eq!(
            roster_summary(&program),
            "Alunos Inscritos: Gabriel, Lia, Daniela"
        );
    }

    #[test]
    fn json_report_includes_totals() {
        let json = program_report_json(&logic_program()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["name"], "P");
        assert_eq!(value["level"], "basic");
        assert_eq!(value["total_duration_minutes"], 105);
        assert_eq!(value["contents"][1]["duration"], 45);
        assert_eq!(value["enrolled"][0]["name"], "Lucas");
    }
}
