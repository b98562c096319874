//! Entities - plain domain values held by aggregates

pub mod educational_content;
pub mod student;

pub use educational_content::EducationalContent;
pub use student::Student;
