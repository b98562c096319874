pub mod aggregates;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod types;
pub mod value_objects;

pub use aggregates::Program;
pub use entities::{EducationalContent, Student};
pub use error::DomainError;
pub use events::ProgramUpdate;
pub use ids::ProgramId;
pub use types::Level;
pub use value_objects::{DurationMinutes, DEFAULT_DURATION_MINUTES};
