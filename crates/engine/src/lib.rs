//! Formação Engine library.
//!
//! ## Structure
//!
//! - `config` - Environment-driven application configuration
//! - `infrastructure/` - Output port and its console adapter
//! - `use_cases/` - Enrollment orchestration over the domain aggregate
//! - `report` - Text and JSON rendering of a program's state
//! - `demo` - Sample catalog exercised by the binary

pub mod config;
pub mod demo;
pub mod infrastructure;
pub mod report;
pub mod use_cases;

pub use config::{AppConfig, ConfigError, ReportFormat};
