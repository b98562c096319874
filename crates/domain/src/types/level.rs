//! Difficulty level of a program (Nível)

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Difficulty classification of a program.
///
/// A closed set: every program is exactly one of these three levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    /// Entry level (Básico)
    Basic,
    /// Assumes prior knowledge (Intermediário)
    Intermediate,
    /// Advanced material (Difícil)
    Hard,
}

impl Level {
    /// All levels, easiest first
    pub fn all() -> &'static [Level] {
        &[Level::Basic, Level::Intermediate, Level::Hard]
    }

    /// Get a display name for the level, as shown in reports
    pub fn display_name(&self) -> &'static str {
        match self {
            Level::Basic => "Básico",
            Level::Intermediate => "Intermediário",
            Level::Hard => "Difícil",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Level {
    type Err = DomainError;

    /// Accepts English or Portuguese names, case-insensitive, with or without accents.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" | "basico" | "básico" => Ok(Level::Basic),
            "intermediate" | "intermediario" | "intermediário" => Ok(Level::Intermediate),
            "hard" | "dificil" | "difícil" => Ok(Level::Hard),
            _ => Err(DomainError::parse(format!(
                "Unknown level: '{}'. Valid values: basic, intermediate, hard",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_display() {
        assert_eq!(Level::Basic.to_string(), "Básico");
        assert_eq!(Level::Intermediate.to_string(), "Intermediário");
        assert_eq!(Level::Hard.to_string(), "Difícil");
    }

    #[test]
    fn test_level_parse() {
        assert_eq!("basic".parse::<Level>().unwrap(), Level::Basic);
        assert_eq!("INTERMEDIARIO".parse::<Level>().unwrap(), Level::Intermediate);
        assert_eq!("Difícil".parse::<Level>().unwrap(), Level::Hard);
        assert!("expert".parse::<Level>().is_err());
    }

    #[test]
    fn test_level_all_has_three_variants() {
        assert_eq!(Level::all(), &[Level::Basic, Level::Intermediate, Level::Hard]);
    }

    #[test]
    fn test_level_serde() {
        let json = serde_json::to_string(&Level::Intermediate).unwrap();
        assert_eq!(json, "\"intermediate\"");
        let level: Level = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(level, Level::Hard);
    }
}
