use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s.trim())
                    .map(Self)
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", s, e)))
            }
        }
    };
}

define_id!(ProgramId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_unique() {
        assert_ne!(ProgramId::new(), ProgramId::new());
    }

    #[test]
    fn parses_display_output() {
        let id = ProgramId::new();
        let parsed: ProgramId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn serializes_as_parseable_uuid_string() {
        let id = ProgramId::new();
        let json = serde_json::to_string(&id).unwrap();
        let text: String = serde_json::from_str(&json).unwrap();

        assert_eq!(text.parse::<ProgramId>().unwrap(), id);
    }

    #[test]
    fn rejects_malformed_id() {
        let err = "not-a-uuid".parse::<ProgramId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }
}
