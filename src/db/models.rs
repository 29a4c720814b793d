use crate::error::RegistryError;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct Swimmer {
    pub id: i64,
    pub name: String,
    pub is_swimmer: bool,
    pub summary: String,
}

/// The mutable part of a record. All three fields are required on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SwimmerFields {
    pub name: String,
    pub is_swimmer: bool,
    pub summary: String,
}

impl SwimmerFields {
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.name.trim().is_empty() {
            return Err(RegistryError::Validation(
                "field `name` must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn into_swimmer(self, id: i64) -> Swimmer {
        Swimmer {
            id,
            name: self.name,
            is_swimmer: self.is_swimmer,
            summary: self.summary,
        }
    }
}

/// Plain-text record form: `name|True|summary`.
impl fmt::Display for Swimmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = if self.is_swimmer { "True" } else { "False" };
        write!(f, "{}|{}|{}", self.name, flag, self.summary)
    }
}
