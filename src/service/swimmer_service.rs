use crate::api::WikiApi;
use crate::db::{Swimmer, SwimmerFields, SwimmerStorage};
use crate::error::RegistryError;
use std::fmt;

pub const MISSING_ID_MESSAGE: &str = "Swimmer with provided id does not exist";

/// Result of a delete; both variants are successful responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(i64),
    Missing,
}

impl fmt::Display for DeleteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteOutcome::Deleted(id) => write!(f, "Swimmer with id {id} is deleted"),
            DeleteOutcome::Missing => f.write_str(MISSING_ID_MESSAGE),
        }
    }
}

/// CRUD over the swimmer store plus the summary lookup.
pub struct SwimmerService {
    storage: SwimmerStorage,
    wiki: WikiApi,
}

impl SwimmerService {
    pub fn new(storage: SwimmerStorage, wiki: WikiApi) -> Self {
        Self { storage, wiki }
    }

    /// Look up a biography without storing anything.
    pub async fn search(&self, name: &str) -> Result<String, RegistryError> {
        let name = require_name(name)?;
        self.wiki.fetch_summary(name).await
    }

    /// Fetch the biography for `name` and store it as a new swimmer.
    /// The "no swimmers" sentinel is stored verbatim.
    pub async fn create_from_search(&self, name: &str) -> Result<Swimmer, RegistryError> {
        let name = require_name(name)?;
        let summary = self.wiki.fetch_summary(name).await?;
        self.storage
            .insert(SwimmerFields {
                name: name.to_string(),
                is_swimmer: true,
                summary,
            })
            .await
    }

    pub async fn create(&self, fields: SwimmerFields) -> Result<Swimmer, RegistryError> {
        fields.validate()?;
        self.storage.insert(fields).await
    }

    pub async fn get(&self, id: i64) -> Result<Swimmer, RegistryError> {
        self.storage.get_or_fail(id).await
    }

    pub async fn list(&self) -> Result<Vec<Swimmer>, RegistryError> {
        self.storage.list_all().await
    }

    pub async fn update(&self, id: i64, fields: SwimmerFields) -> Result<Swimmer, RegistryError> {
        fields.validate()?;
        self.storage.update(id, fields).await
    }

    pub async fn delete(&self, id: i64) -> Result<DeleteOutcome, RegistryError> {
        Ok(if self.storage.delete(id).await? {
            DeleteOutcome::Deleted(id)
        } else {
            DeleteOutcome::Missing
        })
    }
}

fn require_name(name: &str) -> Result<&str, RegistryError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RegistryError::Validation(
            "field `name` must not be empty".to_string(),
        ));
    }
    Ok(name)
}
