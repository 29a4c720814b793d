use serde::Deserialize;
use std::collections::HashMap;

use crate::error::RegistryError;

/// Top-level body of an `action=query` response.
#[derive(Debug, Deserialize)]
pub struct WikiQueryResponse {
    pub query: WikiQuery,
}

/// Pages keyed by their internal page id, which the caller cannot know in advance.
#[derive(Debug, Deserialize)]
pub struct WikiQuery {
    #[serde(default)]
    pub pages: HashMap<String, WikiPage>,
}

#[derive(Debug, Deserialize)]
pub struct WikiPage {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub extract: Option<String>,
}

impl WikiQueryResponse {
    /// The one page the title lookup resolved to. Zero or several pages are an error.
    pub fn into_single_page(self) -> Result<WikiPage, RegistryError> {
        let count = self.query.pages.len();
        let mut pages = self.query.pages.into_values();
        match (pages.next(), count) {
            (Some(page), 1) => Ok(page),
            _ => Err(RegistryError::UnexpectedPageCount(count)),
        }
    }
}

impl WikiPage {
    pub fn into_extract(self) -> Result<String, RegistryError> {
        self.extract.ok_or(RegistryError::MissingExtract(self.title))
    }
}

/// Parse raw response bytes into the query envelope.
pub fn parse_query_bytes(body: &[u8]) -> Result<WikiQueryResponse, serde_json::Error> {
    serde_json::from_slice(body)
}
