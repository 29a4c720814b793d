use axum::{Form, extract::State};
use serde::Deserialize;
use tracing::info;

use crate::render::FormPage;
use crate::{RegistryError, router::RegistryState};

pub const SWIMMER_ADDED: &str = "Swimmer added";

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    pub name: Option<String>,
    pub submit_button: Option<String>,
}

/// Which button submitted the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAction {
    Search,
    Add,
}

impl SearchAction {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Search" => Some(Self::Search),
            "Add" => Some(Self::Add),
            _ => None,
        }
    }
}

/// GET /search_swimmer -> empty form.
pub async fn search_form() -> FormPage {
    FormPage::empty()
}

/// POST /search_swimmer -> fetched summary ("Search") or stored record ("Add").
pub async fn search_submit(
    State(state): State<RegistryState>,
    Form(form): Form<SearchForm>,
) -> Result<FormPage, RegistryError> {
    let Some(action) = form.submit_button.as_deref().and_then(SearchAction::parse) else {
        return Ok(FormPage::empty());
    };
    let name = form.name.unwrap_or_default();

    match action {
        SearchAction::Search => {
            let summary = state.service.search(&name).await?;
            Ok(FormPage::with_summary(Some(name), summary))
        }
        SearchAction::Add => {
            let swimmer = state.service.create_from_search(&name).await?;
            info!(id = swimmer.id, name = %swimmer.name, "swimmer added from search");
            Ok(FormPage::with_summary(None, SWIMMER_ADDED))
        }
    }
}
