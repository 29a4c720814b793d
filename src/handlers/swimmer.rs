use axum::{
    Json,
    extract::{Path, State},
};

use crate::db::{Swimmer, SwimmerFields};
use crate::middleware::ValidatedJson;
use crate::{RegistryError, router::RegistryState};

/// GET /swimmer/{id} -> `name|is_swimmer|summary`, 404 when absent.
pub async fn get_swimmer(
    State(state): State<RegistryState>,
    Path(id): Path<i64>,
) -> Result<String, RegistryError> {
    let swimmer = state.service.get(id).await?;
    Ok(swimmer.to_string())
}

/// GET /list_swimmers -> JSON array ordered by id.
pub async fn list_swimmers(
    State(state): State<RegistryState>,
) -> Result<Json<Vec<Swimmer>>, RegistryError> {
    Ok(Json(state.service.list().await?))
}

/// DELETE /swimmer/{id} -> confirmation or the missing-id message; never 404.
pub async fn delete_swimmer(
    State(state): State<RegistryState>,
    Path(id): Path<i64>,
) -> Result<String, RegistryError> {
    let outcome = state.service.delete(id).await?;
    Ok(outcome.to_string())
}

/// PUT /swimmer/{id} with `{name, is_swimmer, summary}`, all required.
pub async fn update_swimmer(
    State(state): State<RegistryState>,
    Path(id): Path<i64>,
    ValidatedJson(fields): ValidatedJson<SwimmerFields>,
) -> Result<String, RegistryError> {
    let swimmer = state.service.update(id, fields).await?;
    Ok(swimmer.to_string())
}
