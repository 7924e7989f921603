use crate::{error::ApiError, forms::registry, state::AppState};
use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct DeleteFormResponse {
    pub deleted: bool,
}

#[utoipa::path(
    delete,
    path = "/forms/{id}",
    tag = "forms",
    params(("id" = String, Path, description = "Form identifier")),
    responses(
        (status = 200, description = "Definition row removed; submission data retained", body = DeleteFormResponse),
        (status = 404, description = "No form with this identifier")
    )
)]
#[tracing::instrument(name = "DELETE /forms/{id}", skip(state))]
pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteFormResponse>, ApiError> {
    let deleted = registry::delete_by_id(&state.db, &id).await?;
    if !deleted {
        return Err(ApiError::not_found(format!("Form `{id}` does not exist")));
    }
    Ok(Json(DeleteFormResponse { deleted }))
}
