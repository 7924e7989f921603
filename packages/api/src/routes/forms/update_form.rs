use crate::{error::ApiError, forms::registry, state::AppState};
use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFormInput {
    #[schema(value_type = Object)]
    pub schema: serde_json::Value,
    pub page_name: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFormResponse {
    pub affected_rows: u64,
}

#[utoipa::path(
    put,
    path = "/forms/{id}",
    tag = "forms",
    params(("id" = String, Path, description = "Form identifier")),
    request_body = UpdateFormInput,
    responses(
        (status = 200, description = "Definition updated, submission table migrated append-only", body = UpdateFormResponse),
        (status = 400, description = "Invalid field key or malformed schema"),
        (status = 404, description = "No form with this identifier"),
        (status = 500, description = "Column addition rejected by the store")
    )
)]
#[tracing::instrument(name = "PUT /forms/{id}", skip(state, input))]
pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateFormInput>,
) -> Result<Json<UpdateFormResponse>, ApiError> {
    if input.page_name.trim().is_empty() {
        return Err(ApiError::bad_request("pageName must not be empty"));
    }

    let affected_rows =
        registry::edit_by_id(&state.db, &id, input.schema, input.page_name).await?;
    Ok(Json(UpdateFormResponse { affected_rows }))
}
