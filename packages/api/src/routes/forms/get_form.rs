use crate::forms::registry::{self, FormDetail};
use crate::{error::ApiError, state::AppState};
use axum::{
    Json,
    extract::{Path, State},
};

#[utoipa::path(
    get,
    path = "/forms/{id}",
    tag = "forms",
    params(("id" = String, Path, description = "Form identifier")),
    responses(
        (status = 200, description = "Form definition with brand and region names", body = FormDetail),
        (status = 404, description = "No form with this identifier")
    )
)]
#[tracing::instrument(name = "GET /forms/{id}", skip(state))]
pub async fn get_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FormDetail>, ApiError> {
    let form = registry::find_by_id(&state.db, &id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Form `{id}` does not exist")))?;
    Ok(Json(form))
}
