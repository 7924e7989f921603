use crate::{error::ApiError, state::AppState, submissions::recorder};
use axum::{
    Json,
    extract::{Path, State},
};

#[utoipa::path(
    get,
    path = "/submissions/{form_id}",
    tag = "submissions",
    params(("form_id" = String, Path, description = "Form identifier")),
    responses(
        (status = 200, description = "All rows of the form's dedicated table; shape follows the current table schema", body = Vec<serde_json::Value>)
    )
)]
#[tracing::instrument(name = "GET /submissions/{form_id}", skip(state))]
pub async fn get_submissions(
    State(state): State<AppState>,
    Path(form_id): Path<String>,
) -> Result<Json<Vec<serde_json::Value>>, ApiError> {
    let rows = recorder::get_all_submissions(&state.db, &form_id).await?;
    Ok(Json(rows))
}
