use crate::{error::ApiError, forms::registry, state::AppState};
use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct PurgeSubmissionsResponse {
    pub purged: bool,
}

/// Explicit disposal of a form's submission data. Deleting a form keeps
/// its dedicated table; this endpoint is the deliberate counterpart that
/// drops it and removes the form's ledger rows.
#[utoipa::path(
    delete,
    path = "/forms/{id}/submissions",
    tag = "forms",
    params(("id" = String, Path, description = "Form identifier")),
    responses(
        (status = 200, description = "Submission table dropped and leads removed", body = PurgeSubmissionsResponse),
        (status = 400, description = "Invalid form identifier")
    )
)]
#[tracing::instrument(name = "DELETE /forms/{id}/submissions", skip(state))]
pub async fn purge_submissions(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PurgeSubmissionsResponse>, ApiError> {
    registry::purge_submissions(&state.db, &id).await?;
    Ok(Json(PurgeSubmissionsResponse { purged: true }))
}
