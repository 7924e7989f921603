use crate::{error::ApiError, state::AppState, submissions::recorder};
use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubmissionInput {
    pub form_id: String,
    /// Field key → value. Compound values are stored as JSON text.
    #[schema(value_type = Object)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubmissionResponse {
    pub submission_id: i64,
}

#[utoipa::path(
    post,
    path = "/submissions",
    tag = "submissions",
    request_body = CreateSubmissionInput,
    responses(
        (status = 201, description = "Submission recorded in the dedicated table and the lead ledger", body = CreateSubmissionResponse),
        (status = 400, description = "Payload key without a matching column (COLUMN_MISMATCH)"),
        (status = 500, description = "Persistence failure")
    )
)]
#[tracing::instrument(name = "POST /submissions", skip(state, input), fields(form_id = %input.form_id))]
pub async fn create_submission(
    State(state): State<AppState>,
    Json(input): Json<CreateSubmissionInput>,
) -> Result<(StatusCode, Json<CreateSubmissionResponse>), ApiError> {
    let submission_id = recorder::submit(&state.db, &input.form_id, input.data).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateSubmissionResponse { submission_id }),
    ))
}
