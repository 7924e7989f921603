use crate::{
    error::ApiError,
    forms::registry::{self, NewForm},
    state::AppState,
};
use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFormInput {
    /// Globally unique identifier, also the submission table suffix.
    pub form_id: String,
    pub page_name: String,
    /// Form-builder component tree.
    #[schema(value_type = Object)]
    pub schema: serde_json::Value,
    pub region_id: i32,
    pub brand_id: i32,
    pub website_id: Option<i32>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFormResponse {
    pub form_id: String,
}

#[utoipa::path(
    post,
    path = "/forms",
    tag = "forms",
    request_body = CreateFormInput,
    responses(
        (status = 201, description = "Form created and submission table provisioned", body = CreateFormResponse),
        (status = 400, description = "Invalid identifier or malformed schema"),
        (status = 409, description = "Identifier already exists"),
        (status = 500, description = "Generated DDL rejected by the store")
    )
)]
#[tracing::instrument(name = "POST /forms", skip(state, input))]
pub async fn create_form(
    State(state): State<AppState>,
    Json(input): Json<CreateFormInput>,
) -> Result<(StatusCode, Json<CreateFormResponse>), ApiError> {
    if input.page_name.trim().is_empty() {
        return Err(ApiError::bad_request("pageName must not be empty"));
    }

    let form_id = registry::create_form(
        &state.db,
        NewForm {
            id: input.form_id,
            page_name: input.page_name,
            schema: input.schema,
            region_id: input.region_id,
            brand_id: input.brand_id,
            website_id: input.website_id,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(CreateFormResponse { form_id })))
}
