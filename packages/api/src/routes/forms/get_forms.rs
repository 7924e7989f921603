use crate::forms::registry::{self, FormPage};
use crate::{error::ApiError, routes::PaginationParams, state::AppState};
use axum::{
    Json,
    extract::{Query, State},
};

#[utoipa::path(
    get,
    path = "/forms",
    tag = "forms",
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated form summaries with brand and region names", body = FormPage)
    )
)]
#[tracing::instrument(name = "GET /forms", skip(state))]
pub async fn get_forms(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<FormPage>, ApiError> {
    let page = params.page.unwrap_or(1);
    let limit = params.limit.unwrap_or(10);
    let result = registry::find_all(&state.db, page, limit).await?;
    Ok(Json(result))
}
