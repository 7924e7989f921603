use crate::leads::reader::{self, LeadRow};
use crate::{error::ApiError, state::AppState};
use axum::{Json, Router, extract::State, routing::get};

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(get_leads))
}

#[utoipa::path(
    get,
    path = "/leads",
    tag = "leads",
    responses(
        (status = 200, description = "All leads enriched with form, brand, region and website metadata", body = Vec<LeadRow>)
    )
)]
#[tracing::instrument(name = "GET /leads", skip(state))]
pub async fn get_leads(State(state): State<AppState>) -> Result<Json<Vec<LeadRow>>, ApiError> {
    let rows = reader::get_leads(&state.db).await?;
    Ok(Json(rows))
}
