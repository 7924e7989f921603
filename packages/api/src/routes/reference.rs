//! Read-only lookups for the reference data the form builder and the leads
//! view join against. Write-side CRUD for these tables lives outside this
//! service.

use crate::entity::{brand, region, website};
use crate::{error::ApiError, state::AppState};
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/regions", get(get_regions))
        .route("/regions/{id}/brands", get(get_brands))
        .route("/brands/{id}/websites", get(get_websites))
}

#[utoipa::path(
    get,
    path = "/regions",
    tag = "reference",
    responses((status = 200, description = "All regions"))
)]
#[tracing::instrument(name = "GET /regions", skip(state))]
pub async fn get_regions(
    State(state): State<AppState>,
) -> Result<Json<Vec<region::Model>>, ApiError> {
    let regions = region::Entity::find()
        .order_by_asc(region::Column::Name)
        .all(&state.db)
        .await?;
    Ok(Json(regions))
}

#[utoipa::path(
    get,
    path = "/regions/{id}/brands",
    tag = "reference",
    params(("id" = i32, Path, description = "Region identifier")),
    responses((status = 200, description = "Brands belonging to the region"))
)]
#[tracing::instrument(name = "GET /regions/{id}/brands", skip(state))]
pub async fn get_brands(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<brand::Model>>, ApiError> {
    let brands = brand::Entity::find()
        .filter(brand::Column::RegionId.eq(id))
        .order_by_asc(brand::Column::Name)
        .all(&state.db)
        .await?;
    Ok(Json(brands))
}

#[utoipa::path(
    get,
    path = "/brands/{id}/websites",
    tag = "reference",
    params(("id" = i32, Path, description = "Brand identifier")),
    responses((status = 200, description = "Websites belonging to the brand"))
)]
#[tracing::instrument(name = "GET /brands/{id}/websites", skip(state))]
pub async fn get_websites(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<website::Model>>, ApiError> {
    let websites = website::Entity::find()
        .filter(website::Column::BrandId.eq(id))
        .order_by_asc(website::Column::Name)
        .all(&state.db)
        .await?;
    Ok(Json(websites))
}
