use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leadgrid API",
        version = "1.0.0",
        description = "Marketing-operations backend: schema-driven intake forms, \
                       per-form submission tables and the cross-form lead ledger.",
        license(name = "MIT")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "forms", description = "Form definitions and their dedicated submission tables"),
        (name = "submissions", description = "Submission recording and retrieval"),
        (name = "leads", description = "Cross-form lead ledger"),
        (name = "reference", description = "Region, brand and website lookups")
    ),
    paths(
        crate::routes::health::health,
        crate::routes::health::db_health,
        crate::routes::forms::create_form::create_form,
        crate::routes::forms::get_forms::get_forms,
        crate::routes::forms::get_form::get_form,
        crate::routes::forms::update_form::update_form,
        crate::routes::forms::delete_form::delete_form,
        crate::routes::forms::purge_submissions::purge_submissions,
        crate::routes::submissions::create_submission::create_submission,
        crate::routes::submissions::get_submissions::get_submissions,
        crate::routes::leads::get_leads,
        crate::routes::reference::get_regions,
        crate::routes::reference::get_brands,
        crate::routes::reference::get_websites,
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}
