use std::sync::Arc;

use axum::{Router, routing::get};
use state::State;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, decompression::RequestDecompressionLayer,
};

pub mod entity;
pub mod error;
pub mod forms;
pub mod leads;
mod openapi;
mod routes;
pub mod schema;
pub mod state;
pub mod submissions;

pub use axum;
pub use sea_orm;

pub fn construct_router(state: Arc<State>) -> Router {
    let router = Router::new()
        .nest("/health", routes::health::routes())
        .nest("/forms", routes::forms::routes())
        .nest("/submissions", routes::submissions::routes())
        .nest("/leads", routes::leads::routes())
        .merge(routes::reference::routes())
        .route("/openapi.json", get(openapi::openapi_json))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(
            ServiceBuilder::new()
                .layer(RequestDecompressionLayer::new())
                .layer(CompressionLayer::new()),
        );

    Router::new().nest("/api/v1", router)
}
