use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub mod create_submission;
pub mod get_submissions;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_submission::create_submission))
        .route("/{form_id}", get(get_submissions::get_submissions))
}
