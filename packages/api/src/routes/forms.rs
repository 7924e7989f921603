use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

pub mod create_form;
pub mod delete_form;
pub mod get_form;
pub mod get_forms;
pub mod purge_submissions;
pub mod update_form;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(create_form::create_form).get(get_forms::get_forms),
        )
        .route(
            "/{id}",
            get(get_form::get_form)
                .put(update_form::update_form)
                .delete(delete_form::delete_form),
        )
        .route(
            "/{id}/submissions",
            delete(purge_submissions::purge_submissions),
        )
}
