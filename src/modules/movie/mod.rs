use crate::state::AppState;
use axum::Router;
use axum::routing::get;

pub mod dto;
pub mod handler;
pub mod memory;
pub mod model;
pub mod patch;
pub mod repository;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_movies).post(handler::create_movie))
        .route(
            "/{id}",
            get(handler::get_movie)
                .put(handler::update_movie)
                .patch(handler::patch_movie)
                .delete(handler::delete_movie),
        )
}
