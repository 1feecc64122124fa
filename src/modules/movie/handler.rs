use super::dto::{CreateMovieDto, ListQuery, ReadMovieDto, UpdateMovieDto};
use super::model::Movie;
use super::patch::PatchOp;
use super::service::MovieService;
use crate::common::error::ApiError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

/// Add a movie to the database
#[utoipa::path(
    post,
    path = "/api/movie",
    request_body = CreateMovieDto,
    responses(
        (status = 201, description = "Movie created", body = Movie,
            headers(("Location" = String, description = "URL of the created movie"))),
        (status = 400, description = "Validation failure")
    ),
    tag = "Movies"
)]
pub async fn create_movie(
    State(state): State<AppState>,
    Json(payload): Json<CreateMovieDto>,
) -> Result<impl IntoResponse, ApiError> {
    let movie = MovieService::create(state, payload).await?;
    let location = [(header::LOCATION, format!("/api/movie/{}", movie.id))];
    Ok((StatusCode::CREATED, location, Json(movie)))
}

/// List movies with skip/take pagination
#[utoipa::path(
    get,
    path = "/api/movie",
    params(ListQuery),
    responses(
        (status = 200, description = "Page of movies", body = Vec<ReadMovieDto>)
    ),
    tag = "Movies"
)]
pub async fn list_movies(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ReadMovieDto>>, ApiError> {
    let movies = MovieService::list(state, query).await?;
    Ok(Json(movies))
}

/// Get movie by ID
#[utoipa::path(
    get,
    path = "/api/movie/{id}",
    params(
        ("id" = i64, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie details", body = ReadMovieDto),
        (status = 404, description = "Movie not found")
    ),
    tag = "Movies"
)]
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ReadMovieDto>, ApiError> {
    let movie = MovieService::find_by_id(state, id).await?;
    Ok(Json(movie))
}

/// Replace every field of a movie
#[utoipa::path(
    put,
    path = "/api/movie/{id}",
    params(
        ("id" = i64, Path, description = "Movie ID")
    ),
    request_body = UpdateMovieDto,
    responses(
        (status = 204, description = "Movie updated"),
        (status = 400, description = "Validation failure"),
        (status = 404, description = "Movie not found")
    ),
    tag = "Movies"
)]
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateMovieDto>,
) -> Result<StatusCode, ApiError> {
    MovieService::update(state, id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Partially update a movie with a patch document
#[utoipa::path(
    patch,
    path = "/api/movie/{id}",
    params(
        ("id" = i64, Path, description = "Movie ID")
    ),
    request_body = Vec<PatchOp>,
    responses(
        (status = 204, description = "Movie updated"),
        (status = 400, description = "Merged result failed validation"),
        (status = 404, description = "Movie not found")
    ),
    tag = "Movies"
)]
pub async fn patch_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(ops): Json<Vec<PatchOp>>,
) -> Result<StatusCode, ApiError> {
    MovieService::patch(state, id, ops).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a movie
#[utoipa::path(
    delete,
    path = "/api/movie/{id}",
    params(
        ("id" = i64, Path, description = "Movie ID")
    ),
    responses(
        (status = 204, description = "Movie deleted"),
        (status = 404, description = "Movie not found")
    ),
    tag = "Movies"
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    MovieService::delete(state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
