use super::dto::{CreateMovieDto, ListQuery, ReadMovieDto, UpdateMovieDto};
use super::model::{Movie, NewMovie};
use super::patch::{self, PatchOp};
use crate::common::error::ApiError;
use crate::state::AppState;
use validator::Validate;

pub struct MovieService;

impl MovieService {
    /// Validation runs before any storage interaction; the store assigns
    /// the id.
    pub async fn create(state: AppState, dto: CreateMovieDto) -> Result<Movie, ApiError> {
        dto.validate()?;
        let movie = state.store.insert(NewMovie::from(dto)).await?;
        Ok(movie)
    }

    pub async fn list(state: AppState, query: ListQuery) -> Result<Vec<ReadMovieDto>, ApiError> {
        let skip = query.skip.max(0);
        let take = query.take.clamp(1, state.config.max_page_size);
        let movies = state.store.list(skip, take).await?;
        Ok(movies.into_iter().map(ReadMovieDto::from).collect())
    }

    pub async fn find_by_id(state: AppState, id: i64) -> Result<ReadMovieDto, ApiError> {
        let movie = state
            .store
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound)?;
        Ok(ReadMovieDto::from(movie))
    }

    /// Full replace: the dto requires every mutable field, so nothing of
    /// the old record survives except the id.
    pub async fn update(state: AppState, id: i64, dto: UpdateMovieDto) -> Result<(), ApiError> {
        let mut movie = state
            .store
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound)?;
        dto.validate()?;
        dto.apply_to(&mut movie);
        state.store.update(&movie).await?;
        Ok(())
    }

    /// Merge-then-revalidate: the ops are applied to a working copy of
    /// the update shape, the full validator runs on the result, and only
    /// then are the fields copied back onto the stored record.
    pub async fn patch(state: AppState, id: i64, ops: Vec<PatchOp>) -> Result<(), ApiError> {
        let mut movie = state
            .store
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound)?;
        let mut working = UpdateMovieDto::from(&movie);
        patch::apply(&mut working, &ops)?;
        working.validate()?;
        working.apply_to(&mut movie);
        state.store.update(&movie).await?;
        Ok(())
    }

    pub async fn delete(state: AppState, id: i64) -> Result<(), ApiError> {
        if !state.store.delete(id).await? {
            return Err(ApiError::NotFound);
        }
        Ok(())
    }
}
