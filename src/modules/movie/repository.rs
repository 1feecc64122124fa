use super::model::{Movie, NewMovie};
use crate::infrastructure::db::pool::DbPool;
use anyhow::{Context, Result};
use async_trait::async_trait;

/// Storage collaborator for the movie collection. Listing is in id
/// (insertion) order; every mutation is durable once the call returns.
#[async_trait]
pub trait MovieStore: Send + Sync {
    async fn insert(&self, movie: NewMovie) -> Result<Movie>;
    async fn list(&self, skip: i64, take: i64) -> Result<Vec<Movie>>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Movie>>;
    async fn update(&self, movie: &Movie) -> Result<()>;
    /// Returns false when no row had the given id.
    async fn delete(&self, id: i64) -> Result<bool>;
}

pub struct PgMovieStore {
    pool: DbPool,
}

impl PgMovieStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieStore for PgMovieStore {
    async fn insert(&self, movie: NewMovie) -> Result<Movie> {
        let movie = sqlx::query_as::<_, Movie>(
            r#"
            INSERT INTO movies (title, genre, duration)
            VALUES ($1, $2, $3)
            RETURNING id, title, genre, duration
            "#,
        )
        .bind(&movie.title)
        .bind(&movie.genre)
        .bind(movie.duration)
        .fetch_one(&self.pool)
        .await
        .context("failed to insert movie")?;

        Ok(movie)
    }

    async fn list(&self, skip: i64, take: i64) -> Result<Vec<Movie>> {
        let movies = sqlx::query_as::<_, Movie>(
            r#"
            SELECT id, title, genre, duration
            FROM movies
            ORDER BY id ASC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(skip)
        .bind(take)
        .fetch_all(&self.pool)
        .await
        .context("failed to list movies")?;

        Ok(movies)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Movie>> {
        let movie = sqlx::query_as::<_, Movie>(
            r#"
            SELECT id, title, genre, duration
            FROM movies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("failed to fetch movie")?;

        Ok(movie)
    }

    async fn update(&self, movie: &Movie) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE movies
            SET title = $1, genre = $2, duration = $3
            WHERE id = $4
            "#,
        )
        .bind(&movie.title)
        .bind(&movie.genre)
        .bind(movie.duration)
        .bind(movie.id)
        .execute(&self.pool)
        .await
        .context("failed to update movie")?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("failed to delete movie")?;

        Ok(result.rows_affected() > 0)
    }
}
