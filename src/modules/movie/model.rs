use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Persisted movie record. `id` is assigned by the store on insert and
/// never reused or mutated afterwards.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema, Clone)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub genre: String,
    pub duration: i32,
}

/// Field values for a movie that has not been inserted yet.
#[derive(Debug, Clone)]
pub struct NewMovie {
    pub title: String,
    pub genre: String,
    pub duration: i32,
}
