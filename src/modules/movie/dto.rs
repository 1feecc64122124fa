use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use super::model::{Movie, NewMovie};

/// Fields are optional in shape but required by validation, so a partial
/// update can clear one and have the validator report it as missing.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMovieDto {
    #[validate(
        required(message = "Title is required"),
        length(min = 1, message = "Title is required")
    )]
    pub title: Option<String>,
    #[validate(required(message = "Genre is required"), custom(function = validate_genre))]
    pub genre: Option<String>,
    #[validate(
        required(message = "Duration is required"),
        range(
            min = 60,
            max = 540,
            message = "The duration must be greater than 60 minutes and less than 540 minutes."
        )
    )]
    pub duration: Option<i32>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateMovieDto {
    #[validate(
        required(message = "Title is required"),
        length(min = 1, message = "Title is required")
    )]
    pub title: Option<String>,
    #[validate(required(message = "Genre is required"), custom(function = validate_genre))]
    pub genre: Option<String>,
    #[validate(
        required(message = "Duration is required"),
        range(
            min = 60,
            max = 540,
            message = "The duration must be greater than 60 minutes and less than 540 minutes."
        )
    )]
    pub duration: Option<i32>,
}

fn validate_genre(genre: &str) -> Result<(), ValidationError> {
    if genre.is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("Genre is required".into());
        return Err(err);
    }
    if genre.chars().count() > 50 {
        let mut err = ValidationError::new("length");
        err.message = Some("The genre size can not exceed 50 characters".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReadMovieDto {
    pub title: String,
    pub genre: String,
    pub duration: i32,
    /// Stamped when the DTO is built, not persisted.
    #[serde(with = "time::serde::iso8601")]
    pub consulted_time: OffsetDateTime,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListQuery {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_take")]
    pub take: i64,
}

fn default_take() -> i64 {
    20
}

// Mapping layer: plain field copies, no validation of its own. Callers
// validate before mapping toward the record.

impl From<CreateMovieDto> for NewMovie {
    fn from(dto: CreateMovieDto) -> Self {
        Self {
            title: dto.title.unwrap_or_default(),
            genre: dto.genre.unwrap_or_default(),
            duration: dto.duration.unwrap_or_default(),
        }
    }
}

impl From<&Movie> for UpdateMovieDto {
    fn from(movie: &Movie) -> Self {
        Self {
            title: Some(movie.title.clone()),
            genre: Some(movie.genre.clone()),
            duration: Some(movie.duration),
        }
    }
}

impl From<Movie> for ReadMovieDto {
    fn from(movie: Movie) -> Self {
        Self {
            title: movie.title,
            genre: movie.genre,
            duration: movie.duration,
            consulted_time: OffsetDateTime::now_utc(),
        }
    }
}

impl UpdateMovieDto {
    /// Copies every present field onto the record, leaving `id` alone.
    pub fn apply_to(&self, movie: &mut Movie) {
        if let Some(title) = &self.title {
            movie.title = title.clone();
        }
        if let Some(genre) = &self.genre {
            movie.genre = genre.clone();
        }
        if let Some(duration) = self.duration {
            movie.duration = duration;
        }
    }
}
