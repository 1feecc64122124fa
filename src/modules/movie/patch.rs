use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;

use super::dto::UpdateMovieDto;
use crate::common::error::ApiError;

/// One field-level operation of a patch document, applied in order to a
/// working copy of the update shape. `add` and `replace` are equivalent
/// on this flat object; `remove` clears the field so the validator can
/// flag it as missing.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOp {
    Add { path: String, value: Value },
    Replace { path: String, value: Value },
    Remove { path: String },
}

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("`{0}` is not a patchable field")]
    UnknownField(String),
    #[error("invalid value for `{0}`")]
    InvalidValue(&'static str),
}

impl From<PatchError> for ApiError {
    fn from(err: PatchError) -> Self {
        let field = match &err {
            PatchError::UnknownField(path) => field_name(path),
            PatchError::InvalidValue(field) => (*field).to_string(),
        };
        ApiError::validation_on(field, err.to_string())
    }
}

/// Applies the operations in order. The working copy may end up invalid
/// (e.g. a removed field); that is for the validator to catch afterwards.
pub fn apply(dto: &mut UpdateMovieDto, ops: &[PatchOp]) -> Result<(), PatchError> {
    for op in ops {
        match op {
            PatchOp::Add { path, value } | PatchOp::Replace { path, value } => {
                set_field(dto, path, value)?
            }
            PatchOp::Remove { path } => clear_field(dto, path)?,
        }
    }
    Ok(())
}

fn field_name(path: &str) -> String {
    path.trim_start_matches('/').to_ascii_lowercase()
}

fn set_field(dto: &mut UpdateMovieDto, path: &str, value: &Value) -> Result<(), PatchError> {
    match field_name(path).as_str() {
        "title" => dto.title = Some(parse(value, "title")?),
        "genre" => dto.genre = Some(parse(value, "genre")?),
        "duration" => dto.duration = Some(parse(value, "duration")?),
        _ => return Err(PatchError::UnknownField(path.to_string())),
    }
    Ok(())
}

fn clear_field(dto: &mut UpdateMovieDto, path: &str) -> Result<(), PatchError> {
    match field_name(path).as_str() {
        "title" => dto.title = None,
        "genre" => dto.genre = None,
        "duration" => dto.duration = None,
        _ => return Err(PatchError::UnknownField(path.to_string())),
    }
    Ok(())
}

fn parse<T: DeserializeOwned>(value: &Value, field: &'static str) -> Result<T, PatchError> {
    serde_json::from_value(value.clone()).map_err(|_| PatchError::InvalidValue(field))
}
