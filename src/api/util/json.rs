use axum::http::StatusCode;
use axum::Json;

use crate::errors::AppError;

/// Map a domain result into a 200 JSON response.
pub fn to_json<T: serde::Serialize>(result: Result<T, AppError>) -> Result<Json<T>, AppError> {
    result.map(Json)
}

/// Same as [`to_json`] but answers 201 for freshly created records.
pub fn to_created_json<T: serde::Serialize>(
    result: Result<T, AppError>,
) -> Result<(StatusCode, Json<T>), AppError> {
    result.map(|value| (StatusCode::CREATED, Json(value)))
}
