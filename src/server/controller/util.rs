use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::IntoResponse,
};
use serde::{de::DeserializeOwned, Deserialize, Deserializer};

use crate::server::error::AppError;

/// Path extractor for integer ids.
///
/// Behaves like [`Path`] but rejects segments that do not parse (`/users/abc`,
/// `/users/-1`) the same way as an unknown route, with 404 `{"error":"Not found"}`.
#[derive(Debug)]
pub struct IdPath<T>(pub T);

impl<S, T> FromRequestParts<S> for IdPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(IdPath(value)),
            Err(rejection) => {
                tracing::debug!("Rejected path parameters: {}", rejection.body_text());
                Err(not_found_error())
            }
        }
    }
}

/// Row id taken from a path segment.
///
/// Only unsigned integers that fit the `i32` primary key column deserialize, so
/// negative or out-of-range segments never reach a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowId(pub i32);

impl<'de> Deserialize<'de> for RowId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = u32::deserialize(deserializer)?;
        i32::try_from(id)
            .map(RowId)
            .map_err(serde::de::Error::custom)
    }
}

/// Router fallback for unknown routes.
pub async fn not_found() -> impl IntoResponse {
    not_found_error()
}

fn not_found_error() -> AppError {
    AppError::NotFound("Not found".to_string())
}
