use crate::errors::AppError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct PspQuery {
    psp: Option<String>,
}

/// The required `psp` query parameter, an `ILIKE` pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Psp(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for Psp
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<PspQuery>::try_from_uri(&parts.uri)
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

        match query.psp {
            Some(psp) if !psp.is_empty() => Ok(Psp(psp)),
            _ => Err(AppError::bad_request("psp query parameter is required")),
        }
    }
}
