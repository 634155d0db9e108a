use crate::errors::AppError;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use super::JsonPath;

/// The `:id` path segment as a UUID. Checked before any pool checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for TransactionId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let JsonPath(raw) = JsonPath::<String>::from_request_parts(parts, state).await?;

        Uuid::parse_str(&raw)
            .map(TransactionId)
            .map_err(|_| AppError::bad_request(format!("Invalid transaction id: {raw}")))
    }
}
