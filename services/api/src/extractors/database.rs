use crate::{errors::AppError, AppState};
use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use postgres_models::DbConnection;

/// A connection checked out of the shared pool for the length of a request.
pub struct DatabaseConnection(pub DbConnection);

#[async_trait]
impl<S> FromRequestParts<S> for DatabaseConnection
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let conn = app_state
            .db_pool
            .get_owned()
            .await
            .map_err(postgres_models::DbError::from)?;

        Ok(DatabaseConnection(conn))
    }
}
