use axum::Json;
use postgres_models::{queries, Transaction};
use serde::Serialize;

use crate::{
    errors::AppResult,
    extractors::{DatabaseConnection, TransactionId},
};

#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub transaction: Option<Transaction>,
}

/// A miss is a 200 with `"transaction": null`, not a 404.
pub async fn handler(
    TransactionId(id): TransactionId,
    DatabaseConnection(mut conn): DatabaseConnection,
) -> AppResult<Json<TransactionResponse>> {
    let transaction = queries::find_transaction(&mut conn, id).await?;
    Ok(Json(TransactionResponse { transaction }))
}
