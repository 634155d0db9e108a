use axum::Json;
use postgres_models::{queries, Paginated, Transaction, TransactionFilter, UtcRange};
use serde::Serialize;

use crate::{
    errors::AppResult,
    extractors::{CalendarDate, DatabaseConnection, JsonPath, Pagination},
};

#[derive(Debug, Serialize)]
pub struct TransactionsPage {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub transactions: Vec<Transaction>,
}

impl From<Paginated<Transaction>> for TransactionsPage {
    fn from(page: Paginated<Transaction>) -> Self {
        Self {
            total: page.total,
            page: page.page,
            limit: page.limit,
            transactions: page.items,
        }
    }
}

/// Every transaction, one page at a time.
pub async fn all(
    Pagination(page): Pagination,
    DatabaseConnection(mut conn): DatabaseConnection,
) -> AppResult<Json<TransactionsPage>> {
    let result = queries::list_transactions(&mut conn, &TransactionFilter::all(), page).await?;
    Ok(Json(result.into()))
}

/// Transactions the originating system created on the given UTC day.
pub async fn by_external_created_date(
    CalendarDate(date): CalendarDate,
    Pagination(page): Pagination,
    DatabaseConnection(mut conn): DatabaseConnection,
) -> AppResult<Json<TransactionsPage>> {
    let filter = TransactionFilter::external_created_within(UtcRange::day_of(date));
    let result = queries::list_transactions(&mut conn, &filter, page).await?;
    Ok(Json(result.into()))
}

/// Transactions whose original status matches `status` case-insensitively.
pub async fn by_status(
    JsonPath(status): JsonPath<String>,
    Pagination(page): Pagination,
    DatabaseConnection(mut conn): DatabaseConnection,
) -> AppResult<Json<TransactionsPage>> {
    let filter = TransactionFilter::status_original_like(status);
    let result = queries::list_transactions(&mut conn, &filter, page).await?;
    Ok(Json(result.into()))
}
