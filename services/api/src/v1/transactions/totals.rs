use axum::Json;
use postgres_models::{queries, AmountTotals, TransactionFilter, UtcRange};
use serde::Serialize;

use crate::{
    errors::AppResult,
    extractors::{CalendarDate, DatabaseConnection, JsonPath, Psp},
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTotal {
    pub date_from: String,
    pub date_to: String,
    pub total_amount_paid: f64,
    pub no_of_transactions: i64,
}

impl MonthlyTotal {
    fn new(month: UtcRange, totals: AmountTotals) -> Self {
        Self {
            date_from: month.start_iso(),
            date_to: month.end_iso(),
            total_amount_paid: totals.total_amount,
            no_of_transactions: totals.count,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusTotal {
    pub transaction_status: String,
    pub total_amount_paid: f64,
    pub no_of_transactions: i64,
}

pub async fn for_month(
    CalendarDate(date): CalendarDate,
    DatabaseConnection(mut conn): DatabaseConnection,
) -> AppResult<Json<MonthlyTotal>> {
    let month = UtcRange::month_of(date);
    let filter = TransactionFilter::external_created_within(month);
    let totals = queries::total_amount(&mut conn, &filter).await?;
    Ok(Json(MonthlyTotal::new(month, totals)))
}

pub async fn for_month_by_psp(
    CalendarDate(date): CalendarDate,
    Psp(psp): Psp,
    DatabaseConnection(mut conn): DatabaseConnection,
) -> AppResult<Json<MonthlyTotal>> {
    let month = UtcRange::month_of(date);
    let filter = TransactionFilter::external_created_within(month).and_psp_like(psp);
    let totals = queries::total_amount(&mut conn, &filter).await?;
    Ok(Json(MonthlyTotal::new(month, totals)))
}

pub async fn by_status(
    JsonPath(status): JsonPath<String>,
    DatabaseConnection(mut conn): DatabaseConnection,
) -> AppResult<Json<StatusTotal>> {
    let filter = TransactionFilter::status_original_like(status.clone());
    let totals = queries::total_amount(&mut conn, &filter).await?;

    Ok(Json(StatusTotal {
        transaction_status: status,
        total_amount_paid: totals.total_amount,
        no_of_transactions: totals.count,
    }))
}
