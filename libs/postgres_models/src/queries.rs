use diesel::dsl::{count_star, sql};
use diesel::expression::SqlLiteral;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Double, Nullable, Text};
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Transaction;
use crate::pagination::{PageRequest, Paginated};
use crate::range::UtcRange;
use crate::schema::external_transactions;
use crate::DbError;

type BoxedTransactions<ST> = external_transactions::BoxedQuery<'static, Pg, ST>;

/// `payload ->> 'psp'`, the payment service provider stored in the payload.
pub fn payload_psp() -> SqlLiteral<Nullable<Text>> {
    sql::<Nullable<Text>>("payload ->> 'psp'")
}

/// Conditions shared by the listing and aggregate queries.
///
/// Pattern fields are matched with `ILIKE`, so `%` and `_` act as wildcards
/// and comparison is case-insensitive on the database side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub external_created: Option<UtcRange>,
    pub status_original: Option<String>,
    pub psp: Option<String>,
}

impl TransactionFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn external_created_within(range: UtcRange) -> Self {
        Self {
            external_created: Some(range),
            ..Self::default()
        }
    }

    pub fn status_original_like(pattern: impl Into<String>) -> Self {
        Self {
            status_original: Some(pattern.into()),
            ..Self::default()
        }
    }

    pub fn and_psp_like(mut self, pattern: impl Into<String>) -> Self {
        self.psp = Some(pattern.into());
        self
    }

    fn apply<ST>(&self, mut query: BoxedTransactions<ST>) -> BoxedTransactions<ST> {
        if let Some(range) = self.external_created {
            query = query.filter(
                external_transactions::external_created_at.between(range.start, range.end),
            );
        }
        if let Some(pattern) = &self.status_original {
            query = query.filter(external_transactions::status_original.ilike(pattern.clone()));
        }
        if let Some(pattern) = &self.psp {
            query = query.filter(payload_psp().ilike(pattern.clone()));
        }
        query
    }
}

/// Sum of `amount` and number of rows matching a filter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AmountTotals {
    pub total_amount: f64,
    pub count: i64,
}

impl AmountTotals {
    fn from_row((total, count): (Option<f64>, i64)) -> Self {
        Self {
            total_amount: total.unwrap_or(0.0),
            count,
        }
    }
}

pub async fn list_transactions(
    conn: &mut AsyncPgConnection,
    filter: &TransactionFilter,
    page: PageRequest,
) -> Result<Paginated<Transaction>, DbError> {
    let total: i64 = filter
        .apply(external_transactions::table.count().into_boxed())
        .get_result(conn)
        .await?;

    let items = filter
        .apply(
            external_transactions::table
                .select(Transaction::as_select())
                .into_boxed(),
        )
        .order((
            external_transactions::created_at.asc(),
            external_transactions::uuid.asc(),
        ))
        .limit(page.limit)
        .offset(page.offset())
        .load::<Transaction>(conn)
        .await?;

    tracing::debug!(?filter, total, returned = items.len(), "listed transactions");
    Ok(Paginated::new(total, page, items))
}

pub async fn find_transaction(
    conn: &mut AsyncPgConnection,
    id: Uuid,
) -> Result<Option<Transaction>, DbError> {
    let transaction = external_transactions::table
        .find(id)
        .select(Transaction::as_select())
        .first::<Transaction>(conn)
        .await
        .optional()?;

    tracing::debug!(%id, found = transaction.is_some(), "looked up transaction");
    Ok(transaction)
}

type TotalsRow = (Nullable<Double>, BigInt);

fn totals_query(filter: &TransactionFilter) -> BoxedTransactions<TotalsRow> {
    filter.apply(
        external_transactions::table
            .select((diesel::dsl::sum(external_transactions::amount), count_star()))
            .into_boxed(),
    )
}

/// An empty match yields a zero total rather than `NULL`.
pub async fn total_amount(
    conn: &mut AsyncPgConnection,
    filter: &TransactionFilter,
) -> Result<AmountTotals, DbError> {
    let row: (Option<f64>, i64) = totals_query(filter).get_result(conn).await?;

    let totals = AmountTotals::from_row(row);
    tracing::debug!(?filter, ?totals, "summed transaction amounts");
    Ok(totals)
}
