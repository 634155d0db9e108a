use axum::{
    routing::{get, post},
    Router,
};

mod convert;
mod list;
mod lookup;
mod totals;

pub fn router() -> Router<crate::AppState> {
    Router::new()
        .route("/", get(list::all))
        .route("/convertCurrency", post(convert::handler))
        .route("/:id", get(lookup::handler))
        .route("/getByExternalCreatedDate/:date", get(list::by_external_created_date))
        .route("/getByStatus/:status", get(list::by_status))
        .route("/getTotalAmountPaidForAMonth/:date", get(totals::for_month))
        .route("/getTotalAmountPaidForAMonthByPsp/:date", get(totals::for_month_by_psp))
        .route("/getTotalAmountOfTransactionsByStatus/:status", get(totals::by_status))
}
