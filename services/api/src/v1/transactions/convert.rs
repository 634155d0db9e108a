use axum::{extract::State, Json};
use fx_rates::Conversion;
use serde::Deserialize;

use crate::{
    errors::{AppError, AppResult},
    extractors::JsonBody,
    AppState,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertCurrencyRequest {
    pub target_currency: String,
    pub amount: f64,
}

/// Converts `amount` into `targetCurrency` at today's rate.
pub async fn handler(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ConvertCurrencyRequest>,
) -> AppResult<Json<Conversion>> {
    let currency = request.target_currency.trim();
    if currency.is_empty() {
        return Err(AppError::bad_request("targetCurrency must not be empty"));
    }

    tracing::info!(currency, amount = request.amount, "converting amount");
    let conversion = state.fx_rates.convert(currency, request.amount).await?;
    Ok(Json(conversion))
}
