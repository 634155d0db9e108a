use crate::errors::AppError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use chrono::NaiveDate;

pub const INVALID_DATE: &str = "Invalid date format";

/// Strict `YYYY-MM-DD`: zero padded, ten characters, a real calendar day.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let well_formed = raw.len() == 10
        && raw.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// The `:date` path segment, rejected with a 400 when it is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate(pub NaiveDate);

#[async_trait]
impl<S> FromRequestParts<S> for CalendarDate
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::bad_request(INVALID_DATE))?;

        parse_calendar_date(&raw)
            .map(CalendarDate)
            .ok_or_else(|| AppError::bad_request(INVALID_DATE))
    }
}
