use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use postgres_models::pagination::{PageRequest, DEFAULT_LIMIT, DEFAULT_PAGE};
use serde::Deserialize;
use std::convert::Infallible;

#[derive(Debug, Default, Deserialize)]
struct RawPagination {
    page: Option<String>,
    limit: Option<String>,
}

/// Reads the leading integer of `raw`, returning `default` unless it is
/// positive.
///
/// Trailing text is ignored (`"2.5"` is 2, `"10abc"` is 10). Absent,
/// non-numeric, zero and negative values all fall back; callers never see a
/// validation error for paging input.
pub fn parse_positive_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(leading_integer)
        .filter(|value| *value >= 1)
        .unwrap_or(default)
}

/// An optionally signed run of digits at the start of `raw`.
fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let digits = unsigned.len() - unsigned.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    let sign = trimmed.len() - unsigned.len();
    trimmed[..sign + digits].parse().ok()
}

/// `page` and `limit` from the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination(pub PageRequest);

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = Query::<RawPagination>::try_from_uri(&parts.uri)
            .map(|Query(raw)| raw)
            .unwrap_or_default();

        Ok(Pagination(PageRequest::new(
            parse_positive_or(raw.page.as_deref(), DEFAULT_PAGE),
            parse_positive_or(raw.limit.as_deref(), DEFAULT_LIMIT),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(uri: &str) -> PageRequest {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        let Pagination(page) = Pagination::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        page
    }

    #[test]
    fn parses_positive_numbers() {
        assert_eq!(parse_positive_or(Some("3"), 1), 3);
        assert_eq!(parse_positive_or(Some(" 25 "), 10), 25);
    }

    #[test]
    fn falls_back_on_bad_input() {
        assert_eq!(parse_positive_or(None, 10), 10);
        assert_eq!(parse_positive_or(Some("abc"), 10), 10);
        assert_eq!(parse_positive_or(Some("0"), 10), 10);
        assert_eq!(parse_positive_or(Some("-4"), 1), 1);
        assert_eq!(parse_positive_or(Some("+"), 1), 1);
        assert_eq!(parse_positive_or(Some("99999999999999999999"), 10), 10);
    }

    #[test]
    fn ignores_text_after_leading_digits() {
        assert_eq!(parse_positive_or(Some("2.5"), 1), 2);
        assert_eq!(parse_positive_or(Some("10abc"), 1), 10);
        assert_eq!(parse_positive_or(Some("+3"), 1), 3);
        assert_eq!(parse_positive_or(Some("-3px"), 1), 1);
    }

    #[tokio::test]
    async fn defaults_without_query() {
        assert_eq!(extract("/api/v1/transactions").await, PageRequest::new(1, 10));
    }

    #[tokio::test]
    async fn reads_page_and_limit() {
        assert_eq!(
            extract("/api/v1/transactions?page=4&limit=2").await,
            PageRequest::new(4, 2)
        );
    }

    #[tokio::test]
    async fn ignores_unrelated_and_garbage_values() {
        assert_eq!(
            extract("/x?psp=stripe&page=two&limit=").await,
            PageRequest::new(1, 10)
        );
    }

    #[tokio::test]
    async fn reads_leading_digits_of_paging_values() {
        assert_eq!(
            extract("/x?page=2.5&limit=10abc").await,
            PageRequest::new(2, 10)
        );
    }
}
