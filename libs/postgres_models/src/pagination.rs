use serde::Serialize;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

/// A 1-based page of `limit` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl PageRequest {
    /// Values below 1 are clamped to 1.
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_LIMIT)
    }
}

/// One page of results together with the full match count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paginated<T> {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub items: Vec<T>,
}

impl<T> Paginated<T> {
    pub fn new(total: i64, request: PageRequest, items: Vec<T>) -> Self {
        Self {
            total,
            page: request.page,
            limit: request.limit,
            items,
        }
    }
}
