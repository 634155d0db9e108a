mod database;
mod date;
mod json;
mod pagination;
mod path;
mod psp;
mod transaction_id;

pub use database::DatabaseConnection;
pub use date::{parse_calendar_date, CalendarDate, INVALID_DATE};
pub use json::JsonBody;
pub use pagination::{parse_positive_or, Pagination};
pub use path::JsonPath;
pub use psp::Psp;
pub use transaction_id::TransactionId;
