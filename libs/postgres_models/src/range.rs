use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveTime, SecondsFormat, Utc};

/// An inclusive UTC interval `[start, end]`.
///
/// `end` sits one microsecond before the next period starts, which is the
/// finest resolution a Postgres `timestamptz` can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtcRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl UtcRange {
    /// The calendar day containing `date`.
    pub fn day_of(date: NaiveDate) -> Self {
        let start = date.and_time(NaiveTime::MIN).and_utc();
        Self::until(start, start + Duration::days(1))
    }

    /// The calendar month containing `date`.
    pub fn month_of(date: NaiveDate) -> Self {
        let first = date - Duration::days(i64::from(date.day0()));
        let next = first + Months::new(1);
        Self::until(
            first.and_time(NaiveTime::MIN).and_utc(),
            next.and_time(NaiveTime::MIN).and_utc(),
        )
    }

    fn until(start: DateTime<Utc>, next: DateTime<Utc>) -> Self {
        Self {
            start,
            end: next - Duration::microseconds(1),
        }
    }

    /// `start` as an ISO-8601 string with millisecond precision.
    pub fn start_iso(&self) -> String {
        self.start.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// `end` as an ISO-8601 string with millisecond precision.
    pub fn end_iso(&self) -> String {
        self.end.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
