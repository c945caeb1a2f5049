use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

pub type Id = String;

pub fn generate_id() -> Id {
    Uuid::new_v4().to_string()
}

/// Medium date used on rendered pages, e.g. "Oct 3, 2023".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// ISO date used in form `value` attributes.
pub fn format_date_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn format_datetime(ts: DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y").to_string()
}
