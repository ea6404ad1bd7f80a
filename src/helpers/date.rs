//! Date helper functions

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

/// Month abbreviations indexed by 0-based calendar month
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format an ISO-8601 timestamp as `"Mar 5, 2024"`.
///
/// Unparseable input is returned unchanged.
///
/// # Examples
/// ```ignore
/// format_date("2024-03-05T00:00:00Z") // -> "Mar 5, 2024"
/// format_date("not-a-date")           // -> "not-a-date"
/// ```
pub fn format_date(iso: &str) -> String {
    match parse_timestamp(iso) {
        Some(date) => format!(
            "{} {}, {}",
            MONTHS[date.month0() as usize],
            date.day(),
            date.year()
        ),
        None => iso.to_string(),
    }
}

/// Parse the timestamp shapes PostgREST and hand-written data produce
fn parse_timestamp(iso: &str) -> Option<DateTime<Utc>> {
    let iso = iso.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(iso) {
        return Some(date.with_timezone(&Utc));
    }

    // Postgres `timestamptz` text form, e.g. "2024-03-05 00:00:00+00"
    for format in ["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"] {
        if let Ok(date) = DateTime::parse_from_str(iso, format) {
            return Some(date.with_timezone(&Utc));
        }
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(date) = NaiveDateTime::parse_from_str(iso, format) {
            return Some(date.and_utc());
        }
    }

    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|date| date.and_utc())
}
