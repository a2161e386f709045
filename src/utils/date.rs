use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn current_year() -> i32 {
    today().year()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Inclusive lower bound of a trailing window of `days` days ending at `now`.
pub fn window_start(now: NaiveDate, days: i64) -> NaiveDate {
    now - chrono::Duration::days(days)
}
