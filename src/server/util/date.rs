use chrono::{Days, NaiveDate, Utc};

/// Current UTC calendar date; the reference "today" for every date default.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Date `days` before `date`, saturating at chrono's minimum date.
pub fn days_before(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days))
        .unwrap_or(NaiveDate::MIN)
}
