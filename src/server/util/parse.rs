use chrono::{Datelike, NaiveDate};

use crate::server::{error::AppError, model::analytics::MonthRange};

/// Parses a `YYYY-MM` month into its first and last calendar day.
///
/// # Arguments
/// - `value` - Month string such as `"2026-02"`
///
/// # Returns
/// - `Ok(MonthRange)` - Inclusive range covering the month
/// - `Err(AppError::BadRequest)` - Value is not a valid `YYYY-MM` month
pub fn parse_month(value: &str) -> Result<MonthRange, AppError> {
    let invalid = || AppError::BadRequest(format!("Invalid month '{}', expected YYYY-MM", value));

    let (year, month) = value.trim().split_once('-').ok_or_else(invalid)?;
    if year.len() != 4 || month.len() != 2 {
        return Err(invalid());
    }

    let year = year.parse::<i32>().map_err(|_| invalid())?;
    let month = month.parse::<u32>().map_err(|_| invalid())?;
    let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;

    month_of(first_day).ok_or_else(invalid)
}

/// Returns the calendar month containing `date`.
///
/// `None` only at the upper edge of chrono's date range.
pub fn month_of(date: NaiveDate) -> Option<MonthRange> {
    let first_day = date.with_day(1)?;
    let next_month = if first_day.month() == 12 {
        NaiveDate::from_ymd_opt(first_day.year() + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(first_day.year(), first_day.month() + 1, 1)?
    };

    Some(MonthRange {
        first_day,
        last_day: next_month.pred_opt()?,
    })
}
