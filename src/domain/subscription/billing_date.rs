//! Termination date arithmetic.
//!
//! A cancelled subscription stays active until the end of the billing cycle
//! it is currently in. Yearly plans end exactly one calendar year after the
//! start instant. Monthly plans end on the next occurrence of the billing
//! day, counted from the day of cancellation.
//!
//! All arithmetic is UTC. Results that would fall beyond chrono's range
//! saturate at the maximum representable instant.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::domain::catalog::PricePeriod;
use crate::domain::foundation::Timestamp;

/// Computes the instant at which a subscription cancelled at `now` ends.
///
/// - `Yearly`: `start_date` plus one calendar year, time of day kept. A
///   Feb 29 start lands on Mar 1 in a non-leap year.
/// - anything else: the next billing day strictly after today, at midnight.
///   The billing day is the start date's day of month, clamped to the
///   length of the target month.
pub fn compute_end_date(now: Timestamp, start_date: Timestamp, period: PricePeriod) -> Timestamp {
    let end = match period {
        PricePeriod::Yearly => one_year_after(start_date.as_datetime().naive_utc()),
        _ => next_billing_day(now.as_datetime().date_naive(), start_date.as_datetime().day())
            .map(|date| date.and_time(NaiveTime::MIN)),
    };

    Timestamp::from_datetime(end.map(|dt| dt.and_utc()).unwrap_or(DateTime::<Utc>::MAX_UTC))
}

/// Number of days in `month` (1-12) of `year`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn one_year_after(start: NaiveDateTime) -> Option<NaiveDateTime> {
    let year = start.year().checked_add(1)?;
    let month = start.month();
    let day = start.day();
    let month_length = days_in_month(year, month);

    let date = if day <= month_length {
        NaiveDate::from_ymd_opt(year, month, day)?
    } else {
        // Excess days spill into the following month.
        let (next_year, next_month) = following_month(year, month)?;
        NaiveDate::from_ymd_opt(next_year, next_month, day - month_length)?
    };

    Some(date.and_time(start.time()))
}

fn next_billing_day(today: NaiveDate, billing_day: u32) -> Option<NaiveDate> {
    let candidate = clamped_date(today.year(), today.month(), billing_day)?;
    if candidate > today {
        return Some(candidate);
    }

    let (year, month) = following_month(today.year(), today.month())?;
    clamped_date(year, month, billing_day)
}

fn clamped_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day.min(days_in_month(year, month)))
}

fn following_month(year: i32, month: u32) -> Option<(i32, u32)> {
    if month == 12 {
        Some((year.checked_add(1)?, 1))
    } else {
        Some((year, month + 1))
    }
}
