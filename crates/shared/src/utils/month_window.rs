use crate::model::{driver::DriverModel, merchant::MerchantModel, transaction::TransactionModel};
use crate::utils::parse_datetime;
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

/// Inclusive timestamp range covering one calendar month.
///
/// The end of a month's window is exactly one nanosecond before the start of
/// the next month, so consecutive windows are contiguous and never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl MonthWindow {
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }
}

/// Records that expose a raw upstream `created_at` timestamp.
pub trait CreatedAt {
    fn created_at(&self) -> &str;
}

impl CreatedAt for TransactionModel {
    fn created_at(&self) -> &str {
        &self.created_at
    }
}

impl CreatedAt for MerchantModel {
    fn created_at(&self) -> &str {
        &self.created_at
    }
}

impl CreatedAt for DriverModel {
    fn created_at(&self) -> &str {
        &self.created_at
    }
}

fn first_instant_of_month(year: i32, month: u32) -> DateTime<Utc> {
    // Month numbers come from chrono (1..=12), so the constructors cannot fail.
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

/// Window for the calendar month containing `now`.
///
/// `now` is captured once per stats refresh and threaded through the whole
/// pipeline; nothing in here reads the clock.
pub fn current_month_window(now: DateTime<Utc>) -> MonthWindow {
    let start = first_instant_of_month(now.year(), now.month());

    let (next_year, next_month) = if now.month() == 12 {
        (now.year() + 1, 1)
    } else {
        (now.year(), now.month() + 1)
    };
    let end = first_instant_of_month(next_year, next_month) - Duration::nanoseconds(1);

    MonthWindow { start, end }
}

/// Window for the calendar month immediately preceding `now`'s month,
/// rolling into the previous year at January.
pub fn previous_month_window(now: DateTime<Utc>) -> MonthWindow {
    let (prev_year, prev_month) = if now.month() == 1 {
        (now.year() - 1, 12)
    } else {
        (now.year(), now.month() - 1)
    };

    let start = first_instant_of_month(prev_year, prev_month);
    let end = first_instant_of_month(now.year(), now.month()) - Duration::nanoseconds(1);

    MonthWindow { start, end }
}

/// Records created within `window`, bounds inclusive.
///
/// Records whose timestamps fail to parse are skipped rather than surfaced
/// as errors; upstream data is not clean enough to be strict here.
pub fn filter_by_window<'a, T: CreatedAt>(records: &'a [T], window: &MonthWindow) -> Vec<&'a T> {
    records
        .iter()
        .filter(|record| {
            parse_datetime(record.created_at())
                .map(|created| window.contains(created))
                .unwrap_or(false)
        })
        .collect()
}

/// Cumulative count of records created strictly before `instant`.
///
/// The merchants/drivers previous-period figure deliberately compares against
/// the whole base that existed before the current month began, not against a
/// previous-month bucket; transactions use true monthly buckets. The two are
/// intentionally not unified.
pub fn created_before<T: CreatedAt>(records: &[T], instant: DateTime<Utc>) -> usize {
    records
        .iter()
        .filter(|record| {
            parse_datetime(record.created_at())
                .map(|created| created < instant)
                .unwrap_or(false)
        })
        .count()
}
