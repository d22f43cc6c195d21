//! Report window selection
//!
//! Callers pick a window with a fixed keyword vocabulary; everything else
//! is rejected before any query runs. Windows are half-open day ranges
//! `[start, end)` anchored on the request's captured "today".

use chrono::{Datelike, Duration, Months, NaiveDate};
use chrono_tz::Tz;

use crate::utils::time::day_start_millis;

/// Caller-supplied time window keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFilter {
    Today,
    Yesterday,
    Past7Days,
    Past14Days,
    Past30Days,
}

impl DateFilter {
    /// Parse a `date_filter` query value. Unknown keywords yield `None`;
    /// the handler turns that into a client error naming the value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "today" => Some(Self::Today),
            "yesterday" => Some(Self::Yesterday),
            "7days" => Some(Self::Past7Days),
            "14days" => Some(Self::Past14Days),
            "30days" => Some(Self::Past30Days),
            _ => None,
        }
    }

    /// Resolve the half-open window for this filter anchored on `today`.
    pub fn window(self, today: NaiveDate) -> DateWindow {
        match self {
            Self::Today => DateWindow::single_day(today),
            Self::Yesterday => DateWindow::single_day(today - Duration::days(1)),
            Self::Past7Days => DateWindow::last_days(today, 7),
            Self::Past14Days => DateWindow::last_days(today, 14),
            Self::Past30Days => DateWindow::last_days(today, 30),
        }
    }
}

/// Half-open calendar date range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Window covering exactly one calendar day.
    pub fn single_day(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day + Duration::days(1),
        }
    }

    /// Window covering the last `days` calendar days ending with `today`
    /// inclusive.
    pub fn last_days(today: NaiveDate, days: i64) -> Self {
        Self {
            start: today - Duration::days(days - 1),
            end: today + Duration::days(1),
        }
    }

    /// Last day inside the window (inclusive upper bound for bucketing).
    pub fn last_day(&self) -> NaiveDate {
        self.end - Duration::days(1)
    }

    /// Lower bound as Unix millis in the business timezone.
    pub fn start_millis(&self, tz: Tz) -> i64 {
        day_start_millis(self.start, tz)
    }

    /// Exclusive upper bound as Unix millis in the business timezone.
    pub fn end_millis(&self, tz: Tz) -> i64 {
        day_start_millis(self.end, tz)
    }
}

/// The four months of the monthly report: two months prior, previous
/// month, current month, next month - in that order. The monthly report
/// does not accept the `date_filter` vocabulary; this fixed span is its
/// only window.
pub fn report_months(today: NaiveDate) -> [(i32, u32); 4] {
    let first = first_of_month(today);
    [
        shift_months(first, -2),
        shift_months(first, -1),
        first,
        shift_months(first, 1),
    ]
    .map(|date| (date.year(), date.month()))
}

/// Window spanning all four report months (first day of the earliest
/// through the end of the last).
pub fn month_window(months: &[(i32, u32); 4]) -> DateWindow {
    let (start_year, start_month) = months[0];
    let (end_year, end_month) = months[3];
    let start = first_day(start_year, start_month);
    let end = shift_months(first_day(end_year, end_month), 1);
    DateWindow { start, end }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn first_day(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
}

fn shift_months(first: NaiveDate, delta: i32) -> NaiveDate {
    if delta >= 0 {
        first
            .checked_add_months(Months::new(delta as u32))
            .unwrap_or(first)
    } else {
        first
            .checked_sub_months(Months::new((-delta) as u32))
            .unwrap_or(first)
    }
}
