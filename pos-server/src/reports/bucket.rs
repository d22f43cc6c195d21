//! Calendar bucketing
//!
//! Reconciles sparse aggregator rows (only periods with activity) against
//! the complete set of expected buckets, so presenters never special-case
//! missing days or months. Revenue stays in integer cents here.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

/// One labeled period of a dense report series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub label: String,
    pub total_cents: i64,
}

/// One entry per calendar day from `start` through `end_inclusive`, in
/// ascending order. Days absent from `sparse` get zero revenue. Rows that
/// map to the same day are summed, never overwritten.
///
/// Labels: `"05/06 - Thursday"` (`%d/%m - %A`).
pub fn dense_daily(
    start: NaiveDate,
    end_inclusive: NaiveDate,
    sparse: impl IntoIterator<Item = (NaiveDate, i64)>,
) -> Vec<Bucket> {
    let mut by_day: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for (day, cents) in sparse {
        *by_day.entry(day).or_insert(0) += cents;
    }

    let mut series = Vec::new();
    let mut day = start;
    while day <= end_inclusive {
        series.push(Bucket {
            label: day.format("%d/%m - %A").to_string(),
            total_cents: by_day.get(&day).copied().unwrap_or(0),
        });
        day += Duration::days(1);
    }
    series
}

/// One entry per supplied `(year, month)` pair, in the given order. The
/// last entry represents the future month and is forced to zero even when
/// sparse data matched it (guards against clock skew producing a spurious
/// future order). Colliding rows are summed.
///
/// Labels: `"06/2025"` (`MM/YYYY`).
pub fn dense_monthly(
    months: &[(i32, u32)],
    sparse: impl IntoIterator<Item = ((i32, u32), i64)>,
) -> Vec<Bucket> {
    let mut by_month: BTreeMap<(i32, u32), i64> = BTreeMap::new();
    for (month, cents) in sparse {
        *by_month.entry(month).or_insert(0) += cents;
    }

    let last = months.len().saturating_sub(1);
    months
        .iter()
        .enumerate()
        .map(|(idx, &(year, month))| Bucket {
            label: format!("{month:02}/{year:04}"),
            total_cents: if idx == last {
                0
            } else {
                by_month.get(&(year, month)).copied().unwrap_or(0)
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn daily_fills_gaps_with_zero() {
        let start = date(2025, 5, 30);
        let end = date(2025, 6, 5);
        let sparse = vec![(date(2025, 5, 31), 1250), (date(2025, 6, 3), 725)];

        let series = dense_daily(start, end, sparse);
        assert_eq!(series.len(), 7);
        assert_eq!(series[0].total_cents, 0);
        assert_eq!(series[1].total_cents, 1250);
        assert_eq!(series[4].total_cents, 725);
        assert_eq!(series[6].total_cents, 0);
    }

    #[test]
    fn daily_has_no_gaps_or_duplicates() {
        let start = date(2025, 5, 30);
        let end = date(2025, 6, 5);
        let series = dense_daily(start, end, Vec::new());

        assert_eq!(series.len(), 7);
        let labels: Vec<&str> = series.iter().map(|b| b.label.as_str()).collect();
        let mut deduped = labels.clone();
        deduped.dedup();
        assert_eq!(labels, deduped);
        assert!(series.iter().all(|b| b.total_cents == 0));
    }

    #[test]
    fn daily_label_format() {
        // 2025-06-05 is a Thursday
        let series = dense_daily(date(2025, 6, 5), date(2025, 6, 5), Vec::new());
        assert_eq!(series[0].label, "05/06 - Thursday");
    }

    #[test]
    fn daily_sums_colliding_rows() {
        let day = date(2025, 6, 5);
        let series = dense_daily(day, day, vec![(day, 1000), (day, 975)]);
        assert_eq!(series[0].total_cents, 1975);
    }

    #[test]
    fn daily_empty_range_when_start_after_end() {
        let series = dense_daily(date(2025, 6, 6), date(2025, 6, 5), Vec::new());
        assert!(series.is_empty());
    }

    #[test]
    fn monthly_orders_and_labels() {
        let months = [(2025, 4), (2025, 5), (2025, 6), (2025, 7)];
        let sparse = vec![((2025, 4), 500), ((2025, 6), 1200)];

        let series = dense_monthly(&months, sparse);
        assert_eq!(series.len(), 4);
        assert_eq!(series[0].label, "04/2025");
        assert_eq!(series[0].total_cents, 500);
        assert_eq!(series[1].total_cents, 0);
        assert_eq!(series[2].total_cents, 1200);
        assert_eq!(series[3].label, "07/2025");
    }

    #[test]
    fn monthly_forces_last_bucket_to_zero() {
        let months = [(2025, 4), (2025, 5), (2025, 6), (2025, 7)];
        // A row somehow landed in the future month; it must not surface.
        let sparse = vec![((2025, 7), 9999)];
        let series = dense_monthly(&months, sparse);
        assert_eq!(series[3].total_cents, 0);
    }

    #[test]
    fn monthly_sums_colliding_rows() {
        let months = [(2025, 4), (2025, 5), (2025, 6), (2025, 7)];
        let sparse = vec![((2025, 5), 100), ((2025, 5), 250)];
        let series = dense_monthly(&months, sparse);
        assert_eq!(series[1].total_cents, 350);
    }
}
