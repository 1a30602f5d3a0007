//! Aggregation blocks
//!
//! Every function here is a pure fold over the filtered record slice, each
//! one feeding exactly one chart. Blocks are independent: a row missing its
//! country contributes to no country count but still counts toward genres or
//! ratings. Counts are ordered by descending frequency with first-seen order
//! breaking ties, except where a block re-indexes explicitly (calendar
//! months, years, the monthly time series).

use crate::catalog::{split_multi, Record, MONTH_NAMES};
use chrono::Datelike;
use serde::Serialize;
use std::collections::HashMap;

/// One bar of a frequency chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountEntry {
    pub label: String,
    pub count: usize,
}

/// Frequency count over a single-valued field, descending.
///
/// `field` returns None to drop the row from this block only.
pub fn value_counts<F>(records: &[Record], field: F) -> Vec<CountEntry>
where
    F: Fn(&Record) -> Option<&str>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for record in records {
        if let Some(value) = field(record) {
            let entry = counts.entry(value).or_insert_with(|| {
                order.push(value);
                0
            });
            *entry += 1;
        }
    }

    sort_by_count(order, &counts)
}

/// Explode a `", "`-delimited multi-value field and count each value,
/// keeping the `top_n` most frequent. Rows where the field is missing are
/// dropped from this block.
pub fn exploded_counts<F>(records: &[Record], field: F, top_n: usize) -> Vec<CountEntry>
where
    F: Fn(&Record) -> Option<&str>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for record in records {
        if let Some(raw) = field(record) {
            for value in split_multi(raw) {
                match counts.get_mut(value) {
                    Some(n) => *n += 1,
                    None => {
                        order.push(value.to_string());
                        counts.insert(value.to_string(), 1);
                    }
                }
            }
        }
    }

    let mut entries: Vec<CountEntry> = order
        .into_iter()
        .map(|label| {
            let count = counts[&label];
            CountEntry { label, count }
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(top_n);
    entries
}

/// Titles added per year, ascending year.
pub fn yearly_counts(records: &[Record]) -> Vec<(i32, usize)> {
    let mut counts: HashMap<i32, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.year_added()).or_insert(0) += 1;
    }
    let mut entries: Vec<(i32, usize)> = counts.into_iter().collect();
    entries.sort_by_key(|&(year, _)| year);
    entries
}

/// Titles added per calendar month, re-indexed to all twelve months in
/// calendar order. Months with no content report zero rather than being
/// absent.
pub fn month_counts(records: &[Record]) -> Vec<CountEntry> {
    let mut by_month = [0usize; 12];
    for record in records {
        by_month[record.date_added.month0() as usize] += 1;
    }
    MONTH_NAMES
        .iter()
        .zip(by_month)
        .map(|(name, count)| CountEntry {
            label: (*name).to_string(),
            count,
        })
        .collect()
}

/// Titles added per year-month bucket, ascending, for the time-series line.
/// Labels are "YYYY-MM".
pub fn monthly_series(records: &[Record]) -> Vec<CountEntry> {
    let mut counts: HashMap<(i32, u32), usize> = HashMap::new();
    for record in records {
        let key = (record.date_added.year(), record.date_added.month());
        *counts.entry(key).or_insert(0) += 1;
    }
    let mut keys: Vec<(i32, u32)> = counts.keys().copied().collect();
    keys.sort();
    keys.into_iter()
        .map(|key| CountEntry {
            label: format!("{:04}-{:02}", key.0, key.1),
            count: counts[&key],
        })
        .collect()
}

/// Mean of `value` per group, descending group frequency ignored - groups
/// come out sorted by label for a stable chart. Rows with no group are
/// dropped.
pub fn mean_by_group(pairs: &[(Option<&str>, f64)]) -> Vec<(String, f64)> {
    let mut sums: HashMap<&str, (f64, usize)> = HashMap::new();
    for &(group, value) in pairs {
        if let Some(group) = group {
            let entry = sums.entry(group).or_insert((0.0, 0));
            entry.0 += value;
            entry.1 += 1;
        }
    }
    let mut entries: Vec<(String, f64)> = sums
        .into_iter()
        .map(|(group, (sum, n))| (group.to_string(), sum / n as f64))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries
}

/// Histogram of `values` over `[lo, hi]` with `bins` fixed-width bins.
/// Values outside the range are clamped into the edge bins.
pub fn histogram(values: &[f64], lo: f64, hi: f64, bins: usize) -> Vec<usize> {
    let mut counts = vec![0usize; bins];
    if bins == 0 || hi <= lo {
        return counts;
    }
    let width = (hi - lo) / bins as f64;
    for &v in values {
        let idx = ((v - lo) / width).floor() as i64;
        let idx = idx.clamp(0, bins as i64 - 1) as usize;
        counts[idx] += 1;
    }
    counts
}

fn sort_by_count(order: Vec<&str>, counts: &HashMap<&str, usize>) -> Vec<CountEntry> {
    let mut entries: Vec<CountEntry> = order
        .into_iter()
        .map(|label| CountEntry {
            count: counts[label],
            label: label.to_string(),
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}
