//! CSV report: every aggregation table flattened into block,label,value rows
//!
//! Spreadsheet-friendly long format - one row per bar of every chart, with
//! the block name as the first column.

use crate::dashboard::Dashboard;
use crate::stats::CountEntry;
use std::io::{self, Write};

pub fn write<W: Write>(writer: &mut W, dashboard: &Dashboard) -> io::Result<()> {
    let mut out = csv::Writer::from_writer(writer);

    out.write_record(["block", "label", "value"])
        .map_err(io::Error::other)?;

    write_counts(&mut out, "type_counts", &dashboard.type_counts)?;
    write_counts(&mut out, "yearly_counts", &dashboard.yearly_counts)?;
    write_counts(&mut out, "top_countries", &dashboard.top_countries)?;
    write_counts(&mut out, "top_genres", &dashboard.top_genres)?;
    write_counts(&mut out, "rating_counts", &dashboard.rating_counts)?;
    write_counts(&mut out, "month_counts", &dashboard.month_counts)?;

    for (i, count) in dashboard.genre_clusters.counts.iter().enumerate() {
        out.write_record(["cluster_counts", &i.to_string(), &count.to_string()])
            .map_err(io::Error::other)?;
    }
    for entry in &dashboard.sentiment_by_rating {
        out.write_record([
            "sentiment_by_rating",
            &entry.label,
            &format!("{:.4}", entry.mean),
        ])
        .map_err(io::Error::other)?;
    }

    write_counts(&mut out, "top_actors", &dashboard.top_actors)?;
    write_counts(&mut out, "monthly_series", &dashboard.monthly_series)?;

    out.flush()
}

fn write_counts<W: Write>(
    out: &mut csv::Writer<W>,
    block: &str,
    entries: &[CountEntry],
) -> io::Result<()> {
    for entry in entries {
        out.write_record([block, &entry.label, &entry.count.to_string()])
            .map_err(io::Error::other)?;
    }
    Ok(())
}
