//! Dashboard assembly
//!
//! One `Dashboard` is one full run: reload the catalog from disk, apply the
//! content-type selection, and execute every block against the filtered
//! records. Blocks share nothing beyond the filtered catalog and its derived
//! date columns, so their order here is arbitrary.

use crate::catalog::{Catalog, CatalogError};
use crate::mining::{self, GenreClusters};
use crate::sentiment::SentimentScorer;
use crate::stats::{self, CountEntry};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How many entries the country / genre / actor leaderboards keep.
const TOP_N: usize = 10;

/// Bin count for the sentiment distribution histogram.
const SENTIMENT_BINS: usize = 30;

/// User-controlled inputs for one run. `types: None` means every content
/// type present in the file (the multi-select default).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardParams {
    pub types: Option<Vec<String>>,
}

/// Mean value per group, for the rating/sentiment correlation chart.
#[derive(Debug, Clone, Serialize)]
pub struct MeanEntry {
    pub label: String,
    pub mean: f64,
}

/// Fixed-range histogram, rendered as a bar chart.
#[derive(Debug, Clone, Serialize)]
pub struct Histogram {
    pub lo: f64,
    pub hi: f64,
    pub counts: Vec<usize>,
}

/// Everything one page render needs, in chart-ready form.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub generated: String,
    pub source: String,
    pub available_types: Vec<String>,
    pub selected_types: Vec<String>,
    pub total_titles: usize,
    pub dropped_rows: usize,
    pub first_added: Option<String>,
    pub last_added: Option<String>,

    pub type_counts: Vec<CountEntry>,
    pub yearly_counts: Vec<CountEntry>,
    pub top_countries: Vec<CountEntry>,
    pub top_genres: Vec<CountEntry>,
    pub rating_counts: Vec<CountEntry>,
    pub month_counts: Vec<CountEntry>,
    pub genre_clusters: GenreClusters,
    pub sentiment_histogram: Histogram,
    pub sentiment_by_rating: Vec<MeanEntry>,
    pub top_actors: Vec<CountEntry>,
    pub monthly_series: Vec<CountEntry>,
}

impl Dashboard {
    /// Run the whole pipeline against `path`.
    ///
    /// The file is re-read on every call; nothing is cached between runs.
    pub fn build<P: AsRef<Path>>(
        path: P,
        params: &DashboardParams,
    ) -> Result<Dashboard, CatalogError> {
        let path = path.as_ref();
        let catalog = Catalog::load(path)?;

        let available_types = catalog.distinct_types();
        let selected_types = match &params.types {
            Some(types) => types.clone(),
            None => available_types.clone(),
        };
        let filtered = catalog.filter_types(&selected_types);
        let records = &filtered.records;

        let scorer = SentimentScorer::new();
        let sentiment = scorer.score_records(records);
        let rating_sentiment: Vec<(Option<&str>, f64)> = records
            .iter()
            .zip(&sentiment)
            .map(|(r, &s)| (r.rating.as_deref(), s))
            .collect();

        let first_added = records.iter().map(|r| r.date_added).min();
        let last_added = records.iter().map(|r| r.date_added).max();

        Ok(Dashboard {
            generated: chrono::Local::now().to_rfc3339(),
            source: path.display().to_string(),
            available_types,
            selected_types,
            total_titles: filtered.len(),
            dropped_rows: filtered.dropped_rows,
            first_added: first_added.map(|d| d.to_string()),
            last_added: last_added.map(|d| d.to_string()),

            type_counts: stats::value_counts(records, |r| Some(r.show_type.as_str())),
            yearly_counts: stats::yearly_counts(records)
                .into_iter()
                .map(|(year, count)| CountEntry {
                    label: year.to_string(),
                    count,
                })
                .collect(),
            top_countries: stats::exploded_counts(records, |r| r.country.as_deref(), TOP_N),
            top_genres: stats::exploded_counts(records, |r| r.listed_in.as_deref(), TOP_N),
            rating_counts: stats::value_counts(records, |r| r.rating.as_deref()),
            month_counts: stats::month_counts(records),
            genre_clusters: mining::cluster_genres(records),
            sentiment_histogram: Histogram {
                lo: -1.0,
                hi: 1.0,
                counts: stats::histogram(&sentiment, -1.0, 1.0, SENTIMENT_BINS),
            },
            sentiment_by_rating: stats::mean_by_group(&rating_sentiment)
                .into_iter()
                .map(|(label, mean)| MeanEntry { label, mean })
                .collect(),
            top_actors: stats::exploded_counts(records, |r| r.cast.as_deref(), TOP_N),
            monthly_series: stats::monthly_series(records),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // ==========================================================================
    // END-TO-END DASHBOARD TESTS
    // ==========================================================================
    //
    // Build the whole dashboard from a small fixture file and check the
    // cross-block contracts: the shared filter, the calendar re-index, the
    // empty-selection path.
    // ==========================================================================

    fn fixture() -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("create temp csv");
        writeln!(file, "type,date_added,country,listed_in,rating,description,cast").unwrap();
        let rows = [
            r#"Movie,"January 5, 2020","United States","Dramas, International Movies",PG-13,"A wonderful story of friendship.","Ann Lee, Bob Ray""#,
            r#"Movie,"July 4, 2020","United States",Comedies,PG,"A hilarious summer adventure.","Ann Lee""#,
            r#"TV Show,"July 9, 2021","United Kingdom","Crime TV Shows, Dramas",TV-MA,"A brutal murder investigation.","Cay Dee""#,
            r#"Movie,bad date,India,Dramas,R,"Unused - dropped at load.","Dee Jay""#,
            r#"TV Show,"December 25, 2021",,Documentaries,TV-PG,,"#,
        ];
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
        file
    }

    #[test]
    fn test_build_default_selection() {
        let file = fixture();
        let dash = Dashboard::build(file.path(), &DashboardParams::default()).expect("build");

        assert_eq!(dash.total_titles, 4);
        assert_eq!(dash.dropped_rows, 1);
        assert_eq!(dash.available_types, vec!["Movie", "TV Show"]);
        assert_eq!(dash.selected_types, dash.available_types);
        assert_eq!(dash.first_added.as_deref(), Some("2020-01-05"));
        assert_eq!(dash.last_added.as_deref(), Some("2021-12-25"));

        // Type counts, descending.
        assert_eq!(dash.type_counts[0].label, "Movie");
        assert_eq!(dash.type_counts[0].count, 2);

        // Dramas appears in two retained rows.
        assert_eq!(dash.top_genres[0].label, "Dramas");
        assert_eq!(dash.top_genres[0].count, 2);

        // Calendar re-index: always twelve months, July has two titles.
        assert_eq!(dash.month_counts.len(), 12);
        assert_eq!(dash.month_counts[6].label, "July");
        assert_eq!(dash.month_counts[6].count, 2);
        assert_eq!(dash.month_counts[2].count, 0);

        // One cluster label and one sentiment score per retained row.
        assert_eq!(dash.genre_clusters.labels.len(), 4);
        assert_eq!(dash.sentiment_histogram.counts.len(), 30);
        assert_eq!(
            dash.sentiment_histogram.counts.iter().sum::<usize>(),
            4
        );
    }

    #[test]
    fn test_build_filtered_selection() {
        let file = fixture();
        let params = DashboardParams {
            types: Some(vec!["TV Show".to_string()]),
        };
        let dash = Dashboard::build(file.path(), &params).expect("build");

        assert_eq!(dash.total_titles, 2);
        assert_eq!(dash.selected_types, vec!["TV Show"]);
        assert_eq!(dash.type_counts.len(), 1);
        assert_eq!(dash.type_counts[0].label, "TV Show");
        // The option list still shows everything in the file.
        assert_eq!(dash.available_types, vec!["Movie", "TV Show"]);
    }

    #[test]
    fn test_build_empty_selection_all_zero() {
        let file = fixture();
        let params = DashboardParams {
            types: Some(Vec::new()),
        };
        let dash = Dashboard::build(file.path(), &params).expect("build");

        assert_eq!(dash.total_titles, 0);
        assert!(dash.type_counts.is_empty());
        assert!(dash.top_genres.is_empty());
        assert!(dash.genre_clusters.labels.is_empty());
        assert_eq!(dash.month_counts.len(), 12);
        assert!(dash.month_counts.iter().all(|e| e.count == 0));
        assert_eq!(dash.sentiment_histogram.counts.iter().sum::<usize>(), 0);
    }

    #[test]
    fn test_build_missing_file_errors() {
        let err = Dashboard::build("/no/such/catalog.csv", &DashboardParams::default());
        assert!(err.is_err());
    }

    #[test]
    fn test_sentiment_by_rating_skips_unrated() {
        let file = fixture();
        let dash = Dashboard::build(file.path(), &DashboardParams::default()).expect("build");

        // The TV-PG documentary row has no description (neutral) but a
        // rating, so it appears; labels come out sorted.
        let labels: Vec<&str> = dash
            .sentiment_by_rating
            .iter()
            .map(|e| e.label.as_str())
            .collect();
        assert_eq!(labels, vec!["PG", "PG-13", "TV-MA", "TV-PG"]);
        for entry in &dash.sentiment_by_rating {
            assert!((-1.0..=1.0).contains(&entry.mean));
        }
    }
}
