//! Catalog loading and filtering
//!
//! The catalog is one CSV of pre-cleaned streaming metadata. Loading parses
//! the `date_added` column and drops every row whose date can't be read -
//! all downstream aggregation assumes a valid date on every record. Nothing
//! is cached between runs: callers reload the file on every interaction.

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;

/// Date formats accepted for `date_added`. The dataset's native format is
/// "September 25, 2021"; ISO and US-slash forms show up in hand-edited rows.
const DATE_FORMATS: &[&str] = &["%B %d, %Y", "%Y-%m-%d", "%m/%d/%Y"];

/// Calendar month names, in calendar order. Month counts are always reported
/// against this full list, zeros included.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
}

/// Raw CSV row, before date parsing. Field names match the file's header.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "type")]
    show_type: String,
    date_added: Option<String>,
    country: Option<String>,
    listed_in: Option<String>,
    rating: Option<String>,
    description: Option<String>,
    cast: Option<String>,
}

/// One catalog record with a successfully parsed date.
#[derive(Debug, Clone)]
pub struct Record {
    pub show_type: String,
    pub date_added: NaiveDate,
    pub country: Option<String>,
    pub listed_in: Option<String>,
    pub rating: Option<String>,
    pub description: Option<String>,
    pub cast: Option<String>,
}

impl Record {
    pub fn year_added(&self) -> i32 {
        self.date_added.year()
    }

    /// Month of `date_added`, 1-12.
    pub fn month_added(&self) -> u32 {
        self.date_added.month()
    }

    pub fn month_name_added(&self) -> &'static str {
        MONTH_NAMES[(self.date_added.month0()) as usize]
    }
}

/// The in-memory catalog: every record that survived date parsing, plus the
/// count of rows dropped at load time.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub records: Vec<Record>,
    pub dropped_rows: usize,
}

impl Catalog {
    /// Load a catalog from a CSV file.
    ///
    /// Rows whose `date_added` is missing or unparseable are silently dropped
    /// (their count is kept in `dropped_rows`). A missing file or a missing
    /// required column fails the whole load.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let file = std::fs::File::open(path).map_err(|source| CatalogError::Io {
            path: path_str.clone(),
            source,
        })?;
        let mut reader = csv::Reader::from_reader(file);

        // Deserialization by header name silently yields None for absent
        // columns on Option fields, so check the header up front.
        let headers = reader.headers().map_err(|e| CatalogError::Csv {
            path: path_str.clone(),
            source: e,
        })?;
        for required in ["type", "date_added", "listed_in", "rating", "description"] {
            if !headers.iter().any(|h| h == required) {
                return Err(CatalogError::MissingColumn(required));
            }
        }

        let mut records = Vec::new();
        let mut dropped_rows = 0usize;

        for row in reader.deserialize::<RawRow>() {
            let raw = row.map_err(|e| CatalogError::Csv {
                path: path_str.clone(),
                source: e,
            })?;

            match raw.date_added.as_deref().and_then(parse_date) {
                Some(date) => records.push(Record {
                    show_type: raw.show_type,
                    date_added: date,
                    country: none_if_blank(raw.country),
                    listed_in: none_if_blank(raw.listed_in),
                    rating: none_if_blank(raw.rating),
                    description: none_if_blank(raw.description),
                    cast: none_if_blank(raw.cast),
                }),
                None => dropped_rows += 1,
            }
        }

        Ok(Catalog {
            records,
            dropped_rows,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct content types present, sorted. This is both the option list
    /// for the UI multi-select and the default (everything) selection.
    pub fn distinct_types(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.records.iter().map(|r| r.show_type.as_str()).collect();
        set.into_iter().map(String::from).collect()
    }

    /// Restrict the catalog to records whose type is in `selection`.
    ///
    /// An empty selection is a valid choice and yields an empty catalog -
    /// every chart downstream shows zero, nothing errors.
    pub fn filter_types(&self, selection: &[String]) -> Catalog {
        Catalog {
            records: self
                .records
                .iter()
                .filter(|r| selection.iter().any(|t| t == &r.show_type))
                .cloned()
                .collect(),
            dropped_rows: self.dropped_rows,
        }
    }
}

/// Parse a `date_added` cell, trimming whitespace first. Returns None when no
/// accepted format matches.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

fn none_if_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Split a `", "`-delimited multi-value field into its values.
///
/// Used by every exploded count (countries, genres, cast). Values are
/// trimmed; empty fragments are skipped.
pub fn split_multi(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // ==========================================================================
    // DATE PARSING TESTS
    // ==========================================================================
    //
    // date_added is the only parsed column, and every retained row must carry
    // a valid date - aggregation by year and month depends on it.
    // ==========================================================================

    #[test]
    fn test_parse_native_format() {
        assert_eq!(
            parse_date("September 25, 2021"),
            NaiveDate::from_ymd_opt(2021, 9, 25)
        );
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(
            parse_date("  January 1, 2020 "),
            NaiveDate::from_ymd_opt(2020, 1, 1)
        );
    }

    #[test]
    fn test_parse_iso_and_slash_formats() {
        assert_eq!(parse_date("2019-07-04"), NaiveDate::from_ymd_opt(2019, 7, 4));
        assert_eq!(parse_date("07/04/2019"), NaiveDate::from_ymd_opt(2019, 7, 4));
    }

    #[test]
    fn test_parse_garbage_is_none() {
        assert_eq!(parse_date("soon"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("   "), None);
    }

    // ==========================================================================
    // LOAD TESTS
    // ==========================================================================

    fn write_fixture(rows: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("create temp csv");
        writeln!(file, "type,date_added,country,listed_in,rating,description,cast")
            .expect("write header");
        for row in rows {
            writeln!(file, "{}", row).expect("write row");
        }
        file
    }

    #[test]
    fn test_load_drops_unparseable_dates() {
        let file = write_fixture(&[
            r#"Movie,"September 25, 2021",US,Dramas,PG-13,A quiet film.,Ann Lee"#,
            r#"Movie,not a date,US,Dramas,PG-13,Another film.,Bob Ray"#,
            r#"TV Show,,US,Comedies,TV-MA,A show.,Cay Dee"#,
        ]);

        let catalog = Catalog::load(file.path()).expect("load");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.dropped_rows, 2);
        assert_eq!(catalog.records[0].year_added(), 2021);
        assert_eq!(catalog.records[0].month_name_added(), "September");
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let err = Catalog::load("/no/such/file.csv").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_load_missing_column_is_error() {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("create temp csv");
        writeln!(file, "type,country,listed_in,rating,description").expect("write header");
        writeln!(file, "Movie,US,Dramas,PG,x").expect("write row");

        let err = Catalog::load(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::MissingColumn("date_added")));
    }

    #[test]
    fn test_load_blank_optionals_become_none() {
        let file = write_fixture(&[r#"Movie,"May 2, 2020",,Dramas,,  ,"#]);

        let catalog = Catalog::load(file.path()).expect("load");
        let r = &catalog.records[0];
        assert!(r.country.is_none());
        assert!(r.rating.is_none());
        assert!(r.description.is_none());
        assert!(r.cast.is_none());
    }

    // ==========================================================================
    // FILTER TESTS
    // ==========================================================================
    //
    // The filtered catalog is the sole input to every chart. Selecting every
    // type must reproduce the full table; selecting nothing must yield an
    // empty table, not an error.
    // ==========================================================================

    fn sample_catalog() -> Catalog {
        let file = write_fixture(&[
            r#"Movie,"January 1, 2020",US,Dramas,PG,One.,A"#,
            r#"TV Show,"February 2, 2020",UK,Comedies,TV-MA,Two.,B"#,
            r#"Movie,"March 3, 2021",IN,"Dramas, International",R,Three.,C"#,
        ]);
        Catalog::load(file.path()).expect("load")
    }

    #[test]
    fn test_filter_full_selection_is_identity() {
        let catalog = sample_catalog();
        let all = catalog.distinct_types();
        assert_eq!(all, vec!["Movie".to_string(), "TV Show".to_string()]);

        let filtered = catalog.filter_types(&all);
        assert_eq!(filtered.len(), catalog.len());
    }

    #[test]
    fn test_filter_empty_selection_is_empty() {
        let catalog = sample_catalog();
        let filtered = catalog.filter_types(&[]);
        assert!(filtered.is_empty());
        assert_eq!(filtered.dropped_rows, catalog.dropped_rows);
    }

    #[test]
    fn test_filter_single_type() {
        let catalog = sample_catalog();
        let filtered = catalog.filter_types(&["TV Show".to_string()]);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.records[0].show_type, "TV Show");
    }

    // ==========================================================================
    // MULTI-VALUE SPLIT TESTS
    // ==========================================================================

    #[test]
    fn test_split_multi_basic() {
        let parts: Vec<&str> = split_multi("Dramas, International Movies, Thrillers").collect();
        assert_eq!(parts, vec!["Dramas", "International Movies", "Thrillers"]);
    }

    #[test]
    fn test_split_multi_single_value() {
        let parts: Vec<&str> = split_multi("Comedies").collect();
        assert_eq!(parts, vec!["Comedies"]);
    }

    #[test]
    fn test_split_multi_skips_empty_fragments() {
        let parts: Vec<&str> = split_multi("Dramas, , Comedies,").collect();
        assert_eq!(parts, vec!["Dramas", "Comedies"]);
    }
}
