//! Streamlens - interactive analytics over a streaming catalog
//!
//! Streamlens loads a pre-cleaned CSV of streaming-catalog metadata (type,
//! date added, country, genre tags, rating, description, cast) and turns it
//! into a dashboard of descriptive charts plus two derived signals: genre
//! clusters (TF-IDF + k-means) and description sentiment (lexicon polarity).
//!
//! # Overview
//!
//! Every run is a single pass with no state carried between runs: the CSV is
//! reloaded, the user's content-type selection is applied, and every block
//! recomputes against that one filtered table. Rows whose `date_added`
//! doesn't parse are dropped at load time, so every aggregation can assume a
//! valid date.
//!
//! # Quick Start
//!
//! ```no_run
//! use streamlens::{Dashboard, DashboardParams};
//!
//! let dashboard = Dashboard::build("catalog.csv", &DashboardParams::default())?;
//!
//! println!("{} titles", dashboard.total_titles);
//! for entry in &dashboard.top_genres {
//!     println!("{:>5}  {}", entry.count, entry.label);
//! }
//! # Ok::<(), streamlens::CatalogError>(())
//! ```
//!
//! # Blocks
//!
//! | Block | Output |
//! |-------|--------|
//! | Content types, ratings | frequency counts |
//! | Countries, genres, cast | exploded multi-value top-10 counts |
//! | Year, calendar month, year-month | time-bucketed counts |
//! | Genre clusters | 5 fixed, seeded k-means over TF-IDF vectors |
//! | Sentiment | per-description polarity in [-1, 1], mean per rating |
//!
//! # Modules
//!
//! - [`catalog`]: CSV loading, date parsing, the content-type filter
//! - [`stats`]: the pure aggregation blocks
//! - [`mining`]: TF-IDF vectorization and k-means clustering
//! - [`sentiment`]: lexicon polarity scoring
//! - [`dashboard`]: one-run orchestration into a chart-ready struct
//! - [`report`]: output formatters (HTML, JSON, CSV)
//! - [`serve`]: interactive web mode, recomputing on every request

pub mod catalog;
pub mod dashboard;
pub mod mining;
pub mod report;
pub mod sentiment;
pub mod serve;
pub mod stats;

pub use catalog::{Catalog, CatalogError, Record};
pub use dashboard::{Dashboard, DashboardParams};

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // PUBLIC API TESTS
    // ==========================================================================
    //
    // These tests verify the public API surface is correct and documented.
    // ==========================================================================

    #[test]
    fn test_public_exports() {
        // Core types are re-exported from the crate root
        let _params = DashboardParams::default();
        let _catalog = Catalog::default();
    }

    #[test]
    fn test_default_params_select_everything() {
        let params = DashboardParams::default();
        assert!(params.types.is_none());
    }

    #[test]
    fn test_cluster_count_is_fixed() {
        // The clustering block is hard-coded to five groups
        assert_eq!(mining::GENRE_CLUSTERS, 5);
    }
}
