//! Genre clustering
//!
//! Vectorizes each record's genre tags with TF-IDF and groups the rows into
//! a fixed five clusters with seeded k-means. Nothing is persisted: the
//! vectorizer and centroids live for one run only.

pub mod kmeans;
pub mod tfidf;

use crate::catalog::Record;
use kmeans::KMeans;
use serde::Serialize;
use tfidf::TfidfVectorizer;

/// Number of genre clusters. Hard-coded by design - there is no elbow or
/// silhouette selection.
pub const GENRE_CLUSTERS: usize = 5;

/// Output of the genre-clustering block.
#[derive(Debug, Clone, Serialize)]
pub struct GenreClusters {
    /// Per-record cluster id, aligned with the input slice.
    pub labels: Vec<usize>,
    /// Membership count per cluster id 0..GENRE_CLUSTERS.
    pub counts: Vec<usize>,
    /// Highest-weight vocabulary terms per cluster, for labelling the chart.
    pub top_terms: Vec<Vec<String>>,
}

/// Cluster records by their genre tags. Missing `listed_in` is treated as an
/// empty string (an all-zero vector). An empty input yields empty labels and
/// all-zero counts rather than an error.
pub fn cluster_genres(records: &[Record]) -> GenreClusters {
    let docs: Vec<&str> = records
        .iter()
        .map(|r| r.listed_in.as_deref().unwrap_or(""))
        .collect();

    let (vectorizer, matrix) = TfidfVectorizer::fit_transform(&docs);
    let labels = KMeans::new(GENRE_CLUSTERS).fit_predict(&matrix);

    let mut counts = vec![0usize; GENRE_CLUSTERS];
    for &label in &labels {
        counts[label] += 1;
    }

    let top_terms = cluster_top_terms(&vectorizer, &matrix, &labels, 3);

    GenreClusters {
        labels,
        counts,
        top_terms,
    }
}

/// For each cluster, the `n` terms with the highest mean TF-IDF weight over
/// its members. Empty clusters get an empty term list.
fn cluster_top_terms(
    vectorizer: &TfidfVectorizer,
    matrix: &[Vec<f64>],
    labels: &[usize],
    n: usize,
) -> Vec<Vec<String>> {
    let vocab = vectorizer.vocabulary();
    let mut terms = Vec::with_capacity(GENRE_CLUSTERS);

    for cluster in 0..GENRE_CLUSTERS {
        let mut sums = vec![0.0; vocab.len()];
        let mut size = 0usize;
        for (row, &label) in matrix.iter().zip(labels) {
            if label == cluster {
                size += 1;
                for (s, v) in sums.iter_mut().zip(row) {
                    *s += v;
                }
            }
        }
        if size == 0 {
            terms.push(Vec::new());
            continue;
        }

        let mut ranked: Vec<(usize, f64)> = sums
            .iter()
            .enumerate()
            .map(|(i, &s)| (i, s / size as f64))
            .collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        terms.push(
            ranked
                .into_iter()
                .take(n)
                .filter(|&(_, weight)| weight > 0.0)
                .map(|(i, _)| vocab[i].clone())
                .collect(),
        );
    }

    terms
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    // ==========================================================================
    // GENRE CLUSTERING TESTS
    // ==========================================================================

    fn record(listed_in: Option<&str>) -> Record {
        Record {
            show_type: "Movie".to_string(),
            date_added: NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date"),
            country: None,
            listed_in: listed_in.map(String::from),
            rating: None,
            description: None,
            cast: None,
        }
    }

    #[test]
    fn test_empty_catalog_yields_zero_counts() {
        let clusters = cluster_genres(&[]);
        assert!(clusters.labels.is_empty());
        assert_eq!(clusters.counts, vec![0; GENRE_CLUSTERS]);
    }

    #[test]
    fn test_labels_align_with_records() {
        let records: Vec<Record> = vec![
            record(Some("Dramas")),
            record(Some("Comedies")),
            record(None),
            record(Some("Dramas, International Movies")),
        ];
        let clusters = cluster_genres(&records);
        assert_eq!(clusters.labels.len(), records.len());
        assert!(clusters.labels.iter().all(|&l| l < GENRE_CLUSTERS));
        assert_eq!(clusters.counts.iter().sum::<usize>(), records.len());
    }

    #[test]
    fn test_clustering_is_reproducible() {
        let records: Vec<Record> = (0..20)
            .map(|i| {
                record(Some(if i % 3 == 0 {
                    "Dramas, International Movies"
                } else if i % 3 == 1 {
                    "Comedies, Romantic Movies"
                } else {
                    "Documentaries"
                }))
            })
            .collect();

        let a = cluster_genres(&records);
        let b = cluster_genres(&records);
        assert_eq!(a.labels, b.labels);
        assert_eq!(a.counts, b.counts);
    }

    #[test]
    fn test_identical_tags_share_a_cluster() {
        let records: Vec<Record> = vec![
            record(Some("Dramas")),
            record(Some("Dramas")),
            record(Some("Stand-Up Comedy")),
            record(Some("Stand-Up Comedy")),
        ];
        let clusters = cluster_genres(&records);
        assert_eq!(clusters.labels[0], clusters.labels[1]);
        assert_eq!(clusters.labels[2], clusters.labels[3]);
    }
}
