//! Plain Lloyd's k-means over dense rows
//!
//! Fixed k, a bounded iteration count, and several random restarts scored by
//! inertia. Everything is seeded, so identical input always produces
//! identical labels.

use rand::prelude::*;
use rayon::prelude::*;

/// K-means configuration. Defaults mirror the stock library settings the
/// dashboard has always used: 10 restarts, 300 iteration cap, seed 42.
#[derive(Debug, Clone)]
pub struct KMeans {
    pub k: usize,
    pub n_init: usize,
    pub max_iter: usize,
    pub seed: u64,
}

impl KMeans {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            n_init: 10,
            max_iter: 300,
            seed: 42,
        }
    }

    /// Cluster `data` and return one label (0..k) per row.
    ///
    /// Empty input yields an empty labelling. Fewer rows than clusters is
    /// fine: the effective k drops to the row count, so labels stay dense.
    pub fn fit_predict(&self, data: &[Vec<f64>]) -> Vec<usize> {
        if data.is_empty() || self.k == 0 {
            return Vec::new();
        }
        let k = self.k.min(data.len());

        // Each restart gets its own derived seed so the set of restarts is
        // deterministic regardless of scheduling.
        let best = (0..self.n_init as u64)
            .into_par_iter()
            .map(|restart| {
                let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(restart));
                let run = self.run_once(data, k, &mut rng);
                (run, restart)
            })
            .min_by(|a, b| {
                (a.0.inertia, a.1)
                    .partial_cmp(&(b.0.inertia, b.1))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

        match best {
            Some((run, _)) => run.labels,
            None => Vec::new(),
        }
    }

    fn run_once(&self, data: &[Vec<f64>], k: usize, rng: &mut StdRng) -> Run {
        let dims = data[0].len();

        // Init: k distinct rows chosen at random.
        let mut indices: Vec<usize> = (0..data.len()).collect();
        indices.shuffle(rng);
        let mut centroids: Vec<Vec<f64>> = indices[..k].iter().map(|&i| data[i].clone()).collect();

        let mut labels = vec![0usize; data.len()];
        for _ in 0..self.max_iter {
            let mut changed = false;
            for (i, row) in data.iter().enumerate() {
                let nearest = nearest_centroid(row, &centroids);
                if labels[i] != nearest {
                    labels[i] = nearest;
                    changed = true;
                }
            }
            if !changed {
                break;
            }

            let mut sums = vec![vec![0.0; dims]; k];
            let mut sizes = vec![0usize; k];
            for (row, &label) in data.iter().zip(&labels) {
                sizes[label] += 1;
                for (s, v) in sums[label].iter_mut().zip(row) {
                    *s += v;
                }
            }
            for (c, (sum, size)) in centroids.iter_mut().zip(sums.iter().zip(&sizes)) {
                // Empty clusters keep their previous centroid.
                if *size > 0 {
                    for (cv, sv) in c.iter_mut().zip(sum) {
                        *cv = *sv / *size as f64;
                    }
                }
            }
        }

        let inertia = data
            .iter()
            .zip(&labels)
            .map(|(row, &label)| squared_distance(row, &centroids[label]))
            .sum();

        Run { labels, inertia }
    }
}

struct Run {
    labels: Vec<usize>,
    inertia: f64,
}

fn nearest_centroid(row: &[f64], centroids: &[Vec<f64>]) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, centroid) in centroids.iter().enumerate() {
        let dist = squared_distance(row, centroid);
        if dist < best_dist {
            best = i;
            best_dist = dist;
        }
    }
    best
}

fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // K-MEANS TESTS
    // ==========================================================================
    //
    // The clustering contract: labels are dense in 0..k, reruns on identical
    // input are identical, and well-separated groups end up together.
    // ==========================================================================

    fn two_blobs() -> Vec<Vec<f64>> {
        vec![
            vec![0.0, 0.1],
            vec![0.1, 0.0],
            vec![0.05, 0.05],
            vec![10.0, 10.1],
            vec![10.1, 10.0],
            vec![9.95, 10.05],
        ]
    }

    #[test]
    fn test_empty_input_empty_labels() {
        let labels = KMeans::new(5).fit_predict(&[]);
        assert!(labels.is_empty());
    }

    #[test]
    fn test_labels_within_range() {
        let labels = KMeans::new(2).fit_predict(&two_blobs());
        assert_eq!(labels.len(), 6);
        assert!(labels.iter().all(|&l| l < 2));
    }

    #[test]
    fn test_separated_blobs_get_separate_clusters() {
        let labels = KMeans::new(2).fit_predict(&two_blobs());
        assert_eq!(labels[0], labels[1]);
        assert_eq!(labels[1], labels[2]);
        assert_eq!(labels[3], labels[4]);
        assert_eq!(labels[4], labels[5]);
        assert_ne!(labels[0], labels[3]);
    }

    #[test]
    fn test_deterministic_under_fixed_seed() {
        let data = two_blobs();
        let a = KMeans::new(2).fit_predict(&data);
        let b = KMeans::new(2).fit_predict(&data);
        assert_eq!(a, b);
    }

    #[test]
    fn test_fewer_rows_than_clusters() {
        let data = vec![vec![0.0], vec![1.0]];
        let labels = KMeans::new(5).fit_predict(&data);
        assert_eq!(labels.len(), 2);
        assert!(labels.iter().all(|&l| l < 2));
    }

    #[test]
    fn test_single_cluster_groups_everything() {
        let labels = KMeans::new(1).fit_predict(&two_blobs());
        assert!(labels.iter().all(|&l| l == 0));
    }
}
