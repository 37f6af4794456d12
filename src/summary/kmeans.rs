//! K-means: Lloyd iterations with k-means++ seeding and seeded restarts.
//!
//! # The Algorithm
//!
//! K-means partitions n points into k clusters by alternating two steps:
//!
//! 1. **Assign**: each point joins the cluster of its nearest center.
//! 2. **Update**: each center moves to the mean of its assigned points.
//!
//! Iteration stops when assignments are stable or `max_iter` is reached.
//!
//! **Objective**: minimize the within-cluster sum of squares:
//!
//! ```text
//! WCSS = Σ_k Σ_{x ∈ C_k} ||x - μ_k||²
//! ```
//!
//! ## Seeding (Arthur & Vassilvitskii, 2007)
//!
//! Lloyd iterations only find a local optimum, so initialization matters.
//! k-means++ picks the first center uniformly at random, then picks each
//! subsequent center with probability proportional to its squared distance
//! from the nearest center chosen so far. Initial centers end up spread
//! apart rather than clumped, which improves both convergence speed and
//! final WCSS.
//!
//! ## Restarts
//!
//! Each fit runs `n_restarts` independent seeded initializations and keeps
//! the run with the strictly lowest WCSS (the lowest restart index wins a
//! tie, so the selection does not depend on execution order). With a fixed
//! seed the whole fit is deterministic: identical inputs produce identical
//! labels and centers.
//!
//! ## References
//!
//! Arthur & Vassilvitskii (2007). "k-means++: The Advantages of Careful
//! Seeding." SODA '07.

use super::squared_euclidean;
use super::traits::Clustering;
use crate::error::{Error, Result};
use log::debug;
use rand::prelude::*;

/// K-means clustering engine.
#[derive(Debug, Clone)]
pub struct Kmeans {
    /// Number of clusters to fit.
    n_clusters: usize,
    /// Maximum Lloyd iterations per restart.
    max_iter: usize,
    /// Number of independent seeded restarts.
    n_restarts: usize,
    /// Base RNG seed; restart `r` uses `seed + r`.
    seed: u64,
}

/// The result of fitting [`Kmeans`] to a dataset.
#[derive(Debug, Clone)]
pub struct KmeansFit {
    /// One cluster label per sample, each in `[0, n_clusters)`.
    pub labels: Vec<usize>,
    /// Fitted centers, indexed by cluster id. Always exactly `n_clusters`.
    pub centers: Vec<Vec<f32>>,
    /// Within-cluster sum of squares of the winning restart.
    pub wcss: f32,
}

impl Kmeans {
    /// Create a new k-means engine with `n_clusters` clusters.
    ///
    /// Defaults: 300 iterations, 10 restarts, seed 0.
    pub fn new(n_clusters: usize) -> Self {
        Self {
            n_clusters,
            max_iter: 300,
            n_restarts: 10,
            seed: 0,
        }
    }

    /// Set the maximum number of Lloyd iterations per restart.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set the number of independent seeded restarts.
    pub fn with_restarts(mut self, n_restarts: usize) -> Self {
        self.n_restarts = n_restarts;
        self
    }

    /// Set the base RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Fit the engine to `data`, returning labels, centers, and WCSS.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyDataset`] if `data` has no samples.
    /// - [`Error::InvalidClusterCount`] if `n_clusters` is 0 or exceeds the
    ///   sample count.
    /// - [`Error::DimensionMismatch`] if samples differ in length.
    pub fn fit(&self, data: &[Vec<f32>]) -> Result<KmeansFit> {
        let n = data.len();
        if n == 0 {
            return Err(Error::EmptyDataset);
        }
        if self.n_clusters == 0 || self.n_clusters > n {
            return Err(Error::InvalidClusterCount {
                requested: self.n_clusters,
                n_samples: n,
            });
        }
        let dim = data[0].len();
        for row in data {
            if row.len() != dim {
                return Err(Error::DimensionMismatch {
                    expected: dim,
                    found: row.len(),
                });
            }
        }

        let restarts = self.n_restarts.max(1);
        let mut best = self.fit_once(data, self.seed);
        debug!("kmeans restart 0: wcss = {}", best.wcss);
        for run in 1..restarts {
            let fit = self.fit_once(data, self.seed.wrapping_add(run as u64));
            debug!("kmeans restart {run}: wcss = {}", fit.wcss);
            // Strict comparison keeps the earliest restart on exact ties.
            if fit.wcss < best.wcss {
                best = fit;
            }
        }

        debug!("kmeans selected fit with wcss = {}", best.wcss);
        Ok(best)
    }

    /// One seeded restart: k-means++ seeding followed by Lloyd iterations.
    fn fit_once(&self, data: &[Vec<f32>], seed: u64) -> KmeansFit {
        let n = data.len();
        let k = self.n_clusters;
        let mut rng = StdRng::seed_from_u64(seed);

        let mut centers = self.seed_centers(data, &mut rng);
        let mut labels = vec![0usize; n];

        for _ in 0..self.max_iter {
            let mut changed = false;
            for (i, point) in data.iter().enumerate() {
                let nearest = nearest_center(point, &centers);
                if labels[i] != nearest {
                    labels[i] = nearest;
                    changed = true;
                }
            }

            // Update step: each center becomes the mean of its members.
            // A cluster that lost all members keeps its previous center.
            let mut sums = vec![vec![0.0f32; data[0].len()]; k];
            let mut counts = vec![0usize; k];
            for (point, &label) in data.iter().zip(labels.iter()) {
                counts[label] += 1;
                for (s, x) in sums[label].iter_mut().zip(point.iter()) {
                    *s += x;
                }
            }
            for (c, (sum, &count)) in centers.iter_mut().zip(sums.iter().zip(counts.iter())) {
                if count > 0 {
                    for (ci, si) in c.iter_mut().zip(sum.iter()) {
                        *ci = si / count as f32;
                    }
                }
            }

            if !changed {
                break;
            }
        }

        // Re-assign once against the final centers so labels and WCSS match them.
        let mut wcss = 0.0f32;
        for (i, point) in data.iter().enumerate() {
            let nearest = nearest_center(point, &centers);
            labels[i] = nearest;
            wcss += squared_euclidean(point, &centers[nearest]);
        }

        KmeansFit {
            labels,
            centers,
            wcss,
        }
    }

    /// k-means++ seeding: spread the initial centers apart.
    fn seed_centers(&self, data: &[Vec<f32>], rng: &mut StdRng) -> Vec<Vec<f32>> {
        let n = data.len();
        let mut centers: Vec<Vec<f32>> = Vec::with_capacity(self.n_clusters);
        centers.push(data[rng.random_range(0..n)].clone());

        // Squared distance from each point to its nearest chosen center.
        let mut weights: Vec<f32> = data
            .iter()
            .map(|p| squared_euclidean(p, &centers[0]))
            .collect();

        while centers.len() < self.n_clusters {
            let total: f32 = weights.iter().sum();
            let next = if total > 0.0 {
                // Sample proportionally to the weights via a cumulative walk.
                let mut target = rng.random::<f32>() * total;
                let mut chosen = n - 1;
                for (i, &w) in weights.iter().enumerate() {
                    target -= w;
                    if target <= 0.0 {
                        chosen = i;
                        break;
                    }
                }
                chosen
            } else {
                // Every point coincides with a chosen center (duplicate-heavy
                // data); fall back to a uniform draw.
                rng.random_range(0..n)
            };

            centers.push(data[next].clone());
            let latest = centers.len() - 1;
            for (w, p) in weights.iter_mut().zip(data.iter()) {
                let d = squared_euclidean(p, &centers[latest]);
                if d < *w {
                    *w = d;
                }
            }
        }

        centers
    }
}

impl Clustering for Kmeans {
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
        Ok(self.fit(data)?.labels)
    }

    fn n_clusters(&self) -> usize {
        self.n_clusters
    }
}

/// Index of the center nearest to `point`; exact ties go to the lowest index.
fn nearest_center(point: &[f32], centers: &[Vec<f32>]) -> usize {
    let mut nearest = 0;
    let mut best = f32::INFINITY;
    for (idx, center) in centers.iter().enumerate() {
        let d = squared_euclidean(point, center);
        if d < best {
            best = d;
            nearest = idx;
        }
    }
    nearest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_blobs() -> Vec<Vec<f32>> {
        vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![10.0, 0.0],
            vec![10.0, 1.0],
        ]
    }

    #[test]
    fn test_kmeans_two_clusters() {
        let data = two_blobs();
        let fit = Kmeans::new(2).with_seed(42).fit(&data).unwrap();

        assert_eq!(fit.labels.len(), 4);
        assert_eq!(fit.centers.len(), 2);
        assert_eq!(fit.labels[0], fit.labels[1]);
        assert_eq!(fit.labels[2], fit.labels[3]);
        assert_ne!(fit.labels[0], fit.labels[2]);

        // Each blob's center is its midpoint.
        let left = &fit.centers[fit.labels[0]];
        let right = &fit.centers[fit.labels[2]];
        assert!((left[0] - 0.0).abs() < 1e-5 && (left[1] - 0.5).abs() < 1e-5);
        assert!((right[0] - 10.0).abs() < 1e-5 && (right[1] - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_kmeans_deterministic() {
        let data = two_blobs();
        let model = Kmeans::new(2).with_seed(7).with_restarts(5);
        let a = model.fit(&data).unwrap();
        let b = model.fit(&data).unwrap();
        assert_eq!(a.labels, b.labels);
        assert_eq!(a.centers, b.centers);
        assert_eq!(a.wcss, b.wcss);
    }

    #[test]
    fn test_kmeans_empty() {
        let data: Vec<Vec<f32>> = vec![];
        assert!(matches!(
            Kmeans::new(2).fit(&data),
            Err(Error::EmptyDataset)
        ));
    }

    #[test]
    fn test_kmeans_invalid_cluster_count() {
        let data = vec![vec![0.0], vec![1.0], vec![2.0]];
        assert!(matches!(
            Kmeans::new(0).fit(&data),
            Err(Error::InvalidClusterCount {
                requested: 0,
                n_samples: 3
            })
        ));
        assert!(matches!(
            Kmeans::new(4).fit(&data),
            Err(Error::InvalidClusterCount {
                requested: 4,
                n_samples: 3
            })
        ));
    }

    #[test]
    fn test_kmeans_dimension_mismatch() {
        let data = vec![vec![0.0, 1.0], vec![2.0]];
        assert!(matches!(
            Kmeans::new(1).fit(&data),
            Err(Error::DimensionMismatch {
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_kmeans_k_equals_n() {
        // One point per cluster: every center is a data point, WCSS is 0.
        let data = vec![vec![0.0], vec![5.0], vec![9.0]];
        let fit = Kmeans::new(3).with_seed(1).fit(&data).unwrap();

        let mut labels = fit.labels.clone();
        labels.sort_unstable();
        assert_eq!(labels, vec![0, 1, 2]);
        assert!(fit.wcss.abs() < 1e-6);
    }

    #[test]
    fn test_kmeans_duplicate_points() {
        // More clusters than distinct points still terminates and labels all.
        let data = vec![vec![1.0, 1.0]; 4];
        let fit = Kmeans::new(3).with_seed(3).fit(&data).unwrap();
        assert_eq!(fit.labels.len(), 4);
        for &l in &fit.labels {
            assert!(l < 3);
        }
    }

    #[test]
    fn test_fit_predict_matches_fit() {
        let data = two_blobs();
        let model = Kmeans::new(2).with_seed(42);
        assert_eq!(model.fit_predict(&data).unwrap(), model.fit(&data).unwrap().labels);
        assert_eq!(model.n_clusters(), 2);
    }
}
