//! The end-to-end summary pipeline.
//!
//! [`summarize`] threads a dataset through every stage and collects the
//! results into an immutable [`Report`]. Any stage failure aborts the run;
//! there is no partial report. Computation and presentation stay separate:
//! everything here is numbers, and rendering lives in [`super::render`].

use super::groups::{group_by_label, reconcile_center};
use super::kmeans::Kmeans;
use super::silhouette::silhouette_score;
use super::stats::{center_distances, outlier_count, spread_stats};
use crate::error::{Error, Result};
use log::debug;
use serde::Serialize;

/// Everything the pipeline computed for one cluster.
#[derive(Debug, Clone, Serialize)]
pub struct ClusterSummary {
    /// Cluster id in `[0, n_clusters)`.
    pub id: usize,
    /// Index of the reconciled center in the report's `centers`.
    pub center_idx: usize,
    /// Number of members.
    pub size: usize,
    /// Distance from each member to the reconciled center, in member order.
    pub distances: Vec<f32>,
    /// Largest member distance.
    pub max_distance: f32,
    /// Smallest member distance.
    pub min_distance: f32,
    /// Population variance of the member distances.
    pub variance: f32,
    /// Members at or beyond 90% of `max_distance`.
    pub outliers: usize,
}

/// The full result of one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Number of clusters requested and fitted.
    pub n_clusters: usize,
    /// One label per sample, in dataset order.
    pub labels: Vec<usize>,
    /// Fitted centers, indexed by cluster id.
    pub centers: Vec<Vec<f32>>,
    /// Per-cluster summaries, ordered by cluster id.
    pub clusters: Vec<ClusterSummary>,
    /// Mean silhouette score of the partition.
    pub silhouette: f32,
}

/// Run the full pipeline: partition, assemble, reconcile, analyze, score.
///
/// `num_features` is the expected dimensionality of every sample; a sample
/// of any other length fails the run before clustering starts.
///
/// # Errors
///
/// - [`Error::EmptyDataset`] if `data` has no samples.
/// - [`Error::InvalidClusterCount`] if `n_clusters` is 0 or exceeds the
///   sample count.
/// - [`Error::DimensionMismatch`] if a sample's length is not `num_features`.
/// - [`Error::DegenerateCluster`] if the engine left a cluster empty.
/// - [`Error::SilhouetteUndefined`] if `n_clusters` is 1 or equals the
///   sample count.
pub fn summarize(data: &[Vec<f32>], n_clusters: usize, num_features: usize) -> Result<Report> {
    let n = data.len();
    if n == 0 {
        return Err(Error::EmptyDataset);
    }
    if n_clusters == 0 || n_clusters > n {
        return Err(Error::InvalidClusterCount {
            requested: n_clusters,
            n_samples: n,
        });
    }
    for row in data {
        if row.len() != num_features {
            return Err(Error::DimensionMismatch {
                expected: num_features,
                found: row.len(),
            });
        }
    }

    let fit = Kmeans::new(n_clusters).fit(data)?;
    debug!("fitted {n_clusters} clusters over {n} samples, wcss = {}", fit.wcss);

    let groups = group_by_label(data, &fit.labels);

    let mut clusters = Vec::with_capacity(n_clusters);
    for id in 0..n_clusters {
        let group = groups
            .get(&id)
            .ok_or(Error::DegenerateCluster { cluster: id })?;

        let (center, center_idx) = reconcile_center(id, group, &fit.centers)?;
        let distances = center_distances(group, &center);
        let stats = spread_stats(&distances);
        let outliers = outlier_count(&distances, stats.max);

        clusters.push(ClusterSummary {
            id,
            center_idx,
            size: group.len(),
            distances,
            max_distance: stats.max,
            min_distance: stats.min,
            variance: stats.variance,
            outliers,
        });
    }

    let silhouette = silhouette_score(data, &fit.labels, n_clusters)?;

    Ok(Report {
        n_clusters,
        labels: fit.labels,
        centers: fit.centers,
        clusters,
        silhouette,
    })
}
