//! The cluster summary pipeline.
//!
//! Turning a dataset into a readable summary happens in five stages, each a
//! pure function over the previous stage's output:
//!
//! 1. **Partition** ([`Kmeans::fit`]): k-means with k-means++ seeding and
//!    seeded restarts, keeping the run with the lowest within-cluster sum of
//!    squares (WCSS).
//! 2. **Assemble** ([`group_by_label`]): collect each cluster's members in
//!    original sample order.
//! 3. **Reconcile** ([`reconcile_center`]): compute each group's average
//!    point and match it to the nearest fitted center.
//! 4. **Analyze** ([`center_distances`], [`spread_stats`], [`outlier_count`]):
//!    per-member distances to the matched center, max/min/variance, and a
//!    count of points at or beyond 90% of the group's own maximum distance.
//! 5. **Score** ([`silhouette_score`]): overall partition quality in
//!    \[-1, 1\].
//!
//! [`summarize`] runs all five and collects the results into a [`Report`];
//! [`render`] (or the report's `Display` impl) formats it.
//!
//! ## Usage
//!
//! ```rust
//! use gist::summary::summarize;
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.0, 1.0],
//!     vec![10.0, 0.0],
//!     vec![10.0, 1.0],
//! ];
//!
//! let report = summarize(&data, 2, 2).unwrap();
//! assert_eq!(report.n_clusters, 2);
//! assert_eq!(report.labels.len(), 4);
//! println!("{report}");
//! ```

mod groups;
mod kmeans;
mod pipeline;
mod render;
mod silhouette;
mod stats;
mod traits;

pub use groups::{group_by_label, reconcile_center};
pub use kmeans::{Kmeans, KmeansFit};
pub use pipeline::{summarize, ClusterSummary, Report};
pub use render::render;
pub use silhouette::silhouette_score;
pub use stats::{center_distances, outlier_count, spread_stats, SpreadStats, OUTLIER_RADIUS_FRACTION};
pub use traits::Clustering;

/// Euclidean distance between two points.
///
/// Symmetric, non-negative, and zero exactly when the points are equal.
#[inline]
pub fn euclidean(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f32>()
        .sqrt()
}

#[inline]
pub(crate) fn squared_euclidean(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}
