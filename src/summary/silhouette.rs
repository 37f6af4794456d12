//! Silhouette scoring (Rousseeuw, 1987).
//!
//! For each sample, let `a` be the mean distance to the other members of its
//! own cluster and `b` the smallest mean distance to the members of any
//! other cluster. The sample's silhouette is `(b - a) / max(a, b)`, in
//! \[-1, 1\]: near 1 means tight and well separated, near 0 means on a
//! boundary, negative means probably mis-assigned. The overall score is the
//! mean over all samples.
//!
//! The score needs another cluster to compare against, so it is undefined
//! when `k <= 1`, and degenerate when `k >= n` (every cluster a singleton).
//! Samples that sit alone in their cluster score 0 by convention.

use super::euclidean;
use crate::error::{Error, Result};

/// Mean silhouette score of a labeled dataset.
///
/// `n_clusters` is the number of cluster ids the labels were drawn from
/// (labels must be `< n_clusters`).
///
/// # Errors
///
/// [`Error::SilhouetteUndefined`] when `n_clusters <= 1` or
/// `n_clusters >= data.len()`.
pub fn silhouette_score(data: &[Vec<f32>], labels: &[usize], n_clusters: usize) -> Result<f32> {
    let n = data.len();
    if n_clusters <= 1 || n_clusters >= n {
        return Err(Error::SilhouetteUndefined {
            n_clusters,
            n_samples: n,
        });
    }

    let mut total = 0.0f32;
    for i in 0..n {
        let own = labels[i];

        // Sum of distances to every cluster, split by membership.
        let mut sums = vec![0.0f32; n_clusters];
        let mut counts = vec![0usize; n_clusters];
        for j in 0..n {
            if i == j {
                continue;
            }
            let d = euclidean(&data[i], &data[j]);
            sums[labels[j]] += d;
            counts[labels[j]] += 1;
        }

        if counts[own] == 0 {
            // Singleton cluster: silhouette is 0 by convention.
            continue;
        }
        let a = sums[own] / counts[own] as f32;

        let b = (0..n_clusters)
            .filter(|&c| c != own && counts[c] > 0)
            .map(|c| sums[c] / counts[c] as f32)
            .fold(f32::INFINITY, f32::min);

        // `b` stays infinite when no other cluster has members; the sample
        // has nothing to compare against and scores 0, like a singleton.
        if b.is_finite() && a.max(b) > 0.0 {
            total += (b - a) / a.max(b);
        }
    }

    Ok(total / n as f32)
}
