//! Distance statistics for a single cluster group.
//!
//! All statistics are taken over a group's distances to its reconciled
//! center: the spread ([`spread_stats`]) and a simple outlier notion
//! ([`outlier_count`]) measured against the group's own maximum distance
//! rather than any global scale.

use super::euclidean;

/// Fraction of the group's maximum distance that bounds the "inside" of a
/// cluster; points at or beyond it count as outliers.
///
/// Fixed rather than configurable: it is a reporting heuristic, not a model
/// parameter.
pub const OUTLIER_RADIUS_FRACTION: f32 = 0.9;

/// Max, min, and population variance of a group's center distances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpreadStats {
    /// Largest distance to the center.
    pub max: f32,
    /// Smallest distance to the center.
    pub min: f32,
    /// Population variance of the distances (mean squared deviation).
    pub variance: f32,
}

/// Euclidean distance from every group member to `center`, in group order.
pub fn center_distances(group: &[Vec<f32>], center: &[f32]) -> Vec<f32> {
    group.iter().map(|point| euclidean(point, center)).collect()
}

/// Spread statistics over a nonempty distance sequence.
///
/// Variance is the population variance, not the sample variance: groups are
/// complete populations, not samples of something larger.
pub fn spread_stats(distances: &[f32]) -> SpreadStats {
    debug_assert!(!distances.is_empty());
    let mut max = f32::NEG_INFINITY;
    let mut min = f32::INFINITY;
    let mut sum = 0.0f32;
    for &d in distances {
        max = max.max(d);
        min = min.min(d);
        sum += d;
    }

    let mean = sum / distances.len() as f32;
    let variance = distances
        .iter()
        .map(|&d| (d - mean).powi(2))
        .sum::<f32>()
        / distances.len() as f32;

    SpreadStats { max, min, variance }
}

/// Count the points at or beyond 90% of the group's maximum distance.
///
/// A point strictly inside the 90%-radius is "within" the cluster;
/// everything else is an outlier, so `outlier_count + within == total`.
pub fn outlier_count(distances: &[f32], max_distance: f32) -> usize {
    let threshold = OUTLIER_RADIUS_FRACTION * max_distance;
    distances.iter().filter(|&&d| d >= threshold).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_distances_preserve_order() {
        let group = vec![vec![0.0, 0.0], vec![3.0, 4.0], vec![0.0, 2.0]];
        let distances = center_distances(&group, &[0.0, 0.0]);
        assert_eq!(distances, vec![0.0, 5.0, 2.0]);
    }

    #[test]
    fn test_spread_stats() {
        let stats = spread_stats(&[1.0, 3.0, 5.0, 7.0]);
        assert_eq!(stats.max, 7.0);
        assert_eq!(stats.min, 1.0);
        // Mean 4, deviations (-3, -1, 1, 3), population variance 5.
        assert!((stats.variance - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_spread_stats_single_point() {
        let stats = spread_stats(&[2.5]);
        assert_eq!(stats.max, 2.5);
        assert_eq!(stats.min, 2.5);
        assert_eq!(stats.variance, 0.0);
    }

    #[test]
    fn test_outlier_count_threshold_is_inclusive() {
        let distances = vec![0.0, 0.5, 0.89, 0.9, 1.0];
        // Threshold is 0.9; 0.9 and 1.0 are outliers.
        assert_eq!(outlier_count(&distances, 1.0), 2);
    }

    #[test]
    fn test_outlier_plus_within_is_total() {
        let distances = vec![0.1, 0.2, 0.3, 2.0, 2.0];
        let max = 2.0;
        let outliers = outlier_count(&distances, max);
        let within = distances.len() - outliers;
        assert_eq!(outliers + within, distances.len());
        assert_eq!(outliers, 2);
    }

    #[test]
    fn test_outlier_count_zero_spread() {
        // All distances zero: the threshold is zero and every point is >= it.
        let distances = vec![0.0, 0.0, 0.0];
        assert_eq!(outlier_count(&distances, 0.0), 3);
    }
}
