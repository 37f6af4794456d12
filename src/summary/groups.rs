//! Group assembly and center reconciliation.
//!
//! After the engine labels every sample, [`group_by_label`] collects each
//! cluster's members in original sample order. [`reconcile_center`] then
//! matches a group back to one of the fitted centers: it computes the
//! group's average point and picks the center nearest to it. For a
//! well-converged k-means fit the average point sits almost on top of the
//! fitted center, so the match is usually the obvious one, but the
//! reconciliation makes the pairing explicit rather than assumed.

use super::euclidean;
use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// Collect each cluster's feature vectors, keyed by cluster id.
///
/// Within a group, members keep their original dataset order. A cluster id
/// the engine never assigned is simply absent from the map; callers that
/// expect every id in `[0, k)` to be present should treat a missing id as a
/// degenerate cluster.
pub fn group_by_label(data: &[Vec<f32>], labels: &[usize]) -> BTreeMap<usize, Vec<Vec<f32>>> {
    let mut groups: BTreeMap<usize, Vec<Vec<f32>>> = BTreeMap::new();
    for (point, &label) in data.iter().zip(labels.iter()) {
        groups.entry(label).or_default().push(point.clone());
    }
    groups
}

/// Match a group to the nearest fitted center.
///
/// Computes the group's average point (per-feature arithmetic mean), then
/// scans `centers` left to right for the one at minimum euclidean distance.
/// An exact distance tie keeps the lowest index; this tie-break is part of
/// the contract, not an accident of scan order.
///
/// Returns the matched center vector and its index into `centers`.
///
/// # Errors
///
/// [`Error::DegenerateCluster`] if the group is empty (its mean is
/// undefined). `cluster` is reported as the id the caller passes in.
pub fn reconcile_center(
    cluster: usize,
    group: &[Vec<f32>],
    centers: &[Vec<f32>],
) -> Result<(Vec<f32>, usize)> {
    if group.is_empty() {
        return Err(Error::DegenerateCluster { cluster });
    }

    let average = average_point(group);

    let mut matched = 0;
    let mut best = f32::INFINITY;
    for (idx, center) in centers.iter().enumerate() {
        let d = euclidean(&average, center);
        if d < best {
            best = d;
            matched = idx;
        }
    }

    Ok((centers[matched].clone(), matched))
}

/// Per-feature arithmetic mean of a nonempty group.
fn average_point(group: &[Vec<f32>]) -> Vec<f32> {
    let dim = group[0].len();
    let mut mean = vec![0.0f32; dim];
    for point in group {
        for (m, x) in mean.iter_mut().zip(point.iter()) {
            *m += x;
        }
    }
    for m in &mut mean {
        *m /= group.len() as f32;
    }
    mean
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_by_label_partitions() {
        let data = vec![
            vec![0.0],
            vec![1.0],
            vec![2.0],
            vec![3.0],
            vec![4.0],
        ];
        let labels = vec![1, 0, 1, 0, 1];

        let groups = group_by_label(&data, &labels);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&0], vec![vec![1.0], vec![3.0]]);
        assert_eq!(groups[&1], vec![vec![0.0], vec![2.0], vec![4.0]]);

        let total: usize = groups.values().map(Vec::len).sum();
        assert_eq!(total, data.len());
    }

    #[test]
    fn test_group_by_label_skips_unused_ids() {
        let data = vec![vec![0.0], vec![1.0]];
        let labels = vec![0, 2];

        let groups = group_by_label(&data, &labels);
        assert!(groups.contains_key(&0));
        assert!(!groups.contains_key(&1));
        assert!(groups.contains_key(&2));
    }

    #[test]
    fn test_reconcile_picks_nearest_center() {
        let group = vec![vec![9.0, 0.0], vec![11.0, 0.0]];
        let centers = vec![vec![0.0, 0.0], vec![10.0, 0.0]];

        let (center, idx) = reconcile_center(1, &group, &centers).unwrap();
        assert_eq!(idx, 1);
        assert_eq!(center, centers[1]);
    }

    #[test]
    fn test_reconcile_tie_takes_lowest_index() {
        // The group mean (1, 0) is exactly equidistant from both centers.
        let group = vec![vec![0.0, 0.0], vec![2.0, 0.0]];
        let centers = vec![vec![0.0, 0.0], vec![2.0, 0.0]];

        let (center, idx) = reconcile_center(0, &group, &centers).unwrap();
        assert_eq!(idx, 0);
        assert_eq!(center, centers[0]);
    }

    #[test]
    fn test_reconcile_empty_group() {
        let centers = vec![vec![0.0]];
        assert!(matches!(
            reconcile_center(3, &[], &centers),
            Err(Error::DegenerateCluster { cluster: 3 })
        ));
    }

    #[test]
    fn test_reconciled_center_is_a_real_center() {
        let group = vec![vec![4.9], vec![5.1]];
        let centers = vec![vec![0.0], vec![5.0], vec![9.0]];

        let (center, idx) = reconcile_center(0, &group, &centers).unwrap();
        assert!(idx < centers.len());
        assert_eq!(center, centers[idx]);
    }
}
