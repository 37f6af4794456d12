use thiserror::Error;

/// Errors returned by the summary pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// The dataset has no samples.
    #[error("empty dataset")]
    EmptyDataset,

    /// Requested cluster count is incompatible with the dataset.
    #[error("invalid cluster count: requested {requested}, but dataset has {n_samples} samples")]
    InvalidClusterCount {
        /// Requested number of clusters.
        requested: usize,
        /// Number of samples in the dataset.
        n_samples: usize,
    },

    /// Samples in a dataset have inconsistent dimensionality.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// A cluster ended up with zero members, so its mean point is undefined.
    #[error("degenerate cluster {cluster}: no members to reconcile")]
    DegenerateCluster {
        /// Id of the empty cluster.
        cluster: usize,
    },

    /// Silhouette scoring needs another cluster to compare against, so it is
    /// undefined when every sample shares one cluster or every cluster is a
    /// singleton.
    #[error("silhouette undefined for {n_clusters} clusters over {n_samples} samples")]
    SilhouetteUndefined {
        /// Number of clusters.
        n_clusters: usize,
        /// Number of samples in the dataset.
        n_samples: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
