//! Cluster summaries for dense numeric datasets.
//!
//! `gist` partitions a dataset with k-means, reconciles each group against
//! the fitted centers, measures every group's spread and outliers, scores
//! the partition with a silhouette score, and renders the whole thing as a
//! human-readable report.
//!
//! The primary public API is under [`summary`], which provides:
//! - [`summary::summarize`] — run the full pipeline, yielding a [`summary::Report`]
//! - [`summary::render`] — format a report as text
//! - the individual stages (k-means engine, group assembly, center
//!   reconciliation, distance statistics, silhouette scoring) for callers
//!   that only need part of the pipeline

#![forbid(unsafe_code)]

pub mod error;
pub mod summary;

pub use error::{Error, Result};
pub use summary::{
    render, summarize, ClusterSummary, Clustering, Kmeans, KmeansFit, Report, SpreadStats,
};
