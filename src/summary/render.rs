//! Plain-text rendering of a [`Report`].
//!
//! Rendering is pure formatting over already-computed values; it never fails
//! on a well-formed report. Cluster numbers are 1-based in the text, because
//! the report reads as prose.

use super::pipeline::Report;
use std::fmt;

/// Format a report as human-readable text.
pub fn render(report: &Report) -> String {
    report.to_string()
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "There are {} clusters", self.n_clusters)?;
        for (i, center) in self.centers.iter().enumerate() {
            writeln!(
                f,
                "The cluster {} centre is found to be {:?}",
                i + 1,
                center
            )?;
        }

        for cluster in &self.clusters {
            let id = cluster.id + 1;
            writeln!(
                f,
                "For cluster {id}, maximum data point distance is {}",
                cluster.max_distance
            )?;
            writeln!(
                f,
                "For cluster {id}, minimum data point distance is {}",
                cluster.min_distance
            )?;
            writeln!(f, "For cluster {id}, variance is {}", cluster.variance)?;
        }

        writeln!(f, "The labels for each of them are {:?}", self.labels)?;
        writeln!(f, "The Silhouette score is {}", self.silhouette)?;
        writeln!(
            f,
            "Considering points outside 90% radius of cluster as outliers:"
        )?;
        for cluster in &self.clusters {
            writeln!(
                f,
                "For cluster {}, outliers are {} out of {}",
                cluster.id + 1,
                cluster.outliers,
                cluster.size
            )?;
        }

        Ok(())
    }
}
