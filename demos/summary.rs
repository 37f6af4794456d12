//! Summarize a small 2D dataset with three well-separated clusters.
//!
//! Run with `RUST_LOG=debug` to see the engine's restart selection.

use gist::summary::{render, summarize};

fn main() {
    env_logger::init();

    // Three well-separated clusters in 2D.
    let data: Vec<Vec<f32>> = vec![
        // Cluster A (near origin)
        vec![0.0, 0.0],
        vec![0.1, 0.2],
        vec![0.2, 0.1],
        vec![-0.1, 0.1],
        // Cluster B (near (5, 5))
        vec![5.0, 5.0],
        vec![5.1, 4.9],
        vec![4.9, 5.1],
        vec![5.2, 5.2],
        // Cluster C (near (10, 0))
        vec![10.0, 0.0],
        vec![10.1, 0.1],
        vec![9.9, -0.1],
        vec![10.2, 0.2],
    ];

    let report = summarize(&data, 3, 2).expect("summary failed");

    println!("=== Text report ===");
    println!("{}", render(&report));

    println!("=== Structured report ===");
    println!(
        "{}",
        serde_json::to_string_pretty(&report).expect("report serializes")
    );
}
