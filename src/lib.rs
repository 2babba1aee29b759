//! bmssp-core - Single-source shortest paths below the Dijkstra sorting bound
//!
//! This library implements the Bounded Multi-Source Shortest Path (BMSSP)
//! recursive decomposition from "Breaking the Sorting Barrier for Directed
//! Single-Source Shortest Paths" by Duan et al. (2025).
//!
//! The solver computes exact distances on directed graphs with non-negative
//! integer edge weights. Instead of maintaining one globally sorted priority
//! queue over all vertices, it partitions the work by distance ranges and
//! recurses over bounded sub-frontiers kept in a block heap, completing a
//! bounded number of vertices per recursive call.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    bmssp::Bmssp,
    dijkstra::Dijkstra,
    solver::{BmsspSolver, Distance, INF},
    ShortestPathAlgorithm, ShortestPathResult,
};
pub use data_structures::BlockHeap;
/// Re-export main types for convenient use
pub use graph::forward_star::ForwardStarGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Graph needs at least one vertex, got {0}")]
    InvalidVertexCount(usize),

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("No completed shortest-path run to query")]
    NotRun,

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
