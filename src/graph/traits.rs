use num_traits::{PrimInt, Unsigned};
use std::fmt::Debug;

/// Trait representing a directed graph with non-negative integer edge weights
///
/// The graph is read-only from the algorithms' point of view; construction
/// happens on the concrete type before a solver run.
pub trait Graph<W>: Debug
where
    W: PrimInt + Unsigned + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Gets the weight of an edge if it exists
    ///
    /// With parallel edges the smallest weight is reported.
    fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        if !self.has_vertex(from) {
            return None;
        }
        self.outgoing_edges(from)
            .filter(|&(target, _)| target == to)
            .map(|(_, weight)| weight)
            .min()
    }
}
