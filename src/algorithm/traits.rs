use crate::graph::Graph;
use crate::Result;
use num_traits::{PrimInt, Unsigned};
use std::collections::HashSet;
use std::fmt::Debug;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// Distance from the source per vertex, `None` when unreachable
    pub distances: Vec<Option<W>>,

    /// Predecessor per vertex on some shortest path; the source points at
    /// itself
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: PrimInt + Unsigned + Debug,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    ///
    /// Walks the predecessor array backwards. Returns `None` for an
    /// unreachable target or when the walk does not make it back to the
    /// source (a broken or cyclic predecessor chain, which a correct run
    /// never produces).
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        if target >= result.predecessors.len() || result.distances[target].is_none() {
            return None;
        }

        let mut path = vec![target];
        let mut visited = HashSet::from([target]);
        let mut current = target;
        while current != result.source {
            let predecessor = result.predecessors[current]?;
            if predecessor == current || !visited.insert(predecessor) {
                return None;
            }
            path.push(predecessor);
            current = predecessor;
        }
        path.reverse();
        Some(path)
    }
}
