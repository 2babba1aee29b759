use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinHeap;
use crate::graph::Graph;
use crate::{Error, Result};
use num_traits::{PrimInt, Unsigned};
use std::fmt::Debug;

/// Classic Dijkstra's algorithm implementation
///
/// Serves as the correctness oracle for the BMSSP solver and as the
/// baseline in the benchmark driver.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: PrimInt + Unsigned + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let n = graph.vertex_count();
        let infinity = W::max_value();
        let mut distances = vec![infinity; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        distances[source] = W::zero();
        predecessors[source] = Some(source);

        let mut queue = MinHeap::new();
        queue.push(source, W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            // Stale entry from an earlier decrease
            if dist_u > distances[u] {
                continue;
            }

            for (v, weight) in graph.outgoing_edges(u) {
                let next = dist_u.saturating_add(weight);
                if next < distances[v] {
                    distances[v] = next;
                    predecessors[v] = Some(u);
                    queue.push(v, next);
                }
            }
        }

        Ok(ShortestPathResult {
            distances: distances
                .into_iter()
                .map(|d| if d == infinity { None } else { Some(d) })
                .collect(),
            predecessors,
            source,
        })
    }
}
