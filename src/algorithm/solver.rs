use crate::algorithm::bmssp::Bmssp;
use crate::graph::{ForwardStarGraph, Graph};
use crate::{Error, Result};

/// Distance type used by the solver facade
pub type Distance = u64;

/// Sentinel distance reported for unreachable vertices
pub const INF: Distance = Distance::MAX;

/// Facade tying graph construction to the BMSSP recursion
///
/// Lifecycle: create with the vertex count, append edges, `run` from a
/// source, then query distances and next hops. `run` may be called again
/// for a different source; queries between a failed run and the next
/// successful one report [`Error::NotRun`].
#[derive(Debug)]
pub struct BmsspSolver {
    graph: ForwardStarGraph<Distance>,
    distances: Vec<Distance>,
    parents: Vec<Option<usize>>,
    source: Option<usize>,
}

impl BmsspSolver {
    /// Creates a solver for a graph with `vertex_count` vertices
    pub fn new(vertex_count: usize) -> Result<Self> {
        if vertex_count == 0 {
            return Err(Error::InvalidVertexCount(0));
        }
        Ok(BmsspSolver {
            graph: ForwardStarGraph::new(vertex_count),
            distances: vec![INF; vertex_count],
            parents: vec![None; vertex_count],
            source: None,
        })
    }

    /// Number of vertices in the underlying graph
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Number of edges added so far
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Appends a directed edge; both endpoints must be in range
    pub fn add_edge(&mut self, from: usize, to: usize, weight: Distance) -> Result<()> {
        self.graph.add_edge(from, to, weight)
    }

    /// Computes shortest paths from `source` over the current graph
    pub fn run(&mut self, source: usize) -> Result<()> {
        self.source = None;
        if !self.graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        self.distances.fill(INF);
        self.parents.fill(None);
        self.distances[source] = 0;
        self.parents[source] = Some(source);

        let recursion: Bmssp<Distance, ForwardStarGraph<Distance>> =
            Bmssp::new(self.graph.vertex_count());
        recursion.execute(
            &self.graph,
            recursion.levels(),
            INF,
            &[source],
            &mut self.distances,
            &mut self.parents,
        )?;

        self.source = Some(source);
        Ok(())
    }

    /// Distance from the source to `vertex`, [`INF`] when unreachable
    pub fn distance(&self, vertex: usize) -> Result<Distance> {
        self.require_run()?;
        if !self.graph.has_vertex(vertex) {
            return Err(Error::InvalidVertex(vertex));
        }
        Ok(self.distances[vertex])
    }

    /// The source's direct out-neighbor on a shortest path to `target`
    ///
    /// Walks the predecessor chain back from `target`. Returns `None` when
    /// the target is unreachable, is the source itself, or the walk fails
    /// to make it back to the source (defensive; a correct run never
    /// produces such a chain).
    pub fn next_hop(&self, target: usize) -> Result<Option<usize>> {
        let source = self.require_run()?;
        if !self.graph.has_vertex(target) {
            return Err(Error::InvalidVertex(target));
        }
        if target == source || self.parents[target].is_none() {
            return Ok(None);
        }

        let mut current = target;
        for _ in 0..self.graph.vertex_count() {
            match self.parents[current] {
                Some(parent) if parent == source => return Ok(Some(current)),
                Some(parent) if parent != current => current = parent,
                _ => return Ok(None),
            }
        }
        // Walked more steps than there are vertices: a cycle.
        Ok(None)
    }

    fn require_run(&self) -> Result<usize> {
        self.source.ok_or(Error::NotRun)
    }
}
