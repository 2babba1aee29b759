use crate::graph::traits::Graph;
use crate::{Error, Result};
use num_traits::{PrimInt, Unsigned};
use std::fmt::Debug;

/// Sentinel terminating a vertex's edge chain.
const NIL: usize = usize::MAX;

/// One entry of the append-only edge array.
#[derive(Debug, Clone, Copy)]
struct EdgeSlot<W> {
    to: usize,
    weight: W,
    next: usize,
}

/// A directed graph in forward-star representation
///
/// Each vertex stores the index of the head of its edge chain; edges live in
/// one append-only array and link to the previous head. The adjacency is
/// fixed once built: edges can be appended but never removed, and the vertex
/// count is set at construction. Iteration over a vertex's edges yields them
/// in reverse insertion order, which no consumer in this crate depends on.
#[derive(Debug, Clone)]
pub struct ForwardStarGraph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    heads: Vec<usize>,
    edges: Vec<EdgeSlot<W>>,
}

impl<W> ForwardStarGraph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// Creates a graph with `vertex_count` vertices and no edges
    pub fn new(vertex_count: usize) -> Self {
        ForwardStarGraph {
            heads: vec![NIL; vertex_count],
            edges: Vec::new(),
        }
    }

    /// Creates a graph pre-allocating room for `edge_count` edges
    pub fn with_edge_capacity(vertex_count: usize, edge_count: usize) -> Self {
        ForwardStarGraph {
            heads: vec![NIL; vertex_count],
            edges: Vec::with_capacity(edge_count),
        }
    }

    /// Appends a directed edge from `from` to `to`
    ///
    /// Parallel edges and self-loops are allowed. Out-of-range endpoints are
    /// rejected; weights are non-negative by type.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        if from >= self.heads.len() {
            return Err(Error::InvalidVertex(from));
        }
        if to >= self.heads.len() {
            return Err(Error::InvalidVertex(to));
        }
        self.edges.push(EdgeSlot {
            to,
            weight,
            next: self.heads[from],
        });
        self.heads[from] = self.edges.len() - 1;
        Ok(())
    }
}

/// Walks one vertex's chain through the edge array.
struct EdgeChain<'a, W>
where
    W: PrimInt + Unsigned + Debug,
{
    edges: &'a [EdgeSlot<W>],
    cursor: usize,
}

impl<W> Iterator for EdgeChain<'_, W>
where
    W: PrimInt + Unsigned + Debug,
{
    type Item = (usize, W);

    fn next(&mut self) -> Option<(usize, W)> {
        if self.cursor == NIL {
            return None;
        }
        let slot = &self.edges[self.cursor];
        self.cursor = slot.next;
        Some((slot.to, slot.weight))
    }
}

impl<W> Graph<W> for ForwardStarGraph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    fn vertex_count(&self) -> usize {
        self.heads.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        let cursor = self.heads.get(vertex).copied().unwrap_or(NIL);
        Box::new(EdgeChain {
            edges: &self.edges,
            cursor,
        })
    }
}
