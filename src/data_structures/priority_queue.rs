use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A binary min-heap over (vertex, priority) pairs
///
/// Used by the Dijkstra reference solver and by the recursion base case.
/// Ties break on the vertex id so pop order is deterministic. Stale entries
/// are not removed on decrease; callers skip them lazily on pop.
#[derive(Debug)]
pub struct MinHeap<P>
where
    P: Ord + Copy + Debug,
{
    heap: BinaryHeap<Reverse<(P, usize)>>,
}

impl<P> MinHeap<P>
where
    P: Ord + Copy + Debug,
{
    /// Creates a new empty min-heap
    pub fn new() -> Self {
        MinHeap {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the heap holds no entries
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a vertex with the given priority
    pub fn push(&mut self, vertex: usize, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Removes and returns the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(usize, P)> {
        self.heap
            .pop()
            .map(|Reverse((priority, vertex))| (vertex, priority))
    }

    /// Returns the smallest entry without removing it
    pub fn peek(&self) -> Option<(usize, P)> {
        self.heap
            .peek()
            .map(|Reverse((priority, vertex))| (*vertex, *priority))
    }
}

impl<P> Default for MinHeap<P>
where
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        MinHeap::new()
    }
}
