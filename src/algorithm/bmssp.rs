use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{BlockHeap, MinHeap};
use crate::graph::Graph;
use crate::{Error, Result};
use num_traits::{PrimInt, Unsigned};
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::marker::PhantomData;

/// The bounded multi-source shortest path recursion
///
/// Implements the three-level mutual recursion from "Breaking the Sorting
/// Barrier for Directed Single-Source Shortest Paths" (Duan et al., 2025):
/// `execute` (Algorithm 3) descends level by level, `find_pivots`
/// (Algorithm 1) condenses a frame's source set to the roots of heavy
/// shortest-path subtrees, and `base_case` (Algorithm 2) finishes singleton
/// frames with a bounded Dijkstra. A frame never completes more than
/// k * 2^(level * t) vertices; work beyond that budget is handed back to the
/// caller through the returned bound.
#[derive(Debug)]
pub struct Bmssp<W, G>
where
    W: PrimInt + Unsigned + Debug,
    G: Graph<W>,
{
    /// Relaxation depth and subtree threshold, max(1, floor(log2(n)^(1/3)))
    k: usize,

    /// Level width exponent, max(1, floor(log2(n)^(2/3)))
    t: usize,

    /// Top recursion level, max(1, ceil(log2(n) / t))
    levels: usize,

    _weight_marker: PhantomData<W>,
    _graph_marker: PhantomData<G>,
}

/// Result of one BMSSP frame
#[derive(Debug)]
pub struct FrameResult<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// Bound below which the completed set is exact; never above the bound
    /// the frame was called with
    pub bound: W,

    /// Vertices whose distance is final and below `bound`
    pub completed: Vec<usize>,
}

/// 2^bits clamped to the machine word
fn pow2_saturating(bits: usize) -> usize {
    if bits >= usize::BITS as usize {
        usize::MAX
    } else {
        1usize << bits
    }
}

impl<W, G> Bmssp<W, G>
where
    W: PrimInt + Unsigned + Debug,
    G: Graph<W>,
{
    /// Creates a recursion instance with parameters derived from the vertex
    /// count
    pub fn new(vertex_count: usize) -> Self {
        let log_n = (vertex_count.max(2) as f64).log2();
        let k = (log_n.powf(1.0 / 3.0).floor() as usize).max(1);
        let t = (log_n.powf(2.0 / 3.0).floor() as usize).max(1);
        let levels = ((log_n / t as f64).ceil() as usize).max(1);

        Bmssp {
            k,
            t,
            levels,
            _weight_marker: PhantomData,
            _graph_marker: PhantomData,
        }
    }

    /// Top level of the recursion for this instance
    pub fn levels(&self) -> usize {
        self.levels
    }

    /// The derived parameters (k, t, levels)
    pub fn parameters(&self) -> (usize, usize, usize) {
        (self.k, self.t, self.levels)
    }

    /// Runs one frame of the recursion (Algorithm 3)
    ///
    /// `sources` must already be relaxed into `distances`. Completes a
    /// bounded set of vertices below the returned bound, updating
    /// `distances` and `predecessors` in place.
    pub fn execute(
        &self,
        graph: &G,
        level: usize,
        bound: W,
        sources: &[usize],
        distances: &mut [W],
        predecessors: &mut [Option<usize>],
    ) -> Result<FrameResult<W>> {
        if sources.is_empty() {
            return Err(Error::AlgorithmError("empty source set".to_string()));
        }
        if level == 0 {
            return Ok(self.base_case(graph, bound, sources, distances, predecessors));
        }

        let (pivots, reachable) = self.find_pivots(graph, bound, sources, distances, predecessors);

        // Fresh frontier structure for this frame, seeded with the pivots.
        let block_capacity = pow2_saturating((level - 1) * self.t);
        let mut frontier: BlockHeap<usize, W> = BlockHeap::new(block_capacity, bound);
        for &pivot in &pivots {
            frontier.insert(pivot, distances[pivot]);
        }

        let mut current_bound = bound;
        for &pivot in &pivots {
            current_bound = current_bound.min(distances[pivot]);
        }

        let budget = self.k.saturating_mul(pow2_saturating(level * self.t));
        let mut completed: Vec<usize> = Vec::new();
        let mut in_completed: HashSet<usize> = HashSet::new();

        while completed.len() < budget && !frontier.is_empty() {
            let (batch, batch_bound) = frontier.pull();
            let child = self.execute(graph, level - 1, batch_bound, &batch, distances, predecessors)?;
            current_bound = child.bound;

            for &v in &child.completed {
                if in_completed.insert(v) {
                    completed.push(v);
                }
            }

            // Relax out of the freshly completed set. Improvements landing
            // in [batch_bound, bound) go back into the frontier; those in
            // [child.bound, batch_bound) are below everything still queued
            // and are prepended in bulk.
            let mut pending: Vec<(usize, W)> = Vec::new();
            for &u in &child.completed {
                let dist_u = distances[u];
                for (v, weight) in graph.outgoing_edges(u) {
                    let next = dist_u.saturating_add(weight);
                    if next > distances[v] {
                        continue;
                    }
                    if next < distances[v] {
                        distances[v] = next;
                        predecessors[v] = Some(u);
                    }
                    if next >= batch_bound && next < bound {
                        frontier.insert(v, next);
                    } else if next >= child.bound && next < batch_bound {
                        pending.push((v, next));
                    }
                }
            }
            // Batch members the child frame did not finish re-enter ahead of
            // the queue.
            for &x in &batch {
                if distances[x] >= child.bound && distances[x] < batch_bound {
                    pending.push((x, distances[x]));
                }
            }
            if !pending.is_empty() {
                frontier.batch_prepend(pending);
            }

            if completed.len() > budget {
                break;
            }
        }

        for &v in &reachable {
            if distances[v] < current_bound && in_completed.insert(v) {
                completed.push(v);
            }
        }

        Ok(FrameResult {
            bound: current_bound,
            completed,
        })
    }

    /// Level-0 frame (Algorithm 2): bounded Dijkstra from a singleton
    ///
    /// Explores strictly below `bound`. Returns at most k completed
    /// vertices under the original bound; past that the bound tightens to
    /// the largest distance seen and vertices at the new bound are handed
    /// back to the caller.
    fn base_case(
        &self,
        graph: &G,
        bound: W,
        sources: &[usize],
        distances: &mut [W],
        predecessors: &mut [Option<usize>],
    ) -> FrameResult<W> {
        let mut completed: Vec<usize> = Vec::new();
        let origin = match sources.first() {
            Some(&origin) => origin,
            None => {
                return FrameResult { bound, completed };
            }
        };
        debug_assert!(sources.len() == 1, "base case expects a singleton source set");
        debug_assert!(distances[origin] < bound);

        let mut heap: MinHeap<W> = MinHeap::new();
        let mut popped: HashSet<usize> = HashSet::new();
        heap.push(origin, distances[origin]);

        while let Some((u, dist_u)) = heap.pop() {
            if dist_u != distances[u] || !popped.insert(u) {
                continue;
            }
            completed.push(u);

            for (v, weight) in graph.outgoing_edges(u) {
                let next = distances[u].saturating_add(weight);
                if next > distances[v] || next >= bound {
                    continue;
                }
                if next < distances[v] {
                    distances[v] = next;
                    predecessors[v] = Some(u);
                }
                heap.push(v, distances[v]);
            }
        }

        if completed.len() <= self.k {
            return FrameResult { bound, completed };
        }

        let tightened = completed
            .iter()
            .map(|&v| distances[v])
            .max()
            .expect("completed set exceeds k >= 1");
        completed.retain(|&v| distances[v] < tightened);
        FrameResult {
            bound: tightened,
            completed,
        }
    }

    /// Algorithm 1: k rounds of bounded Bellman-Ford from `sources`, then
    /// pivot selection over the tight-edge forest
    ///
    /// Returns the pivots and the full set of vertices reached below the
    /// bound. Bails out with all of `sources` as pivots as soon as the
    /// reached set grows past k times the source count.
    fn find_pivots(
        &self,
        graph: &G,
        bound: W,
        sources: &[usize],
        distances: &mut [W],
        predecessors: &mut [Option<usize>],
    ) -> (Vec<usize>, Vec<usize>) {
        let mut reached: Vec<usize> = sources.to_vec();
        let mut in_reached: HashSet<usize> = sources.iter().copied().collect();
        let mut frontier: Vec<usize> = sources.to_vec();

        for _ in 0..self.k {
            let mut next_frontier: Vec<usize> = Vec::new();
            for &u in &frontier {
                if distances[u] == W::max_value() {
                    continue;
                }
                for (v, weight) in graph.outgoing_edges(u) {
                    let next = distances[u].saturating_add(weight);
                    if next > distances[v] {
                        continue;
                    }
                    if next < distances[v] {
                        distances[v] = next;
                        predecessors[v] = Some(u);
                    }
                    if next < bound && in_reached.insert(v) {
                        reached.push(v);
                        next_frontier.push(v);
                    }
                }
            }
            frontier = next_frontier;

            if reached.len() > self.k * sources.len() {
                return (sources.to_vec(), reached);
            }
            if frontier.is_empty() {
                break;
            }
        }

        // Forest of tight edges inside the reached set. Keeping only the
        // first tight parent per vertex makes in-degrees at most one, so the
        // forest has no cycle reachable from a root and each subtree is
        // counted once.
        let mut children: HashMap<usize, Vec<usize>> = HashMap::new();
        let mut tight_parent: HashMap<usize, usize> = HashMap::new();
        for &u in &reached {
            if distances[u] == W::max_value() {
                continue;
            }
            for (v, weight) in graph.outgoing_edges(u) {
                if v != u
                    && in_reached.contains(&v)
                    && distances[v] == distances[u].saturating_add(weight)
                    && !tight_parent.contains_key(&v)
                {
                    tight_parent.insert(v, u);
                    children.entry(u).or_default().push(v);
                }
            }
        }

        let in_sources: HashSet<usize> = sources.iter().copied().collect();
        let mut pivots: Vec<usize> = Vec::new();
        for &root in &reached {
            if tight_parent.contains_key(&root) || !in_sources.contains(&root) {
                continue;
            }
            if subtree_size(&children, root) >= self.k {
                pivots.push(root);
            }
        }
        (pivots, reached)
    }
}

/// Iterative subtree size over the tight-edge forest
fn subtree_size(children: &HashMap<usize, Vec<usize>>, root: usize) -> usize {
    let mut size = 0;
    let mut stack = vec![root];
    while let Some(u) = stack.pop() {
        size += 1;
        if let Some(kids) = children.get(&u) {
            stack.extend(kids.iter().copied());
        }
    }
    size
}

impl<W, G> ShortestPathAlgorithm<W, G> for Bmssp<W, G>
where
    W: PrimInt + Unsigned + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "BMSSP"
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

        self.execute(
            graph,
            self.levels,
            infinity,
            &[source],
            &mut distances,
            &mut predecessors,
        )?;

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ForwardStarGraph;

    fn chain_with_shortcut() -> ForwardStarGraph<u64> {
        let mut graph = ForwardStarGraph::new(5);
        graph.add_edge(0, 1, 1).unwrap();
        graph.add_edge(1, 2, 1).unwrap();
        graph.add_edge(0, 2, 3).unwrap();
        graph.add_edge(2, 3, 1).unwrap();
        graph.add_edge(1, 3, 4).unwrap();
        graph.add_edge(3, 4, 1).unwrap();
        graph.add_edge(0, 4, 10).unwrap();
        graph
    }

    #[test]
    fn parameters_follow_the_formulas() {
        let bmssp: Bmssp<u64, ForwardStarGraph<u64>> = Bmssp::new(1024);
        // log2(1024) = 10: k = floor(10^(1/3)) = 2, t = floor(10^(2/3)) = 4,
        // levels = ceil(10 / 4) = 3
        assert_eq!(bmssp.parameters(), (2, 4, 3));

        let tiny: Bmssp<u64, ForwardStarGraph<u64>> = Bmssp::new(2);
        assert_eq!(tiny.parameters(), (1, 1, 1));
    }

    #[test]
    fn base_case_explores_and_tightens() {
        let graph = chain_with_shortcut();
        let n = graph.vertex_count();
        let mut distances = vec![u64::MAX; n];
        let mut predecessors = vec![None; n];
        distances[0] = 0;
        predecessors[0] = Some(0);

        // k = 1 for n = 5, so the base case tightens past one vertex.
        let bmssp: Bmssp<u64, ForwardStarGraph<u64>> = Bmssp::new(n);
        let frame = bmssp
            .execute(&graph, 0, u64::MAX, &[0], &mut distances, &mut predecessors)
            .unwrap();

        // Exploration settles the whole chain: [0, 1, 2, 3, 4]. With more
        // than k vertices the bound tightens to the largest distance and
        // vertex 4 is handed back.
        assert_eq!(distances, vec![0, 1, 2, 3, 4]);
        assert_eq!(frame.bound, 4);
        let mut completed = frame.completed;
        completed.sort_unstable();
        assert_eq!(completed, vec![0, 1, 2, 3]);
    }

    #[test]
    fn base_case_respects_the_bound() {
        let graph = chain_with_shortcut();
        let n = graph.vertex_count();
        let mut distances = vec![u64::MAX; n];
        let mut predecessors = vec![None; n];
        distances[0] = 0;
        predecessors[0] = Some(0);

        let bmssp: Bmssp<u64, ForwardStarGraph<u64>> = Bmssp::new(n);
        let frame = bmssp
            .execute(&graph, 0, 2, &[0], &mut distances, &mut predecessors)
            .unwrap();

        // Exploration stays strictly below the bound, settling 0 and 1.
        // That exceeds k = 1, so the bound tightens to the largest distance
        // seen and vertex 1 is handed back to the caller.
        assert_eq!(frame.bound, 1);
        assert_eq!(frame.completed, vec![0]);
        assert_eq!(distances[1], 1);
        assert_eq!(distances[2], u64::MAX);
        assert_eq!(distances[3], u64::MAX);
        assert_eq!(distances[4], u64::MAX);
    }

    #[test]
    fn find_pivots_bails_out_on_wide_fanout() {
        // A star: one source, many leaves within the bound. The reached set
        // outgrows k * |S| immediately, so the sources come back as pivots.
        let mut graph = ForwardStarGraph::new(9);
        for leaf in 1..9 {
            graph.add_edge(0, leaf, leaf as u64).unwrap();
        }
        let n = graph.vertex_count();
        let mut distances = vec![u64::MAX; n];
        let mut predecessors = vec![None; n];
        distances[0] = 0;
        predecessors[0] = Some(0);

        let bmssp: Bmssp<u64, ForwardStarGraph<u64>> = Bmssp::new(n);
        let (pivots, reached) =
            bmssp.find_pivots(&graph, u64::MAX, &[0], &mut distances, &mut predecessors);

        assert_eq!(pivots, vec![0]);
        assert!(reached.len() > 1);
        for leaf in 1..9 {
            assert_eq!(distances[leaf], leaf as u64);
        }
    }

    #[test]
    fn full_recursion_matches_reference_distances() {
        let graph = chain_with_shortcut();
        let bmssp: Bmssp<u64, ForwardStarGraph<u64>> = Bmssp::new(graph.vertex_count());
        let result = bmssp.compute_shortest_paths(&graph, 0).unwrap();
        assert_eq!(
            result.distances,
            vec![Some(0), Some(1), Some(2), Some(3), Some(4)]
        );
    }
}
