use crate::graph::ForwardStarGraph;
use rand::prelude::*;

/// Generates a random directed multigraph with `edge_count` edges
///
/// Endpoints are drawn uniformly (self-loops skipped), weights uniformly
/// from `1..=max_weight`. Deterministic for a fixed seed.
pub fn random_graph(
    vertex_count: usize,
    edge_count: usize,
    max_weight: u64,
    seed: u64,
) -> ForwardStarGraph<u64> {
    assert!(vertex_count > 1, "need at least two vertices");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = ForwardStarGraph::with_edge_capacity(vertex_count, edge_count);

    let mut added = 0;
    while added < edge_count {
        let u = rng.gen_range(0..vertex_count);
        let v = rng.gen_range(0..vertex_count);
        if u == v {
            continue;
        }
        let weight = rng.gen_range(1..=max_weight);
        graph
            .add_edge(u, v, weight)
            .expect("generated endpoints are in range");
        added += 1;
    }

    graph
}

/// Generates a `rows` x `cols` grid with unit weights
///
/// Vertex `(r, c)` is `r * cols + c`; each vertex connects to its four
/// neighbors in both directions.
pub fn grid_graph(rows: usize, cols: usize) -> ForwardStarGraph<u64> {
    let mut graph = ForwardStarGraph::new(rows * cols);
    let index = |r: usize, c: usize| r * cols + c;

    for r in 0..rows {
        for c in 0..cols {
            let current = index(r, c);
            if r + 1 < rows {
                graph
                    .add_edge(current, index(r + 1, c), 1)
                    .expect("grid vertex in range");
            }
            if r > 0 {
                graph
                    .add_edge(current, index(r - 1, c), 1)
                    .expect("grid vertex in range");
            }
            if c + 1 < cols {
                graph
                    .add_edge(current, index(r, c + 1), 1)
                    .expect("grid vertex in range");
            }
            if c > 0 {
                graph
                    .add_edge(current, index(r, c - 1), 1)
                    .expect("grid vertex in range");
            }
        }
    }

    graph
}

/// Generates a layered graph: `layers` layers of `width` vertices, every
/// vertex wired to the whole next layer with random weights
///
/// Produces graphs where many equal tentative distances coexist, which
/// stresses tie handling in the frontier structure.
pub fn layered_graph(layers: usize, width: usize, max_weight: u64, seed: u64) -> ForwardStarGraph<u64> {
    assert!(layers > 0 && width > 0);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = ForwardStarGraph::new(layers * width);

    for layer in 0..layers - 1 {
        for a in 0..width {
            for b in 0..width {
                let weight = rng.gen_range(1..=max_weight);
                graph
                    .add_edge(layer * width + a, (layer + 1) * width + b, weight)
                    .expect("layered vertex in range");
            }
        }
    }

    graph
}
