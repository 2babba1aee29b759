use bmssp_core::graph::generators::{grid_graph, random_graph};
use bmssp_core::graph::Graph;
use bmssp_core::{Bmssp, Dijkstra, ForwardStarGraph, ShortestPathAlgorithm};
use colored::Colorize;
use std::time::{Duration, Instant};

fn time_algorithm<A>(
    algorithm: &A,
    graph: &ForwardStarGraph<u64>,
    source: usize,
) -> (Duration, usize)
where
    A: ShortestPathAlgorithm<u64, ForwardStarGraph<u64>>,
{
    let start = Instant::now();
    let result = algorithm
        .compute_shortest_paths(graph, source)
        .expect("benchmark graphs are well-formed");
    let elapsed = start.elapsed();

    let reachable = result.distances.iter().filter(|d| d.is_some()).count();
    (elapsed, reachable)
}

fn run_case(label: &str, graph: &ForwardStarGraph<u64>) -> (String, Duration, Duration) {
    println!(
        "\n{} {} ({} vertices, {} edges)",
        "Benchmarking".bold(),
        label.cyan(),
        graph.vertex_count(),
        graph.edge_count()
    );

    let bmssp: Bmssp<u64, ForwardStarGraph<u64>> = Bmssp::new(graph.vertex_count());
    let (k, t, levels) = bmssp.parameters();
    println!("  parameters: k={}, t={}, levels={}", k, t, levels);

    let (dijkstra_time, dijkstra_reachable) = time_algorithm(&Dijkstra::new(), graph, 0);
    println!(
        "  {:<10} {:>10.2?}  ({} reachable)",
        "Dijkstra", dijkstra_time, dijkstra_reachable
    );

    let (bmssp_time, bmssp_reachable) = time_algorithm(&bmssp, graph, 0);
    println!(
        "  {:<10} {:>10.2?}  ({} reachable)",
        "BMSSP", bmssp_time, bmssp_reachable
    );

    if dijkstra_reachable != bmssp_reachable {
        println!("  {}", "reachable counts disagree!".red().bold());
    }

    (label.to_string(), dijkstra_time, bmssp_time)
}

fn main() {
    println!("{}", "Dijkstra vs BMSSP".bold().underline());

    let cases = vec![
        ("random 10k x 40k", random_graph(10_000, 40_000, 100, 42)),
        ("random 50k x 200k", random_graph(50_000, 200_000, 100, 42)),
        ("random 100k x 300k", random_graph(100_000, 300_000, 1_000, 7)),
        ("sparse 100k x 150k", random_graph(100_000, 150_000, 100, 11)),
        ("grid 300 x 300", grid_graph(300, 300)),
    ];

    let mut rows = Vec::new();
    for (label, graph) in &cases {
        rows.push(run_case(label, graph));
    }

    println!("\n{}", "Summary".bold().underline());
    println!(
        "{:<22} | {:>12} | {:>12} | {:>8}",
        "case", "dijkstra", "bmssp", "speedup"
    );
    println!("{}", "-".repeat(64));
    for (label, dijkstra_time, bmssp_time) in rows {
        let speedup = dijkstra_time.as_secs_f64() / bmssp_time.as_secs_f64();
        let speedup_text = format!("{:.2}x", speedup);
        let colored_speedup = if speedup >= 1.0 {
            speedup_text.green()
        } else {
            speedup_text.yellow()
        };
        println!(
            "{:<22} | {:>12.2?} | {:>12.2?} | {:>8}",
            label, dijkstra_time, bmssp_time, colored_speedup
        );
    }
}
