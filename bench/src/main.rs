use std::time::Instant;

use wayfind_core::{reachable_from, shortest_path, AccessMode, EdgeRecord, GraphDocument, Point};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let node_count: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(2_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: wayfind-bench [mode] [node_count]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  concourse   Multi-level station: stairs everywhere, lifts every 8th bay");
        println!("  corridor    One long walkway with occasional steps");
        println!("  random      Erdos-Renyi uniform random edges, 70% step-free");
        println!("  barbell     Two dense halls joined by a stair bridge and a slow lift bridge");
        println!();
        println!("Default node_count: 2000");
        return;
    }

    println!("wayfind-bench");
    println!("=============");
    println!();

    let generators: Vec<(&str, Generator)> = match mode {
        "concourse" => vec![("Multi-level concourse", gen_concourse)],
        "corridor" => vec![("Corridor", gen_corridor)],
        "random" => vec![("Erdos-Renyi random", gen_random)],
        "barbell" => vec![("Barbell (hall-bridge-hall)", gen_barbell)],
        "all" => vec![
            ("Multi-level concourse", gen_concourse as Generator),
            ("Corridor", gen_corridor),
            ("Erdos-Renyi random", gen_random),
            ("Barbell (hall-bridge-hall)", gen_barbell),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, node_count);
    }
}

/// Builds a document of roughly the requested size and names the node the
/// timed route should end at.
type Generator = fn(u64) -> (GraphDocument, u64);

fn run_benchmark(name: &str, generator: Generator, node_count: u64) {
    println!("--- {} ---", name);
    println!("Target: {} nodes", node_count);

    let (doc, target) = generator(node_count);
    let t = Instant::now();
    let graph = match doc.into_graph() {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Generated graph failed validation: {}", e);
            return;
        }
    };
    println!(
        "Loaded in {:.2}ms: {} nodes, {} edges ({} step-free), ~{:.1}KB",
        t.elapsed().as_secs_f64() * 1000.0,
        graph.node_count(),
        graph.edge_count(),
        graph.accessible_edge_count(),
        graph.memory_usage() as f64 / 1024.0
    );

    let first = node_id(0);
    let last = node_id(target);

    println!();
    println!("{:>10} {:>8} {:>12} {:>10}", "mode", "stops", "cost", "time");
    println!("{:->10} {:->8} {:->12} {:->10}", "", "", "", "");

    for mode in [AccessMode::All, AccessMode::StepFree] {
        let t = Instant::now();
        let route = shortest_path(&graph, &first, &last, mode);
        let elapsed = t.elapsed();
        let label = if mode.is_step_free() { "step-free" } else { "all" };
        match route {
            Ok(Some(r)) => println!(
                "{:>10} {:>8} {:>12.1} {:>8.3}ms",
                label,
                r.steps.len(),
                r.total_cost,
                elapsed.as_secs_f64() * 1000.0
            ),
            Ok(None) => println!(
                "{:>10} {:>8} {:>12} {:>8.3}ms",
                label,
                "-",
                "no route",
                elapsed.as_secs_f64() * 1000.0
            ),
            Err(e) => println!("{:>10} error: {}", label, e),
        }
    }

    println!();
    for mode in [AccessMode::All, AccessMode::StepFree] {
        let t = Instant::now();
        let reached = reachable_from(&graph, &first, mode).map(|r| r.len()).unwrap_or(0);
        println!(
            "Reachable from {} ({:?}): {} nodes in {:.3}ms",
            first,
            mode,
            reached,
            t.elapsed().as_secs_f64() * 1000.0
        );
    }
    println!();
}

// ---------------------------------------------------------------------------
// Generators: deterministic, single-threaded
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Zero-padded so lexicographic order matches numeric order.
fn node_id(i: u64) -> String {
    format!("n{:07}", i)
}

/// Builder that keeps coordinates on the 1000×600 canvas.
struct DocBuilder {
    doc: GraphDocument,
}

impl DocBuilder {
    fn new() -> Self {
        Self {
            doc: GraphDocument::default(),
        }
    }

    fn node(&mut self, i: u64, x: f64, y: f64) {
        self.doc.nodes.insert(
            node_id(i),
            Point {
                x: x.clamp(0.0, 1000.0),
                y: y.clamp(0.0, 600.0),
            },
        );
    }

    fn edge(&mut self, from: u64, to: u64, dist: f64, access: bool) {
        self.doc.edges.push(EdgeRecord {
            from: node_id(from),
            to: node_id(to),
            dist,
            access,
        });
    }

    fn finish(self) -> GraphDocument {
        self.doc
    }
}

/// Multi-level concourse: `levels` rows of bays.
///
/// Walkways along a level are step-free. Every bay has stairs to the level
/// above; only every 8th bay has a lift, which costs more than the stairs.
fn gen_concourse(node_count: u64) -> (GraphDocument, u64) {
    let levels = 4u64;
    let bays = (node_count / levels).max(2);
    let mut b = DocBuilder::new();
    let mut rng = FastRng::new(42);

    for level in 0..levels {
        for bay in 0..bays {
            let i = level * bays + bay;
            b.node(
                i,
                bay as f64 * 1000.0 / bays as f64,
                600.0 - level as f64 * 150.0,
            );
            if bay > 0 {
                b.edge(i - 1, i, 10.0 + rng.next(5) as f64, true);
            }
            if level > 0 {
                let below = i - bays;
                b.edge(below, i, 25.0, false);
                if bay % 8 == 0 {
                    b.edge(below, i, 60.0, true);
                }
            }
        }
    }

    (b.finish(), levels * bays - 1)
}

/// One long corridor; about one segment in twenty has steps, each bypassed
/// by a longer step-free detour node. Detour ids come after the spine, so
/// the far end of the walkway is `spine - 1`.
fn gen_corridor(node_count: u64) -> (GraphDocument, u64) {
    let mut b = DocBuilder::new();
    let mut rng = FastRng::new(12345);
    let spine = node_count.max(2);

    for i in 0..spine {
        b.node(i, i as f64 * 1000.0 / spine as f64, 300.0);
    }
    let mut next = spine;
    for i in 1..spine {
        if rng.next(20) == 0 {
            b.edge(i - 1, i, 5.0, false);
            b.node(next, (i as f64 - 0.5) * 1000.0 / spine as f64, 340.0);
            b.edge(i - 1, next, 8.0, true);
            b.edge(next, i, 8.0, true);
            next += 1;
        } else {
            b.edge(i - 1, i, 5.0, true);
        }
    }

    (b.finish(), spine - 1)
}

/// Erdos-Renyi: ~4 edges per node, 70% of them step-free.
fn gen_random(node_count: u64) -> (GraphDocument, u64) {
    let n = node_count.max(2);
    let mut b = DocBuilder::new();
    let mut rng = FastRng::new(54321);

    for i in 0..n {
        b.node(i, rng.next(1000) as f64, rng.next(600) as f64);
    }
    for _ in 0..n * 4 {
        let from = rng.next(n);
        let to = rng.next(n);
        if from != to {
            b.edge(from, to, 1.0 + rng.next(100) as f64, rng.next_f64() < 0.7);
        }
    }

    (b.finish(), n - 1)
}

/// Barbell: two dense halls joined by a short stair bridge and a long
/// step-free lift bridge. Step-free queries must take the detour.
fn gen_barbell(node_count: u64) -> (GraphDocument, u64) {
    let half = (node_count.max(8) - 2) / 2;
    let mut b = DocBuilder::new();
    let mut rng = FastRng::new(99999);

    let hall = |b: &mut DocBuilder, rng: &mut FastRng, start: u64, x0: f64| {
        for i in 0..half {
            b.node(start + i, x0 + rng.next(400) as f64, rng.next(600) as f64);
        }
        for i in 0..half {
            for _ in 0..6u64.min(half - 1) {
                let target = rng.next(half);
                if target != i {
                    b.edge(start + i, start + target, 1.0 + rng.next(20) as f64, true);
                }
            }
        }
    };

    hall(&mut b, &mut rng, 0, 0.0);
    let b_start = half + 2;
    hall(&mut b, &mut rng, b_start, 600.0);

    // Bridge nodes sit between the halls.
    let stairs = half;
    let lift = half + 1;
    b.node(stairs, 500.0, 200.0);
    b.node(lift, 500.0, 400.0);
    b.edge(half - 1, stairs, 5.0, false);
    b.edge(stairs, b_start, 5.0, false);
    b.edge(half - 1, lift, 50.0, true);
    b.edge(lift, b_start, 50.0, true);

    (b.finish(), b_start + half - 1)
}
