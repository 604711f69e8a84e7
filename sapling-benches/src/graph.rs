//! Seeded synthetic graph generation.
//!
//! Every generated graph is connected: a random spanning path is laid down
//! first and further random edges are added until the requested average
//! degree is reached.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use sapling_core::{Graph, GraphBuilder, VertexId, Weight};

use crate::error::BenchSetupError;

/// Configuration for [`connected_graph`].
#[derive(Clone, Copy, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Target average degree; values below 2 still yield a spanning path.
    pub degree: usize,
    /// Exclusive upper bound for edge weights; zero is treated as one.
    pub max_weight: Weight,
    /// RNG seed.
    pub seed: u64,
}

/// Generates a connected random graph.
///
/// Parallel edges may appear; self-loops never do.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroVertices`] for an empty configuration and
/// [`BenchSetupError::DegreeTooHigh`] when `degree >= vertex_count`.
///
/// # Examples
/// ```
/// use sapling_benches::graph::{SyntheticGraphConfig, connected_graph};
///
/// let graph = connected_graph(&SyntheticGraphConfig {
///     vertex_count: 50,
///     degree: 4,
///     max_weight: 1_000,
///     seed: 7,
/// })?;
/// assert_eq!(graph.len(), 50);
/// assert_eq!(graph.edge_count(), 100);
/// # Ok::<(), sapling_benches::error::BenchSetupError>(())
/// ```
pub fn connected_graph(config: &SyntheticGraphConfig) -> Result<Graph, BenchSetupError> {
    let n = config.vertex_count;
    if n == 0 {
        return Err(BenchSetupError::ZeroVertices);
    }
    if n > 1 && config.degree >= n {
        return Err(BenchSetupError::DegreeTooHigh {
            degree: config.degree,
            vertex_count: n,
        });
    }

    let max_weight = config.max_weight.max(1);
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut builder = GraphBuilder::with_capacity(n);
    let ids = (0..n)
        .map(|index| builder.add_vertex(format!("v{index}")))
        .collect::<Result<Vec<VertexId>, _>>()?;

    let mut order = ids.clone();
    for i in (1..order.len()).rev() {
        let j = rng.gen_range(0..=i);
        order.swap(i, j);
    }
    for pair in order.windows(2) {
        if let [left, right] = pair {
            builder.add_edge(*left, *right, rng.gen_range(0..max_weight))?;
        }
    }

    let target = target_edge_count(n, config.degree);
    let mut edges = n - 1;
    while edges < target {
        let left = rng.gen_range(0..n);
        let right = rng.gen_range(0..n);
        if left == right {
            continue;
        }
        if let (Some(&a), Some(&b)) = (ids.get(left), ids.get(right)) {
            builder.add_edge(a, b, rng.gen_range(0..max_weight))?;
            edges += 1;
        }
    }

    Ok(builder.build())
}

/// Number of undirected edges for an average degree `degree`, never fewer
/// than the `n - 1` edges of the spanning path.
fn target_edge_count(vertex_count: usize, degree: usize) -> usize {
    let wanted = vertex_count.saturating_mul(degree) / 2;
    wanted.max(vertex_count.saturating_sub(1))
}
