//! Seeded random graph generation
//!
//! Produces symmetric matrices with a zero diagonal: each unordered pair
//! gets an edge with the configured probability and a uniform weight in
//! `[1, max_weight]`. The seed is explicit so runs are reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Result, RoamError};
use crate::graph::matrix::DenseGraph;

/// Parameters for random graph generation
#[derive(Debug, Clone)]
pub struct GenOptions {
    /// Vertex count
    pub order: usize,
    /// Upper bound for edge weights (inclusive)
    pub max_weight: f64,
    /// Probability that any unordered pair gets an edge
    pub edge_probability: f64,
    /// RNG seed
    pub seed: u64,
}

impl Default for GenOptions {
    fn default() -> Self {
        Self {
            order: 0,
            max_weight: 10.0,
            edge_probability: 0.5,
            seed: 0,
        }
    }
}

/// Generate a random symmetric graph
pub fn generate(opts: &GenOptions) -> Result<DenseGraph> {
    if !(0.0..=1.0).contains(&opts.edge_probability) {
        return Err(RoamError::invalid_value(
            "edge probability",
            opts.edge_probability,
        ));
    }
    if !opts.max_weight.is_finite() || opts.max_weight < 1.0 {
        return Err(RoamError::invalid_value("max weight", opts.max_weight));
    }

    let n = opts.order;
    let mut rng = StdRng::seed_from_u64(opts.seed);
    let mut weights = vec![0.0; n * n];

    for i in 0..n {
        for j in i + 1..n {
            if rng.gen_bool(opts.edge_probability) {
                let weight = rng.gen_range(1.0..=opts.max_weight);
                weights[i * n + j] = weight;
                weights[j * n + i] = weight;
            }
        }
    }

    tracing::debug!(
        order = n,
        edges = weights.iter().filter(|w| **w > 0.0).count() / 2,
        "generated graph"
    );

    DenseGraph::from_weights(n, weights)
}
