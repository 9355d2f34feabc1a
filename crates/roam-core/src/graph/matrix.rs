//! Dense adjacency-matrix graph and its text format
//!
//! The text format is a leading vertex count followed by `n * n`
//! whitespace- or comma-separated weights, row-major:
//!
//! ```text
//! 3
//! 0.0 1.5 0.0
//! 1.5 0.0 2.2
//! 0.0 2.2 0.0
//! ```

use std::path::Path;

use crate::error::{Result, RoamError};
use crate::graph::provider::Graph;

/// Dense row-major adjacency matrix over `order * order` weights.
///
/// Weights are validated at construction: every entry must be finite and
/// non-negative, which discharges the shortest-path engine's
/// no-negative-weights precondition for graphs built through this type.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseGraph {
    order: usize,
    weights: Vec<f64>,
}

impl DenseGraph {
    /// Build a graph from row-major weights
    pub fn from_weights(order: usize, weights: Vec<f64>) -> Result<Self> {
        if weights.len() != order * order {
            return Err(RoamError::invalid_matrix(format!(
                "expected {} weights for order {}, got {}",
                order * order,
                order,
                weights.len()
            )));
        }

        for (i, w) in weights.iter().enumerate() {
            if !w.is_finite() || *w < 0.0 {
                return Err(RoamError::invalid_matrix(format!(
                    "weight at row {} column {} is {} (must be finite and non-negative)",
                    i / order,
                    i % order,
                    w
                )));
            }
        }

        Ok(Self { order, weights })
    }

    /// Parse a graph from the matrix text format
    pub fn parse(text: &str) -> Result<Self> {
        let mut tokens = text
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty());

        let order: usize = tokens
            .next()
            .ok_or_else(|| RoamError::invalid_matrix("missing vertex count"))?
            .parse()
            .map_err(|_| RoamError::invalid_matrix("vertex count is not an integer"))?;

        let mut weights = Vec::with_capacity(order * order);
        for i in 0..order * order {
            let token = tokens.next().ok_or_else(|| {
                RoamError::invalid_matrix(format!(
                    "matrix truncated at row {} column {}",
                    i / order,
                    i % order
                ))
            })?;
            let weight: f64 = token.parse().map_err(|_| {
                RoamError::invalid_matrix(format!(
                    "bad weight {:?} at row {} column {}",
                    token,
                    i / order,
                    i % order
                ))
            })?;
            weights.push(weight);
        }

        Self::from_weights(order, weights)
    }

    /// Load and parse a graph from a file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Render the graph in the matrix text format
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.order.to_string());
        out.push('\n');
        for row in 0..self.order {
            let cells: Vec<String> = (0..self.order)
                .map(|col| format!("{}", self.weights[row * self.order + col]))
                .collect();
            out.push_str(&cells.join(" "));
            out.push('\n');
        }
        out
    }

    /// Row `u` of the matrix
    pub fn row(&self, u: usize) -> &[f64] {
        &self.weights[u * self.order..(u + 1) * self.order]
    }
}

impl Graph for DenseGraph {
    fn order(&self) -> usize {
        self.order
    }

    fn weight(&self, u: usize, v: usize) -> f64 {
        self.weights[u * self.order + v]
    }
}
