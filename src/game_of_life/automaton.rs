//! Stateful automaton holding a grid and its rule

use super::{encoder, evolve, Grid, Rule, Truthy};
use crate::error::Result;
use log::debug;
use serde_json::Value;

/// A grid together with the rule that evolves it.
///
/// The rule is fixed at construction; each run replaces the grid with a
/// freshly computed one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    grid: Grid,
    rule: Rule,
}

impl Automaton {
    /// Build an automaton from a dynamically typed matrix.
    ///
    /// Fails with `InvalidInput` if the matrix or any of its rows is not an array.
    pub fn new(matrix: &Value, rule: Rule) -> Result<Self> {
        Ok(Self::from_grid(encoder::encode_json(matrix)?, rule))
    }

    /// Build an automaton from typed rows
    pub fn from_rows<T: Truthy>(rows: &[Vec<T>], rule: Rule) -> Self {
        Self::from_grid(encoder::encode(rows), rule)
    }

    pub fn from_grid(grid: Grid, rule: Rule) -> Self {
        Self { grid, rule }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Advance the grid by `iterations` generations; no-op when `iterations <= 0`
    pub fn run(&mut self, iterations: i64) -> &mut Self {
        if iterations > 0 {
            debug!(
                "running {} for {} generations on {} rows",
                self.rule,
                iterations,
                self.grid.height()
            );
            let grid = std::mem::take(&mut self.grid);
            self.grid = evolve::evolve_generations(grid, &self.rule, iterations);
        }
        self
    }

    /// Advance a single generation
    pub fn step(&mut self) -> &mut Self {
        self.run(1)
    }
}
