//! Life-like Cellular Automaton Engine
//!
//! This library evolves two-dimensional grids under configurable
//! birth/survival rules ("B3/S23" and friends) on a finite grid whose
//! border behaves as permanently dead.

pub mod config;
pub mod error;
pub mod game_of_life;

pub use config::Settings;
pub use error::AutomatonError;
pub use game_of_life::{Automaton, Cell, Grid, Rule};

use anyhow::Result;
use log::info;

/// Main entry point: load the configured grid and evolve it
pub fn run_from_settings(settings: &Settings) -> Result<Grid> {
    let grid = game_of_life::load_grid_from_file(&settings.input.grid_file)?;
    info!(
        "Loaded {} rows with {} living cells from {}",
        grid.height(),
        grid.living_count(),
        settings.input.grid_file.display()
    );

    let mut automaton = Automaton::from_grid(grid, settings.simulation.rule.clone());
    automaton.run(settings.simulation.generations);
    Ok(automaton.into_grid())
}
