//! Game of Life core functionality

pub mod automaton;
pub mod cell;
pub mod encoder;
pub mod evolve;
pub mod grid;
pub mod io;
pub mod rules;

pub use automaton::Automaton;
pub use cell::Cell;
pub use encoder::{decode_with_markers, encode, encode_json, encode_with, Truthy};
pub use evolve::{evolve, evolve_generations};
pub use grid::Grid;
pub use io::{create_example_grids, load_grid_from_file, save_grid_to_file, save_grid_to_json_file};
pub use rules::{Rule, MAX_NEIGHBORS};
