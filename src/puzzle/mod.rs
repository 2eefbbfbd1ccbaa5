//! Fix-a-Pix puzzle model and text formats

pub mod grid;
pub mod io;

pub use grid::{ClueGrid, PaintedGrid};
pub use io::{
    create_example_puzzles, load_painted_from_file, load_puzzle_from_file, parse_painted_from_string,
    parse_puzzle_from_string, painted_to_string, save_painted_to_file,
};
