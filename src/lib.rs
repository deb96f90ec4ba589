pub mod board;
pub mod cli;

pub use board::{distance, distance_naive, Square};
