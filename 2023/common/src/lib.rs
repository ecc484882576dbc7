//! Grid and heading models shared by the 2023 grid puzzles.

pub mod error;
pub mod grid;
pub mod heading;

pub use error::GridError;
pub use grid::Grid;
pub use heading::Heading;
