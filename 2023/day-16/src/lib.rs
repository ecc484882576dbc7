pub mod beam;
pub mod parse;
pub mod part1;
pub mod part2;
pub mod tile;

pub use beam::{beam_coverage, edge_entries, max_beam_coverage, trace, VisitedSet};
pub use tile::{Deflection, Tile};
