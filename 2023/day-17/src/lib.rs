pub mod parse;
pub mod part1;
pub mod part2;
pub mod route;
pub mod search;

pub use route::Route;
pub use search::{
    find_min_cost, Outcome, RunLimits, SearchError, SearchState, Searcher, UNREACHABLE,
};
