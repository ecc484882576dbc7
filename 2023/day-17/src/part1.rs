use miette::*;

use crate::parse::cost_grid;
use crate::search::{Outcome, RunLimits, Searcher};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid = cost_grid(input)?;

    let mut searcher = Searcher::new(&grid, RunLimits::CRUCIBLE);
    let Outcome::Found { cost, goal } = searcher.run() else {
        return Err(miette!("No route reaches the factory within the run limits"));
    };

    if let Some(route) = searcher.route(goal) {
        tracing::debug!("route:\n{}", route.render(&grid));
    }

    Ok(cost.to_string())
}
