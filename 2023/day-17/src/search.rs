use std::cmp::Reverse;
use std::collections::BinaryHeap;

use aoc2023_common::{Grid, Heading};
use glam::IVec2;
use miette::Diagnostic;
use thiserror::Error;
use tracing::{debug, trace};

use crate::route::Route;

/// Cost reported when no route satisfies the run limits.
pub const UNREACHABLE: u64 = u64::MAX;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SearchError {
    #[error("invalid run limits: min {min}, max {max}")]
    #[diagnostic(
        code(search::invalid_parameters),
        help("the maximum run must be at least 1 and not below the minimum run")
    )]
    InvalidParameters { min: u32, max: u32 },
}

/// Bounds on how many consecutive cells may be entered in one heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunLimits {
    min: u32,
    max: u32,
}

impl RunLimits {
    /// At most three blocks in a straight line.
    pub const CRUCIBLE: RunLimits = RunLimits { min: 0, max: 3 };
    /// Four to ten blocks before turning or stopping.
    pub const ULTRA_CRUCIBLE: RunLimits = RunLimits { min: 4, max: 10 };

    pub fn new(min: u32, max: u32) -> Result<Self, SearchError> {
        if max < 1 || min > max {
            return Err(SearchError::InvalidParameters { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(self) -> u32 {
        self.min
    }

    pub fn max(self) -> u32 {
        self.max
    }

    #[inline(always)]
    pub fn may_continue(self, run: u32) -> bool {
        run < self.max
    }

    #[inline(always)]
    pub fn may_turn(self, run: u32) -> bool {
        run >= self.min
    }

    #[inline(always)]
    pub fn may_stop(self, run: u32) -> bool {
        run >= self.min
    }
}

/// A node of the expanded search graph.
///
/// `run` counts the cells entered in a row along `heading`. The two start
/// entries use `run == 0`, meaning nothing has been entered yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchState {
    pub position: IVec2,
    pub heading: Heading,
    pub run: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Found { cost: u64, goal: SearchState },
    NoPathFound,
}

impl Outcome {
    /// The minimum cost, or [`UNREACHABLE`].
    pub fn cost(&self) -> u64 {
        match self {
            Outcome::Found { cost, .. } => *cost,
            Outcome::NoPathFound => UNREACHABLE,
        }
    }
}

/// Dijkstra over `position x heading x run`, from the top-left cell to the
/// bottom-right one.
///
/// Costs and parents live in dense tables addressed by
/// `((cell * 4) + heading) * runs + run`. A straight run can never outgrow
/// the longer grid side, so `runs` is capped there rather than at `max + 1`.
pub struct Searcher<'a> {
    grid: &'a Grid<u32>,
    limits: RunLimits,
    runs: usize,
    costs: Vec<u64>,
    parents: Vec<Option<usize>>,
    queue: BinaryHeap<Reverse<(u64, usize)>>,
    expanded: usize,
    outcome: Option<Outcome>,
}

impl<'a> Searcher<'a> {
    pub fn new(grid: &'a Grid<u32>, limits: RunLimits) -> Self {
        let longest = grid.width().max(grid.height());
        let runs = (limits.max as usize).min(longest) + 1;
        let slots = grid.len() * Heading::ALL.len() * runs;
        let mut searcher = Self {
            grid,
            limits,
            runs,
            costs: vec![UNREACHABLE; slots],
            parents: vec![None; slots],
            queue: BinaryHeap::new(),
            expanded: 0,
            outcome: None,
        };
        searcher.seed();
        searcher
    }

    fn seed(&mut self) {
        let origin = 0;

        // The origin counts as reached mid-run in every heading, so those
        // states can never be re-entered.
        for heading in Heading::ALL {
            for run in self.limits.min.max(1)..=self.longest_run() {
                let slot = self.slot(origin, heading, run);
                self.costs[slot] = 0;
            }
        }

        for heading in [Heading::Right, Heading::Down] {
            let slot = self.slot(origin, heading, 0);
            self.costs[slot] = 0;
            self.queue.push(Reverse((0, slot)));
        }
    }

    /// Largest run the tables can hold.
    fn longest_run(&self) -> u32 {
        (self.runs - 1) as u32
    }

    #[inline(always)]
    fn slot(&self, cell: usize, heading: Heading, run: u32) -> usize {
        (cell * Heading::ALL.len() + heading.index()) * self.runs + run as usize
    }

    fn slot_of(&self, state: SearchState) -> Option<usize> {
        if state.run > self.longest_run() {
            return None;
        }
        let cell = self.grid.index_of(state.position)?;
        Some(self.slot(cell, state.heading, state.run))
    }

    fn state_at(&self, slot: usize) -> SearchState {
        let run = (slot % self.runs) as u32;
        let rest = slot / self.runs;
        let heading = Heading::ALL[rest % Heading::ALL.len()];
        let cell = rest / Heading::ALL.len();
        SearchState {
            position: self.grid.position_of(cell),
            heading,
            run,
        }
    }

    /// Best known cost of `state` so far, [`UNREACHABLE`] if never reached.
    pub fn cost_of(&self, state: SearchState) -> u64 {
        self.slot_of(state)
            .map(|slot| self.costs[slot])
            .unwrap_or(UNREACHABLE)
    }

    /// Number of non-stale states taken off the queue.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Runs the search to completion. Calling it again returns the same outcome.
    pub fn run(&mut self) -> Outcome {
        if let Some(outcome) = self.outcome {
            return outcome;
        }

        let goal = self.grid.len() - 1;
        let mut outcome = Outcome::NoPathFound;

        while let Some(Reverse((cost, slot))) = self.queue.pop() {
            // A cheaper entry for this state was already expanded.
            if cost > self.costs[slot] {
                trace!(slot, cost, best = self.costs[slot], "discarding stale entry");
                continue;
            }

            // The first goal pop that may stop is optimal, since pops come out
            // in cost order.
            let state = self.state_at(slot);
            let cell = slot / (self.runs * Heading::ALL.len());
            if cell == goal && self.limits.may_stop(state.run) {
                outcome = Outcome::Found { cost, goal: state };
                break;
            }

            self.expanded += 1;
            self.expand(slot, state, cost);
        }

        match outcome {
            Outcome::Found { cost, goal } => {
                debug!(cost, ?goal, expanded = self.expanded, "reached goal")
            }
            Outcome::NoPathFound => debug!(expanded = self.expanded, "frontier exhausted"),
        }
        self.outcome = Some(outcome);
        outcome
    }

    fn expand(&mut self, slot: usize, state: SearchState, cost: u64) {
        for heading in Heading::ALL {
            // No reversing on the spot.
            if heading == state.heading.opposite() {
                continue;
            }

            // Going straight extends the run, turning restarts it at one.
            let run = if heading == state.heading {
                if !self.limits.may_continue(state.run) {
                    continue;
                }
                state.run + 1
            } else {
                if !self.limits.may_turn(state.run) {
                    continue;
                }
                1
            };

            // Off the edge.
            let Some(cell) = self.grid.index_of(heading.step(state.position)) else {
                continue;
            };
            // Entering a cell costs its own value.
            let candidate = cost + u64::from(self.grid.as_slice()[cell]);
            let next = self.slot(cell, heading, run);
            if self.lower(next, candidate, slot) {
                self.queue.push(Reverse((candidate, next)));
            }
        }
    }

    /// Records `candidate` for `slot` if it strictly improves on the table.
    fn lower(&mut self, slot: usize, candidate: u64, parent: usize) -> bool {
        if candidate >= self.costs[slot] {
            return false;
        }
        self.costs[slot] = candidate;
        self.parents[slot] = Some(parent);
        true
    }

    /// Walks parent pointers back from `goal` to the start.
    pub fn route(&self, goal: SearchState) -> Option<Route> {
        let mut slot = self.slot_of(goal)?;
        if self.costs[slot] == UNREACHABLE {
            return None;
        }

        let mut positions = vec![goal.position];
        while let Some(parent) = self.parents[slot] {
            positions.push(self.state_at(parent).position);
            slot = parent;
        }
        positions.reverse();
        Some(Route::new(positions))
    }
}

/// Minimum heat loss from the top-left to the bottom-right cell, plus the
/// route that achieves it. Returns [`UNREACHABLE`] and no route when the
/// limits cannot be satisfied.
#[tracing::instrument(skip(grid), fields(width = grid.width(), height = grid.height()))]
pub fn find_min_cost(
    grid: &Grid<u32>,
    min_straight: u32,
    max_straight: u32,
) -> Result<(u64, Option<Route>), SearchError> {
    let limits = RunLimits::new(min_straight, max_straight)?;
    let mut searcher = Searcher::new(grid, limits);
    Ok(match searcher.run() {
        Outcome::Found { cost, goal } => (cost, searcher.route(goal)),
        Outcome::NoPathFound => (UNREACHABLE, None),
    })
}
