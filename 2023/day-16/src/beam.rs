use aoc2023_common::{Grid, Heading};
use glam::IVec2;
use itertools::Itertools;
use rayon::prelude::*;
use tracing::debug;

use crate::tile::{Deflection, Tile};

/// The headings each cell has been entered with, one bit per heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedSet {
    width: usize,
    masks: Vec<u8>,
}

impl VisitedSet {
    pub fn for_grid<T>(grid: &Grid<T>) -> Self {
        Self {
            width: grid.width(),
            masks: vec![0; grid.len()],
        }
    }

    /// Marks `heading` as seen at flat index `cell`. Returns `false` if it
    /// already was.
    #[inline(always)]
    pub fn insert(&mut self, cell: usize, heading: Heading) -> bool {
        let bit = 1 << heading.index();
        let fresh = self.masks[cell] & bit == 0;
        self.masks[cell] |= bit;
        fresh
    }

    pub fn contains(&self, cell: usize, heading: Heading) -> bool {
        self.masks
            .get(cell)
            .is_some_and(|mask| mask & (1 << heading.index()) != 0)
    }

    /// Number of distinct cells touched, whatever the heading.
    pub fn energized(&self) -> usize {
        self.masks.iter().filter(|&&mask| mask != 0).count()
    }

    /// `#` for energized cells, `.` for the rest.
    pub fn render(&self) -> String {
        self.masks
            .chunks(self.width)
            .map(|row| {
                row.iter()
                    .map(|&mask| if mask != 0 { '#' } else { '.' })
                    .collect::<String>()
            })
            .join("\n")
    }
}

/// Follows a beam entering `start` along `heading`, plus every beam split off
/// from it, until each one leaves the grid or repeats a visited state.
pub fn trace(grid: &Grid<Tile>, start: IVec2, heading: Heading) -> VisitedSet {
    let mut visited = VisitedSet::for_grid(grid);
    let mut pending = vec![(start, heading)];

    while let Some((pos, heading)) = pending.pop() {
        // Beam left the grid.
        let Some(cell) = grid.index_of(pos) else {
            continue;
        };
        // Same cell, same heading: everything downstream is already traced.
        if !visited.insert(cell, heading) {
            continue;
        }

        // Queue whatever leaves this tile, one step further along.
        match grid.as_slice()[cell].deflect(heading) {
            Deflection::Pass(out) => pending.push((out.step(pos), out)),
            Deflection::Split(a, b) => {
                pending.push((a.step(pos), a));
                pending.push((b.step(pos), b));
            }
        }
    }

    visited
}

pub fn beam_coverage(grid: &Grid<Tile>, start: IVec2, heading: Heading) -> usize {
    trace(grid, start, heading).energized()
}

/// Every border cell paired with the heading that points into the grid.
pub fn edge_entries<T>(grid: &Grid<T>) -> Vec<(IVec2, Heading)> {
    let right = grid.width() as i32 - 1;
    let bottom = grid.height() as i32 - 1;

    // Top and bottom rows shine down and up, side columns shine across.
    let columns = (0..=right).flat_map(|x| {
        [
            (IVec2::new(x, 0), Heading::Down),
            (IVec2::new(x, bottom), Heading::Up),
        ]
    });
    let rows = (0..=bottom).flat_map(|y| {
        [
            (IVec2::new(0, y), Heading::Right),
            (IVec2::new(right, y), Heading::Left),
        ]
    });

    columns.chain(rows).collect()
}

/// Best [`beam_coverage`] over all [`edge_entries`], evaluated in parallel.
#[tracing::instrument(skip(grid), fields(width = grid.width(), height = grid.height()))]
pub fn max_beam_coverage(grid: &Grid<Tile>) -> usize {
    let entries = edge_entries(grid);

    let best = entries
        .par_iter()
        .map(|&(start, heading)| beam_coverage(grid, start, heading))
        .max()
        .unwrap_or(0);

    debug!(entries = entries.len(), best, "swept edge entries");
    best
}
