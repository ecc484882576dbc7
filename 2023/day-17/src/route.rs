use std::collections::HashMap;

use aoc2023_common::{Grid, Heading};
use glam::IVec2;
use itertools::Itertools;

/// Cells visited from the start to the goal, both included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    positions: Vec<IVec2>,
}

impl Route {
    pub fn new(positions: Vec<IVec2>) -> Self {
        Self { positions }
    }

    pub fn positions(&self) -> &[IVec2] {
        &self.positions
    }

    /// Number of moves, one less than the number of positions.
    pub fn steps(&self) -> usize {
        self.positions.len().saturating_sub(1)
    }

    /// Heading of every move, in order.
    pub fn headings(&self) -> Vec<Heading> {
        self.positions
            .iter()
            .tuple_windows()
            .filter_map(|(&from, &to)| Heading::between(from, to))
            .collect()
    }

    /// Straight segments as `(heading, length)`.
    pub fn runs(&self) -> Vec<(Heading, usize)> {
        self.headings()
            .into_iter()
            .dedup_with_count()
            .map(|(len, heading)| (heading, len))
            .collect()
    }

    /// Sum of the entered cells; the start cell is free.
    pub fn cost(&self, grid: &Grid<u32>) -> u64 {
        self.positions
            .iter()
            .skip(1)
            .filter_map(|&pos| grid.get(pos))
            .map(|&cell| u64::from(cell))
            .sum()
    }

    /// Draws `grid` with every entered cell replaced by the arrow of the move
    /// that entered it.
    pub fn render(&self, grid: &Grid<u32>) -> String {
        let arrows: HashMap<IVec2, char> = self
            .positions
            .iter()
            .skip(1)
            .copied()
            .zip(self.headings().into_iter().map(Heading::arrow))
            .collect();

        grid.rows()
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(|(x, &cell)| {
                        arrows
                            .get(&IVec2::new(x as i32, y as i32))
                            .copied()
                            .unwrap_or_else(|| char::from_digit(cell, 10).unwrap_or('#'))
                    })
                    .collect::<String>()
            })
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::parse::cost_grid;
    use crate::search::{find_min_cost, RunLimits};
    use rstest::rstest;

    const EXAMPLE: &str = "2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533";

    #[rstest]
    #[case(RunLimits::CRUCIBLE)]
    #[case(RunLimits::ULTRA_CRUCIBLE)]
    fn example_route_obeys_limits(#[case] limits: RunLimits) -> miette::Result<()> {
        let grid = cost_grid(EXAMPLE)?;
        let (cost, route) = find_min_cost(&grid, limits.min(), limits.max())?;
        let route = route.expect("example grid is solvable");

        assert_eq!(route.positions().first(), Some(&grid.top_left()));
        assert_eq!(route.positions().last(), Some(&grid.bottom_right()));
        assert_eq!(route.headings().len(), route.steps());
        assert_eq!(route.cost(&grid), cost);

        for (heading, len) in route.runs() {
            assert!(len as u32 <= limits.max(), "{heading:?} run of {len}");
            assert!(len as u32 >= limits.min().max(1), "{heading:?} run of {len}");
        }
        for (a, b) in route.headings().into_iter().tuple_windows() {
            assert_ne!(a.opposite(), b, "route reverses");
        }
        Ok(())
    }

    #[test]
    fn runs_group_consecutive_headings() {
        let route = Route::new(vec![
            IVec2::new(0, 0),
            IVec2::new(1, 0),
            IVec2::new(2, 0),
            IVec2::new(2, 1),
            IVec2::new(3, 1),
        ]);
        assert_eq!(
            route.runs(),
            vec![
                (Heading::Right, 2),
                (Heading::Down, 1),
                (Heading::Right, 1)
            ]
        );
    }

    #[test]
    fn render_marks_entered_cells() -> miette::Result<()> {
        let grid = cost_grid("19\n11")?;
        let (_, route) = find_min_cost(&grid, 0, 3)?;
        let route = route.expect("two by two grid is solvable");
        assert_eq!(route.render(&grid), "19\nv>");
        Ok(())
    }

    #[test]
    fn single_cell_route_is_free() {
        let grid = Grid::from_rows(vec![vec![7]]).unwrap();
        let route = Route::new(vec![IVec2::ZERO]);
        assert_eq!(route.steps(), 0);
        assert_eq!(route.cost(&grid), 0);
        assert_eq!(route.render(&grid), "7");
    }
}
