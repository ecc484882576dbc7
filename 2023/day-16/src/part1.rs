use aoc2023_common::Heading;
use glam::IVec2;
use miette::*;

use crate::beam::trace;
use crate::parse::tile_grid;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid = tile_grid(input)?;

    let visited = trace(&grid, IVec2::ZERO, Heading::Right);
    tracing::debug!("energized:\n{}", visited.render());

    Ok(visited.energized().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = r".|...\....
|.-.\.....
.....|-...
........|.
..........
.........\
..../.\\..
.-.-/..|..
.|....-|.\
..//.|....";
        assert_eq!("46", process(input)?);
        Ok(())
    }
}
