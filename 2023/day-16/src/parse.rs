use aoc2023_common::Grid;
use chumsky::prelude::*;
use miette::*;

use crate::tile::Tile;

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Vec<Tile>>, extra::Err<Rich<'a, char>>> {
    let tile = any().try_map(|c: char, span| {
        Tile::try_from(c).map_err(|c| Rich::custom(span, format!("unknown tile {c:?}")))
    });

    tile.repeated()
        .at_least(1)
        .collect::<Vec<_>>()
        .separated_by(text::newline())
        .allow_trailing()
        .collect::<Vec<_>>()
}

pub fn tile_grid(input: &str) -> Result<Grid<Tile>> {
    let rows = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    Ok(Grid::from_rows(rows)?)
}
