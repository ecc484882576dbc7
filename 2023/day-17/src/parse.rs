use aoc2023_common::Grid;
use chumsky::prelude::*;
use miette::*;

/// Lines of single-digit heat-loss values.
fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Vec<u32>>, extra::Err<Rich<'a, char>>> {
    let digit = any()
        .filter(|c: &char| c.is_ascii_digit())
        .map(|c: char| c as u32 - '0' as u32);

    digit
        .repeated()
        .at_least(1)
        .collect::<Vec<_>>()
        .separated_by(text::newline())
        .allow_trailing()
        .collect::<Vec<_>>()
}

pub fn cost_grid(input: &str) -> Result<Grid<u32>> {
    let rows = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    Ok(Grid::from_rows(rows)?)
}
