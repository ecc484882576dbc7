use miette::*;

use crate::beam::max_beam_coverage;
use crate::parse::tile_grid;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid = tile_grid(input)?;
    Ok(max_beam_coverage(&grid).to_string())
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
        assert_eq!("51", process(input)?);
        Ok(())
    }
}
