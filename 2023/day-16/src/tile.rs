use aoc2023_common::Heading;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// `.`
    Empty,
    /// `/`
    MirrorForward,
    /// `\`
    MirrorBackward,
    /// `-`
    SplitterHorizontal,
    /// `|`
    SplitterVertical,
}

/// What leaves a tile after a beam enters it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deflection {
    Pass(Heading),
    Split(Heading, Heading),
}

// Indexed by `Heading::index()`: Right, Left, Up, Down.
const FORWARD_REFLECTIONS: [Heading; 4] =
    [Heading::Up, Heading::Down, Heading::Right, Heading::Left];
const BACKWARD_REFLECTIONS: [Heading; 4] =
    [Heading::Down, Heading::Up, Heading::Left, Heading::Right];

impl Tile {
    pub fn deflect(self, heading: Heading) -> Deflection {
        match self {
            Tile::Empty => Deflection::Pass(heading),
            Tile::MirrorForward => Deflection::Pass(FORWARD_REFLECTIONS[heading.index()]),
            Tile::MirrorBackward => Deflection::Pass(BACKWARD_REFLECTIONS[heading.index()]),
            Tile::SplitterHorizontal if !heading.is_horizontal() => {
                Deflection::Split(Heading::Left, Heading::Right)
            }
            Tile::SplitterVertical if heading.is_horizontal() => {
                Deflection::Split(Heading::Up, Heading::Down)
            }
            Tile::SplitterHorizontal | Tile::SplitterVertical => Deflection::Pass(heading),
        }
    }
}

impl TryFrom<char> for Tile {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '.' => Ok(Tile::Empty),
            '/' => Ok(Tile::MirrorForward),
            '\\' => Ok(Tile::MirrorBackward),
            '-' => Ok(Tile::SplitterHorizontal),
            '|' => Ok(Tile::SplitterVertical),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(Tile::MirrorForward, Heading::Right, Heading::Up)]
    #[case(Tile::MirrorForward, Heading::Left, Heading::Down)]
    #[case(Tile::MirrorForward, Heading::Up, Heading::Right)]
    #[case(Tile::MirrorForward, Heading::Down, Heading::Left)]
    #[case(Tile::MirrorBackward, Heading::Right, Heading::Down)]
    #[case(Tile::MirrorBackward, Heading::Left, Heading::Up)]
    #[case(Tile::MirrorBackward, Heading::Up, Heading::Left)]
    #[case(Tile::MirrorBackward, Heading::Down, Heading::Right)]
    fn mirrors_reflect(#[case] tile: Tile, #[case] heading: Heading, #[case] expected: Heading) {
        assert_eq!(tile.deflect(heading), Deflection::Pass(expected));
    }

    #[rstest]
    #[case(Tile::SplitterHorizontal, Heading::Up)]
    #[case(Tile::SplitterHorizontal, Heading::Down)]
    #[case(Tile::SplitterVertical, Heading::Left)]
    #[case(Tile::SplitterVertical, Heading::Right)]
    fn splitters_split_flat_side_hits(#[case] tile: Tile, #[case] heading: Heading) {
        let Deflection::Split(a, b) = tile.deflect(heading) else {
            panic!("{tile:?} should split a beam heading {heading:?}");
        };
        assert_eq!(a.opposite(), b);
        assert_ne!(a.is_horizontal(), heading.is_horizontal());
    }

    #[rstest]
    #[case(Tile::Empty, Heading::Up)]
    #[case(Tile::Empty, Heading::Left)]
    #[case(Tile::SplitterHorizontal, Heading::Left)]
    #[case(Tile::SplitterHorizontal, Heading::Right)]
    #[case(Tile::SplitterVertical, Heading::Up)]
    #[case(Tile::SplitterVertical, Heading::Down)]
    fn pointy_ends_pass_through(#[case] tile: Tile, #[case] heading: Heading) {
        assert_eq!(tile.deflect(heading), Deflection::Pass(heading));
    }

    #[rstest]
    #[case('.', Ok(Tile::Empty))]
    #[case('/', Ok(Tile::MirrorForward))]
    #[case('\\', Ok(Tile::MirrorBackward))]
    #[case('-', Ok(Tile::SplitterHorizontal))]
    #[case('|', Ok(Tile::SplitterVertical))]
    #[case('#', Err('#'))]
    fn symbols_map_to_tiles(#[case] c: char, #[case] expected: Result<Tile, char>) {
        assert_eq!(Tile::try_from(c), expected);
    }
}
