use glam::IVec2;

/// One of the four directions of travel on a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Right,
    Left,
    Up,
    Down,
}

const DELTAS: [IVec2; 4] = [
    IVec2::new(1, 0),
    IVec2::new(-1, 0),
    IVec2::new(0, -1),
    IVec2::new(0, 1),
];

const OPPOSITES: [Heading; 4] = [Heading::Left, Heading::Right, Heading::Down, Heading::Up];

const ARROWS: [char; 4] = ['>', '<', '^', 'v'];

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::Right, Heading::Left, Heading::Up, Heading::Down];

    /// Dense index in `0..4`, usable as a table offset.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline(always)]
    pub const fn delta(self) -> IVec2 {
        DELTAS[self.index()]
    }

    #[inline(always)]
    pub const fn opposite(self) -> Heading {
        OPPOSITES[self.index()]
    }

    /// The neighbouring position one step along this heading.
    #[inline(always)]
    pub fn step(self, pos: IVec2) -> IVec2 {
        pos + self.delta()
    }

    pub const fn is_horizontal(self) -> bool {
        matches!(self, Heading::Right | Heading::Left)
    }

    pub const fn arrow(self) -> char {
        ARROWS[self.index()]
    }

    /// Heading of a single orthogonal step from `from` to `to`.
    pub fn between(from: IVec2, to: IVec2) -> Option<Heading> {
        let delta = to - from;
        Heading::ALL.into_iter().find(|h| h.delta() == delta)
    }
}
