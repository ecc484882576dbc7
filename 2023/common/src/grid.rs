use glam::IVec2;

use crate::error::GridError;

/// A dense, immutable 2D grid stored row-major.
///
/// Positions use `x` to the right and `y` downwards, so the origin is the
/// top-left cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    pub fn new(width: usize, height: usize, cells: Vec<T>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }
        if width.checked_mul(height) != Some(cells.len()) {
            return Err(GridError::CellCount {
                width,
                height,
                found: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Builds a grid from parsed rows, rejecting empty and ragged input.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(GridError::Empty);
        }

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(GridError::Ragged {
                row,
                expected: width,
                found,
            });
        }

        let height = rows.len();
        let cells = rows.into_iter().flatten().collect();
        Self::new(width, height, cells)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Flat index of `pos`, or `None` when it lies outside the grid.
    #[inline(always)]
    pub fn index_of(&self, pos: IVec2) -> Option<usize> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        if x >= self.width || y >= self.height {
            None
        } else {
            Some(y * self.width + x)
        }
    }

    /// Inverse of [`Grid::index_of`]. `index` must be below [`Grid::len`].
    #[inline(always)]
    pub fn position_of(&self, index: usize) -> IVec2 {
        IVec2::new((index % self.width) as i32, (index / self.width) as i32)
    }

    #[inline(always)]
    pub fn contains(&self, pos: IVec2) -> bool {
        self.index_of(pos).is_some()
    }

    #[inline(always)]
    pub fn get(&self, pos: IVec2) -> Option<&T> {
        self.index_of(pos).map(|idx| &self.cells[idx])
    }

    pub fn top_left(&self) -> IVec2 {
        IVec2::ZERO
    }

    pub fn bottom_right(&self) -> IVec2 {
        IVec2::new(self.width as i32 - 1, self.height as i32 - 1)
    }

    /// Cells in row-major order; indices match [`Grid::index_of`].
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks_exact(self.width)
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = IVec2> + '_ {
        (0..self.cells.len()).map(|idx| self.position_of(idx))
    }
}
