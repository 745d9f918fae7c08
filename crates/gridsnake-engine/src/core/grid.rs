use std::ops::Index;

use super::direction::Direction;

/// Number of columns on the board.
pub const GRID_WIDTH: usize = 16;
/// Number of rows on the board.
pub const GRID_HEIGHT: usize = 12;
/// Total number of cells on the board.
pub const CELL_COUNT: usize = GRID_WIDTH * GRID_HEIGHT;

/// Row-major linear index of the cell at `(x, y)`.
#[must_use]
pub const fn index(x: usize, y: usize) -> usize {
    y * GRID_WIDTH + x
}

/// `(x, y)` coordinates of a row-major linear index.
#[must_use]
pub const fn coords(index: usize) -> (usize, usize) {
    (index % GRID_WIDTH, index / GRID_WIDTH)
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::IsVariant)]
pub enum Tile {
    #[default]
    Empty,
    Snake,
    Apple,
}

/// Index of a cell that is known to lie on the board.
///
/// Values are always in `0..CELL_COUNT`, so indexing a [`Grid`] with a
/// `CellIndex` cannot go out of bounds.
///
/// # Example
///
/// ```
/// use gridsnake_engine::{CellIndex, Direction};
///
/// let cell = CellIndex::from_coords(15, 3).unwrap();
/// assert_eq!(cell.get(), 63);
/// assert_eq!(cell.neighbor(Direction::Left).map(CellIndex::get), Some(62));
/// assert_eq!(cell.neighbor(Direction::Right), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellIndex(u8);

const _: () = assert!(CELL_COUNT <= u8::MAX as usize + 1);

impl CellIndex {
    /// Returns `None` when `index` is not a board cell.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn new(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Returns `None` when `(x, y)` lies outside the board.
    #[must_use]
    pub const fn from_coords(x: usize, y: usize) -> Option<Self> {
        if x < GRID_WIDTH && y < GRID_HEIGHT {
            Self::new(index(x, y))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn x(self) -> usize {
        coords(self.get()).0
    }

    #[must_use]
    pub const fn y(self) -> usize {
        coords(self.get()).1
    }

    /// The orthogonal neighbor in `direction`.
    ///
    /// Returns `None` if the step would leave the board, or if `direction`
    /// is [`Direction::None`].
    #[must_use]
    pub fn neighbor(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta()?;
        let x = self.x().checked_add_signed(dx)?;
        let y = self.y().checked_add_signed(dy)?;
        Self::from_coords(x, y)
    }

    /// Returns true if `other` is exactly one orthogonal step away.
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        self.x().abs_diff(other.x()) + self.y().abs_diff(other.y()) == 1
    }

    /// All board cells in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..CELL_COUNT).filter_map(Self::new)
    }
}

/// The 16×12 tile board, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: [Tile; CELL_COUNT],
}

impl Default for Grid {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Index<CellIndex> for Grid {
    type Output = Tile;

    fn index(&self, cell: CellIndex) -> &Self::Output {
        &self.tiles[cell.get()]
    }
}

impl Grid {
    pub const EMPTY: Self = Self {
        tiles: [Tile::Empty; CELL_COUNT],
    };

    /// Resets every cell to [`Tile::Empty`].
    pub fn clear(&mut self) {
        self.tiles = [Tile::Empty; CELL_COUNT];
    }

    /// Bounds-checked lookup by raw linear index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Tile> {
        self.tiles.get(index).copied()
    }

    pub fn set(&mut self, cell: CellIndex, tile: Tile) {
        self.tiles[cell.get()] = tile;
    }

    /// Number of cells holding `tile`.
    #[must_use]
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|t| **t == tile).count()
    }

    /// Cells holding `tile`, in row-major order.
    pub fn cells_with(&self, tile: Tile) -> impl Iterator<Item = CellIndex> + '_ {
        self.iter()
            .filter(move |(_, t)| *t == tile)
            .map(|(cell, _)| cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, Tile)> + '_ {
        CellIndex::all().map(|cell| (cell, self[cell]))
    }

    #[must_use]
    pub fn has_empty_cell(&self) -> bool {
        self.tiles.iter().any(|t| t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(x: usize, y: usize) -> CellIndex {
        CellIndex::from_coords(x, y).unwrap()
    }

    #[test]
    fn test_index_and_coords_are_inverse() {
        for i in 0..CELL_COUNT {
            let (x, y) = coords(i);
            assert!(x < GRID_WIDTH && y < GRID_HEIGHT);
            assert_eq!(index(x, y), i);
        }
        assert_eq!(coords(50), (2, 3));
        assert_eq!(index(15, 11), 191);
    }

    #[test]
    fn test_cell_index_bounds() {
        assert!(CellIndex::new(0).is_some());
        assert!(CellIndex::new(191).is_some());
        assert!(CellIndex::new(192).is_none());
        assert!(CellIndex::from_coords(16, 0).is_none());
        assert!(CellIndex::from_coords(0, 12).is_none());
        assert_eq!(CellIndex::all().count(), CELL_COUNT);
    }

    #[test]
    fn test_neighbor_inside_board() {
        let c = cell(5, 5);
        assert_eq!(c.neighbor(Direction::Left), Some(cell(4, 5)));
        assert_eq!(c.neighbor(Direction::Right), Some(cell(6, 5)));
        assert_eq!(c.neighbor(Direction::Up), Some(cell(5, 4)));
        assert_eq!(c.neighbor(Direction::Down), Some(cell(5, 6)));
        assert_eq!(c.neighbor(Direction::None), None);
    }

    #[test]
    fn test_neighbor_off_board() {
        assert_eq!(cell(0, 4).neighbor(Direction::Left), None);
        assert_eq!(cell(15, 4).neighbor(Direction::Right), None);
        assert_eq!(cell(7, 0).neighbor(Direction::Up), None);
        assert_eq!(cell(7, 11).neighbor(Direction::Down), None);
    }

    #[test]
    fn test_right_edge_does_not_wrap_to_next_row() {
        // 15 + 1 would be index 16, which is (0, 1) in row-major order
        assert_eq!(CellIndex::new(15).unwrap().neighbor(Direction::Right), None);
    }

    #[test]
    fn test_adjacency() {
        assert!(cell(3, 3).is_adjacent(cell(3, 4)));
        assert!(cell(3, 3).is_adjacent(cell(2, 3)));
        assert!(!cell(3, 3).is_adjacent(cell(4, 4)));
        assert!(!cell(3, 3).is_adjacent(cell(3, 3)));
        assert!(!cell(15, 0).is_adjacent(cell(0, 1)));
    }

    #[test]
    fn test_grid_set_and_count() {
        let mut grid = Grid::EMPTY;
        assert_eq!(grid.count(Tile::Empty), CELL_COUNT);

        grid.set(cell(1, 1), Tile::Apple);
        grid.set(cell(2, 1), Tile::Snake);
        grid.set(cell(3, 1), Tile::Snake);

        assert_eq!(grid[cell(1, 1)], Tile::Apple);
        assert_eq!(grid.count(Tile::Snake), 2);
        assert_eq!(grid.count(Tile::Apple), 1);
        assert_eq!(
            grid.cells_with(Tile::Snake).collect::<Vec<_>>(),
            vec![cell(2, 1), cell(3, 1)]
        );

        grid.clear();
        assert_eq!(grid, Grid::EMPTY);
    }

    #[test]
    fn test_grid_raw_lookup_is_bounds_checked() {
        let grid = Grid::EMPTY;
        assert_eq!(grid.get(191), Some(Tile::Empty));
        assert_eq!(grid.get(192), None);
    }

    #[test]
    fn test_has_empty_cell() {
        let mut grid = Grid::EMPTY;
        for c in CellIndex::all() {
            grid.set(c, Tile::Snake);
        }
        assert!(!grid.has_empty_cell());
        grid.set(cell(0, 0), Tile::Empty);
        assert!(grid.has_empty_cell());
    }
}
