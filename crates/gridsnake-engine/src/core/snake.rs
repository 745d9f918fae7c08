use std::collections::{HashSet, VecDeque};

use super::grid::{CELL_COUNT, CellIndex};

/// The snake body as an ordered sequence of cells.
///
/// The front of the sequence is the tail and the back is the head. An empty
/// snake means the round was lost; a snake covering all [`CELL_COUNT`] cells
/// means it was won.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<CellIndex>,
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

impl Snake {
    /// Creates an empty (dead) snake.
    #[must_use]
    pub fn new() -> Self {
        Self {
            body: VecDeque::with_capacity(CELL_COUNT),
        }
    }

    /// Creates a single-segment snake at `cell`.
    #[must_use]
    pub fn spawn(cell: CellIndex) -> Self {
        let mut this = Self::new();
        this.body.push_back(cell);
        this
    }

    #[must_use]
    pub fn head(&self) -> Option<CellIndex> {
        self.body.back().copied()
    }

    #[must_use]
    pub fn tail(&self) -> Option<CellIndex> {
        self.body.front().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns true when the snake covers the whole board.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.body.len() == CELL_COUNT
    }

    /// Body cells from tail to head.
    pub fn cells(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.body.iter().copied()
    }

    /// Returns true if no cell repeats and each pair of consecutive segments
    /// is orthogonally adjacent.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.body.len());
        self.body.iter().all(|cell| seen.insert(*cell))
            && self
                .body
                .iter()
                .zip(self.body.iter().skip(1))
                .all(|(a, b)| a.is_adjacent(*b))
    }

    pub(crate) fn push_head(&mut self, cell: CellIndex) {
        self.body.push_back(cell);
    }

    pub(crate) fn pop_tail(&mut self) -> Option<CellIndex> {
        self.body.pop_front()
    }

    pub(crate) fn clear(&mut self) {
        self.body.clear();
    }
}
