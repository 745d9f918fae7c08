/// Direction the snake is heading.
///
/// [`Direction::None`] is the resting state: before the first steer of a
/// round, and again once the round ended (lost or won). The simulation does
/// not move while the direction is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::IsVariant)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
    #[default]
    None,
}

impl Direction {
    /// The four directions the snake can actually move in.
    pub const MOVES: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// Returns the reverse direction. `None` is its own opposite.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::None => Self::None,
        }
    }

    /// Returns true if turning from `self` to `other` would be a 180-degree turn.
    #[must_use]
    pub fn is_opposite(self, other: Self) -> bool {
        !self.is_none() && self.opposite() == other
    }

    /// Unit step `(dx, dy)` in grid coordinates, `y` growing downwards.
    #[must_use]
    pub const fn delta(self) -> Option<(isize, isize)> {
        match self {
            Self::Left => Some((-1, 0)),
            Self::Right => Some((1, 0)),
            Self::Up => Some((0, -1)),
            Self::Down => Some((0, 1)),
            Self::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Up));
    }

    #[test]
    fn test_none_has_no_opposite() {
        for dir in Direction::MOVES {
            assert!(!Direction::None.is_opposite(dir));
        }
        assert!(!Direction::None.is_opposite(Direction::None));
        assert_eq!(Direction::None.opposite(), Direction::None);
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Left.delta(), Some((-1, 0)));
        assert_eq!(Direction::Right.delta(), Some((1, 0)));
        assert_eq!(Direction::Up.delta(), Some((0, -1)));
        assert_eq!(Direction::Down.delta(), Some((0, 1)));
        assert_eq!(Direction::None.delta(), None);
    }
}
