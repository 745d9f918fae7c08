use crate::core::Direction;

/// What the player asked for, independent of which key produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Intent {
    /// Request a new heading.
    Steer(Direction),
    /// Start a new round. Only honored while the snake is at rest.
    Restart,
}
