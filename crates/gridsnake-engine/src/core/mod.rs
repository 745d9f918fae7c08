pub use self::{direction::*, grid::*, snake::*};

pub(crate) mod direction;
pub(crate) mod grid;
pub(crate) mod snake;
