//! Mapping from game state to backend-independent draw commands.
//!
//! [`Scene::capture`] turns a [`GameState`](crate::GameState) into an ordered
//! list of [`DrawCommand`]s on an 800×600-unit logical surface. Drawing them
//! onto real pixels or terminal cells is left to the frontend.

pub use self::{palette::*, scene::*};

mod palette;
mod scene;
