//! Game rules and simulation state.
//!
//! - [`GameState`] - Board, snake and direction with their transition rules
//! - [`StepClock`] - Fixed 100 ms step gate on an external nanosecond clock
//! - [`RandomSource`] - Injectable placement randomness, seeded by [`GameSeed`]
//! - [`Intent`] - Player requests (steer, restart) decoupled from key codes
//!
//! # Game Flow
//!
//! 1. [`GameState::new`] places an apple and a one-cell snake at rest
//! 2. A steer intent gives the snake a direction
//! 3. [`GameState::update`] moves it one cell per elapsed step interval
//! 4. Hitting a wall or the body empties the snake (lost); filling the board wins
//! 5. A restart intent starts over once the snake is at rest again

pub use self::{game_state::*, intent::*, random::*, step_clock::*};

mod game_state;
mod intent;
mod random;
mod step_clock;
