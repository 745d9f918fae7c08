pub use self::{core::*, engine::*, render::*};

pub mod core;
pub mod engine;
pub mod render;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    #[display("invalid seed: expected 32 hex digits, got {len} characters")]
    Length { len: usize },
    #[display("invalid seed: {digit:?} is not a hex digit")]
    Digit { digit: char },
}
