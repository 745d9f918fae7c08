/// An 8-bit-per-channel color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

pub const BACKGROUND_COLOR: Rgba = Rgba::opaque(0, 0, 0);
pub const APPLE_COLOR: Rgba = Rgba::opaque(255, 0, 0);
pub const SNAKE_COLOR: Rgba = Rgba::opaque(0, 100, 16);
pub const GRID_COLOR: Rgba = Rgba::opaque(255, 255, 255);
pub const LOST_TEXT_COLOR: Rgba = Rgba::opaque(255, 0, 0);
pub const WON_TEXT_COLOR: Rgba = Rgba::opaque(0, 255, 0);
pub const RESTART_TEXT_COLOR: Rgba = Rgba::opaque(255, 0, 0);
