use arrayvec::ArrayVec;

use crate::{
    core::{CELL_COUNT, CellIndex, GRID_HEIGHT, GRID_WIDTH, Tile},
    engine::{GameState, GameStatus},
};

use super::palette::{
    APPLE_COLOR, BACKGROUND_COLOR, GRID_COLOR, LOST_TEXT_COLOR, RESTART_TEXT_COLOR, Rgba,
    SNAKE_COLOR, WON_TEXT_COLOR,
};

/// Edge length of one board cell in surface units.
pub const CELL_SIZE: f32 = 50.0;

/// Width of the logical drawing surface.
#[expect(clippy::cast_precision_loss)]
pub const SURFACE_WIDTH: f32 = GRID_WIDTH as f32 * CELL_SIZE;

/// Height of the logical drawing surface.
#[expect(clippy::cast_precision_loss)]
pub const SURFACE_HEIGHT: f32 = GRID_HEIGHT as f32 * CELL_SIZE;

/// Axis-aligned rectangle in surface units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl ScreenRect {
    #[must_use]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// The square covering `cell`.
    #[must_use]
    pub fn cell(cell: CellIndex) -> Self {
        let (x, y) = world_to_screen(cell);
        Self::new(x, y, CELL_SIZE, CELL_SIZE)
    }
}

/// Top-left corner of `cell` on the surface.
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn world_to_screen(cell: CellIndex) -> (f32, f32) {
    (cell.x() as f32 * CELL_SIZE, cell.y() as f32 * CELL_SIZE)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontSize {
    Large,
    Small,
}

/// Fixed text shown on the end-of-round screens.
///
/// Frontends pre-render each label once and place it at [`Label::dest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Lost,
    Won,
    Restart,
}

impl Label {
    pub const ALL: [Self; 3] = [Self::Lost, Self::Won, Self::Restart];

    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Lost => "You lost!",
            Self::Won => "You won!",
            Self::Restart => "Press R to restart",
        }
    }

    #[must_use]
    pub const fn color(self) -> Rgba {
        match self {
            Self::Lost => LOST_TEXT_COLOR,
            Self::Won => WON_TEXT_COLOR,
            Self::Restart => RESTART_TEXT_COLOR,
        }
    }

    #[must_use]
    pub const fn font(self) -> FontSize {
        match self {
            Self::Lost | Self::Won => FontSize::Large,
            Self::Restart => FontSize::Small,
        }
    }

    /// Where the label is drawn on the surface.
    #[must_use]
    pub const fn dest(self) -> ScreenRect {
        match self {
            Self::Lost | Self::Won => ScreenRect::new(300.0, 275.0, 200.0, 50.0),
            Self::Restart => ScreenRect::new(300.0, 325.0, 200.0, 15.0),
        }
    }
}

/// One rectangle per board cell at most.
pub type RectBatch = ArrayVec<ScreenRect, CELL_COUNT>;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface.
    Clear(Rgba),
    FillRects { rects: RectBatch, color: Rgba },
    /// Draw rectangle outlines only.
    StrokeRects { rects: RectBatch, color: Rgba },
    Label(Label),
}

/// Ordered draw commands for one frame.
///
/// # Example
///
/// ```
/// use gridsnake_engine::{DrawCommand, GameState, Scene};
///
/// let game = GameState::new();
/// let scene = Scene::capture(&game);
///
/// assert!(matches!(scene.commands()[0], DrawCommand::Clear(_)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    /// Captures the draw commands for `state`.
    ///
    /// A lost or won round shows its label and the restart hint. Otherwise
    /// the board is drawn as apples, then grid outlines, then the snake on
    /// top.
    #[must_use]
    pub fn capture<R>(state: &GameState<R>) -> Self {
        let mut commands = vec![DrawCommand::Clear(BACKGROUND_COLOR)];

        match state.status() {
            GameStatus::Lost => {
                commands.extend([
                    DrawCommand::Label(Label::Lost),
                    DrawCommand::Label(Label::Restart),
                ]);
            }
            GameStatus::Won => {
                commands.extend([
                    DrawCommand::Label(Label::Won),
                    DrawCommand::Label(Label::Restart),
                ]);
            }
            GameStatus::Ready | GameStatus::Running => {
                let grid = state.grid();
                commands.extend([
                    DrawCommand::FillRects {
                        rects: grid.cells_with(Tile::Apple).map(ScreenRect::cell).collect(),
                        color: APPLE_COLOR,
                    },
                    DrawCommand::StrokeRects {
                        rects: CellIndex::all().map(ScreenRect::cell).collect(),
                        color: GRID_COLOR,
                    },
                    DrawCommand::FillRects {
                        rects: state.snake().cells().map(ScreenRect::cell).collect(),
                        color: SNAKE_COLOR,
                    },
                ]);
            }
        }

        Self { commands }
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}
