use gridsnake_engine::{DrawCommand, SURFACE_HEIGHT, SURFACE_WIDTH, Scene, ScreenRect};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Clear, Widget},
};

use crate::view::labels::{LabelImages, terminal_color};

/// Surface units covered by one terminal column.
const UNITS_PER_COLUMN: f32 = 25.0;
/// Surface units covered by one terminal row.
const UNITS_PER_ROW: f32 = 50.0;

/// Rasterizes a [`Scene`] onto terminal cells.
///
/// Filled rectangles become background color, stroked rectangles become a
/// `[` `]` pair on their outer columns, and labels are centered on the middle
/// row of their destination.
///
/// One board cell is two columns wide and one row tall.
#[derive(Debug)]
pub struct SceneDisplay<'a> {
    scene: &'a Scene,
    labels: &'a LabelImages,
}

impl<'a> SceneDisplay<'a> {
    pub fn new(scene: &'a Scene, labels: &'a LabelImages) -> Self {
        Self { scene, labels }
    }

    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn width() -> u16 {
        (SURFACE_WIDTH / UNITS_PER_COLUMN) as u16
    }

    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn height() -> u16 {
        (SURFACE_HEIGHT / UNITS_PER_ROW) as u16
    }
}

impl Widget for SceneDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &SceneDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(Rect::new(
            area.x,
            area.y,
            SceneDisplay::width(),
            SceneDisplay::height(),
        ));

        for command in self.scene.commands() {
            match command {
                DrawCommand::Clear(color) => {
                    Clear.render(area, buf);
                    buf.set_style(area, Style::new().bg(terminal_color(*color)));
                }
                DrawCommand::FillRects { rects, color } => {
                    let color = terminal_color(*color);
                    for rect in rects {
                        for pos in to_cells(*rect, area).positions() {
                            buf[pos].set_symbol(" ").set_bg(color);
                        }
                    }
                }
                DrawCommand::StrokeRects { rects, color } => {
                    let color = terminal_color(*color);
                    for rect in rects {
                        let cells = to_cells(*rect, area);
                        if cells.is_empty() {
                            continue;
                        }
                        for y in cells.top()..cells.bottom() {
                            buf[(cells.left(), y)].set_symbol("[").set_fg(color);
                            buf[(cells.right() - 1, y)].set_symbol("]").set_fg(color);
                        }
                    }
                }
                DrawCommand::Label(label) => {
                    let dest = to_cells(label.dest(), area);
                    if dest.is_empty() {
                        continue;
                    }
                    // Text may be wider than its destination; keep it centered on it
                    let line = self.labels.get(*label);
                    let text_width = u16::try_from(line.width()).unwrap_or(u16::MAX);
                    let center = dest.x + dest.width / 2;
                    let row = Rect::new(
                        center.saturating_sub(text_width / 2),
                        dest.y + dest.height / 2,
                        text_width,
                        1,
                    )
                    .intersection(area);
                    line.render(row, buf);
                }
            }
        }
    }
}

/// Terminal cells covered by `rect`, clipped to `area`.
///
/// Every non-empty rectangle covers at least one row, so short labels stay
/// visible.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_cells(rect: ScreenRect, area: Rect) -> Rect {
    let x = (rect.x / UNITS_PER_COLUMN).floor() as u16;
    let y = (rect.y / UNITS_PER_ROW).floor() as u16;
    let width = (rect.w / UNITS_PER_COLUMN).round() as u16;
    let height = ((rect.h / UNITS_PER_ROW).round() as u16).max(1);
    Rect::new(
        area.x.saturating_add(x),
        area.y.saturating_add(y),
        width,
        height,
    )
    .intersection(area)
}

#[cfg(test)]
mod tests {
    use gridsnake_engine::{
        APPLE_COLOR, BACKGROUND_COLOR, CellIndex, Direction, GRID_HEIGHT, GRID_WIDTH, GameSeed,
        GameState, Label, SNAKE_COLOR, STEP_INTERVAL_NANOS, WON_TEXT_COLOR,
    };
    use ratatui::style::Color;

    use super::*;

    fn render(scene: &Scene) -> Buffer {
        let labels = LabelImages::render();
        let area = Rect::new(0, 0, SceneDisplay::width(), SceneDisplay::height());
        let mut buf = Buffer::empty(area);
        SceneDisplay::new(scene, &labels).render(area, &mut buf);
        buf
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    /// Left column of the two terminal columns showing `cell`.
    fn column_of(cell: CellIndex) -> u16 {
        u16::try_from(cell.x() * 2).unwrap()
    }

    fn row_of(cell: CellIndex) -> u16 {
        u16::try_from(cell.y()).unwrap()
    }

    #[test]
    fn test_surface_size_in_cells() {
        assert_eq!(SceneDisplay::width(), 32);
        assert_eq!(SceneDisplay::height(), 12);
    }

    #[test]
    fn test_board_rasterization() {
        let game = GameState::with_seed(GameSeed::from_bytes([3; 16]));
        let buf = render(&Scene::capture(&game));

        let apple = game.apple().unwrap();
        let head = game.snake().head().unwrap();

        let (x, y) = (column_of(apple), row_of(apple));
        assert_eq!(buf[(x, y)].bg, terminal_color(APPLE_COLOR));
        assert_eq!(buf[(x, y)].symbol(), "[");
        assert_eq!(buf[(x + 1, y)].symbol(), "]");

        // Snake is filled after the outlines, so it hides them
        let (x, y) = (column_of(head), row_of(head));
        assert_eq!(buf[(x, y)].bg, terminal_color(SNAKE_COLOR));
        assert_eq!(buf[(x, y)].symbol(), " ");
        assert_eq!(buf[(x + 1, y)].symbol(), " ");

        let empty = CellIndex::all()
            .find(|&c| c != apple && c != head)
            .unwrap();
        let (x, y) = (column_of(empty), row_of(empty));
        assert_eq!(buf[(x, y)].bg, terminal_color(BACKGROUND_COLOR));
        assert_eq!(buf[(x, y)].fg, Color::Rgb(255, 255, 255));
    }

    #[test]
    fn test_every_cell_has_an_outline() {
        let game = GameState::with_seed(GameSeed::from_bytes([3; 16]));
        let head = game.snake().head().unwrap();
        let buf = render(&Scene::capture(&game));

        for y in 0..SceneDisplay::height() {
            if y == row_of(head) {
                continue;
            }
            assert_eq!(row_text(&buf, y), "[]".repeat(16), "row {y}");
        }
    }

    #[test]
    fn test_lost_screen_labels() {
        let mut game = GameState::with_seed(GameSeed::from_bytes([3; 16]));
        game.set_direction(Direction::Left);
        let mut tick = 0;
        while !game.status().is_lost() {
            tick += STEP_INTERVAL_NANOS;
            game.update(tick);
        }

        let buf = render(&Scene::capture(&game));

        // Lost label sits at y 275..325, the hint at 325..340
        assert_eq!(row_text(&buf, 5).trim(), Label::Lost.text());
        assert_eq!(row_text(&buf, 6).trim(), Label::Restart.text());
        assert!(row_text(&buf, 0).trim().is_empty());

        let start = row_text(&buf, 5).find('Y').unwrap();
        let x = u16::try_from(start).unwrap();
        assert_eq!(buf[(x, 5)].fg, terminal_color(Label::Lost.color()));
        assert_eq!(buf[(x, 5)].bg, terminal_color(BACKGROUND_COLOR));
    }

    /// Steers along a closed path through every cell until the board is full.
    fn play_to_win(game: &mut GameState) {
        let mut tick = 0;
        while !game.status().is_won() {
            let head = game.snake().head().unwrap();
            let (x, y) = (head.x(), head.y());
            let direction = if x == 0 && y == 0 {
                Direction::Right
            } else if x == 0 {
                Direction::Up
            } else if y % 2 == 0 && x + 1 < GRID_WIDTH {
                Direction::Right
            } else if y % 2 == 0 {
                Direction::Down
            } else if x == 1 && y + 1 < GRID_HEIGHT {
                Direction::Down
            } else {
                Direction::Left
            };
            game.set_direction(direction);
            tick += STEP_INTERVAL_NANOS;
            game.update(tick);
            assert!(!game.status().is_lost(), "snake died at tick {tick}");
        }
    }

    #[test]
    fn test_won_screen_labels() {
        let mut game = GameState::with_seed(GameSeed::from_bytes([4; 16]));
        play_to_win(&mut game);

        let buf = render(&Scene::capture(&game));

        assert_eq!(row_text(&buf, 5).trim(), Label::Won.text());
        assert_eq!(row_text(&buf, 6).trim(), Label::Restart.text());
        assert!(row_text(&buf, 0).trim().is_empty());

        let x = u16::try_from(row_text(&buf, 5).find('Y').unwrap()).unwrap();
        assert_eq!(buf[(x, 5)].fg, terminal_color(WON_TEXT_COLOR));
        assert_eq!(buf[(x, 5)].bg, terminal_color(BACKGROUND_COLOR));
    }

    #[test]
    fn test_small_area_is_clipped() {
        let game = GameState::with_seed(GameSeed::from_bytes([3; 16]));
        let scene = Scene::capture(&game);
        let labels = LabelImages::render();

        let area = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(area);
        SceneDisplay::new(&scene, &labels).render(area, &mut buf);

        assert_eq!(row_text(&buf, 0).len(), 10);
    }
}
