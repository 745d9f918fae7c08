use gridsnake_engine::{FontSize, Label, Rgba};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Line,
};

/// Converts a surface color into a terminal color.
#[must_use]
pub fn terminal_color(color: Rgba) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Label text styled once at startup and reused on every frame.
///
/// Large labels are bold; small ones are plain.
#[derive(Debug, Clone)]
pub struct LabelImages {
    lines: [Line<'static>; Label::ALL.len()],
}

impl Default for LabelImages {
    fn default() -> Self {
        Self::render()
    }
}

impl LabelImages {
    #[must_use]
    pub fn render() -> Self {
        Self {
            lines: Label::ALL.map(|label| {
                let mut style = Style::new().fg(terminal_color(label.color()));
                if label.font() == FontSize::Large {
                    style = style.add_modifier(Modifier::BOLD);
                }
                Line::styled(label.text(), style).centered()
            }),
        }
    }

    #[must_use]
    pub fn get(&self, label: Label) -> &Line<'static> {
        match label {
            Label::Lost => &self.lines[0],
            Label::Won => &self.lines[1],
            Label::Restart => &self.lines[2],
        }
    }
}
