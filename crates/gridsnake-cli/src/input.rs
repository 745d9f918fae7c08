use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use gridsnake_engine::{Direction, Intent};

/// What a key press asks the play screen to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::From)]
pub enum KeyAction {
    Intent(Intent),
    Quit,
}

impl KeyAction {
    /// Maps a key press to an action.
    ///
    /// Arrow keys and WASD steer, `R` restarts, and `Q`, `Esc` or `Ctrl-C`
    /// quit. Letters are case-insensitive. Release and repeat events are
    /// ignored.
    pub fn from_key_event(key: &KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return matches!(key.code, KeyCode::Char('c' | 'C')).then_some(Self::Quit);
        }

        let action = match key.code {
            KeyCode::Left => steer(Direction::Left),
            KeyCode::Right => steer(Direction::Right),
            KeyCode::Up => steer(Direction::Up),
            KeyCode::Down => steer(Direction::Down),
            KeyCode::Esc => Self::Quit,
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'a' => steer(Direction::Left),
                'd' => steer(Direction::Right),
                'w' => steer(Direction::Up),
                's' => steer(Direction::Down),
                'r' => Intent::Restart.into(),
                'q' => Self::Quit,
                _ => return None,
            },
            _ => return None,
        };
        Some(action)
    }
}

fn steer(direction: Direction) -> KeyAction {
    Intent::Steer(direction).into()
}
