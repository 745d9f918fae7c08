use crossterm::event::Event;
use gridsnake_engine::{GameState, Scene};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
};
use ratatui_runtime::{App, Runtime};

use crate::{
    input::KeyAction,
    view::{
        labels::LabelImages,
        widgets::{KeyBinding, KeyBindingDisplay, SceneDisplay},
    },
};

const KEY_BINDINGS: &[KeyBinding<'static>] =
    &[(&["WASD"], "Move"), (&["R"], "Restart"), (&["Q"], "Quit")];
const HELP_HEIGHT: u16 = 1;

#[derive(Debug)]
pub struct PlayApp {
    game: GameState,
    fps: f64,
    labels: LabelImages,
    is_exiting: bool,
}

impl PlayApp {
    pub fn new(game: GameState, fps: f64) -> Self {
        Self {
            game,
            fps,
            labels: LabelImages::render(),
            is_exiting: false,
        }
    }

    /// Smallest terminal `(width, height)` that shows the whole board and help.
    pub fn min_size() -> (u16, u16) {
        (
            SceneDisplay::width(),
            SceneDisplay::height() + HELP_HEIGHT,
        )
    }

    fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.is_exiting = true,
            KeyAction::Intent(intent) => {
                if self.game.apply(intent) {
                    tracing::debug!(?intent, "intent accepted");
                }
            }
        }
    }
}

impl App for PlayApp {
    fn init(&mut self, runtime: &mut Runtime) {
        runtime.set_frame_rate(self.fps);
        runtime.request_redraw();
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, runtime: &mut Runtime, event: Event) {
        match event {
            Event::Key(key) => {
                if let Some(action) = KeyAction::from_key_event(&key) {
                    self.handle_action(action);
                }
            }
            Event::Resize(..) => runtime.request_redraw(),
            _ => {}
        }
    }

    fn update(&mut self, runtime: &mut Runtime, tick: u64) {
        // Redraw only when the simulation actually stepped
        if self.game.update(tick).is_some() {
            runtime.request_redraw();
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let scene = Scene::capture(&self.game);

        let [area] = Layout::horizontal([Constraint::Length(SceneDisplay::width())])
            .flex(Flex::Center)
            .areas(frame.area());
        let [scene_area, help_area] = Layout::vertical([
            Constraint::Length(SceneDisplay::height()),
            Constraint::Length(HELP_HEIGHT),
        ])
        .areas(area);

        frame.render_widget(SceneDisplay::new(&scene, &self.labels), scene_area);
        frame.render_widget(KeyBindingDisplay::new(KEY_BINDINGS), help_area);
    }
}
