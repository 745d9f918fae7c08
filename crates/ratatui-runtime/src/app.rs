use crossterm::event::Event;
use ratatui::Frame;

use crate::Runtime;

/// Trait for TUI applications.
///
/// Applications executed by `Runtime::run()` must implement this trait.
pub trait App {
    /// Initializes the application.
    ///
    /// Called at the start of `Runtime::run()`. Use this to configure the frame rate
    /// and to request the first redraw.
    fn init(&mut self, runtime: &mut Runtime);

    /// Returns whether the application should exit.
    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, mouse, resize, etc.).
    fn handle_event(&mut self, runtime: &mut Runtime, event: Event);

    /// Advances the application once per frame.
    ///
    /// `tick` is the monotonic time in nanoseconds since the runtime started.
    /// Call [`Runtime::request_redraw`] when the screen needs to change.
    fn update(&mut self, runtime: &mut Runtime, tick: u64);

    /// Draws the screen (called only on frames that requested a redraw).
    fn draw(&self, frame: &mut Frame);
}
