use std::{io, mem, thread, time::Instant};

use crossterm::event::Event;

use crate::{
    App,
    clock::{MonotonicClock, TickSource},
    event::PendingEvents,
    pacer::FramePacer,
};

/// TUI application runtime.
///
/// Drives applications that implement the `App` trait, one frame at a time.
#[derive(Default, Debug)]
pub struct Runtime {
    pacer: FramePacer,
    clock: MonotonicClock,
    redraw_requested: bool,
}

impl Runtime {
    /// Creates a new Runtime.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the target frame rate (FPS).
    pub fn set_frame_rate(&mut self, fps: f64) {
        self.pacer = FramePacer::from_rate(fps);
        tracing::debug!(fps, frame_time = ?self.pacer.min_frame_time(), "frame rate set");
    }

    #[must_use]
    pub fn frame_pacer(&self) -> FramePacer {
        self.pacer
    }

    /// Asks for `App::draw` to be called at the end of the current frame.
    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Runs the application.
    ///
    /// 1. Calls `app.init()` for initialization
    /// 2. Repeats until `app.should_exit()` returns true:
    ///    - drains pending terminal events into `app.handle_event()`
    ///    - reads the tick and calls `app.update()`
    ///    - calls `app.draw()` if a redraw was requested
    ///    - sleeps for the rest of the frame budget
    pub fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        ratatui::run(|terminal| {
            let clock = self.clock;
            while !app.should_exit() {
                let frame_start = Instant::now();

                if self.dispatch_frame(app, PendingEvents::new(), &clock)? {
                    terminal.draw(|f| app.draw(f))?;
                }

                let elapsed = frame_start.elapsed();
                match self.pacer.remaining(elapsed) {
                    Some(rest) => thread::sleep(rest),
                    None => tracing::trace!(?elapsed, "frame over budget"),
                }
            }
            Ok(())
        })
    }

    /// Runs the input and update half of one frame.
    ///
    /// Returns whether the frame should be drawn. Stops feeding events as
    /// soon as the app wants to exit, and skips the update in that case.
    pub(crate) fn dispatch_frame<A, E, T>(
        &mut self,
        app: &mut A,
        events: E,
        ticks: &T,
    ) -> io::Result<bool>
    where
        A: App,
        E: IntoIterator<Item = io::Result<Event>>,
        T: TickSource,
    {
        for event in events {
            app.handle_event(self, event?);
            if app.should_exit() {
                return Ok(false);
            }
        }

        let tick = ticks.now_ns();
        app.update(self, tick);
        Ok(mem::take(&mut self.redraw_requested))
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::Frame;

    use super::*;

    /// Tracks app calls for testing
    #[derive(Debug, Clone, Default)]
    struct CallLog {
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl CallLog {
        fn log(&self, msg: impl Into<String>) {
            self.calls.borrow_mut().push(msg.into());
        }

        fn get_calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    struct FixedTick(u64);

    impl TickSource for FixedTick {
        fn now_ns(&self) -> u64 {
            self.0
        }
    }

    /// Test app that logs calls, redraws on every even tick and exits on `q`
    #[derive(Debug, Default)]
    struct TestApp {
        log: CallLog,
        exit: bool,
    }

    impl App for TestApp {
        fn init(&mut self, runtime: &mut Runtime) {
            self.log.log("init");
            runtime.request_redraw();
        }

        fn should_exit(&self) -> bool {
            self.exit
        }

        fn handle_event(&mut self, _runtime: &mut Runtime, event: Event) {
            if let Event::Key(KeyEvent {
                code: KeyCode::Char(c),
                ..
            }) = event
            {
                self.log.log(format!("key {c}"));
                self.exit |= c == 'q';
            }
        }

        fn update(&mut self, runtime: &mut Runtime, tick: u64) {
            self.log.log(format!("update {tick}"));
            if tick % 2 == 0 {
                runtime.request_redraw();
            }
        }

        fn draw(&self, _frame: &mut Frame) {
            // dispatch_frame never draws
        }
    }

    fn no_events() -> [io::Result<Event>; 0] {
        []
    }

    fn key(c: char) -> io::Result<Event> {
        Ok(Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)))
    }

    #[test]
    fn test_events_come_before_update() {
        let mut app = TestApp::default();
        let mut runtime = Runtime::new();

        let redraw = runtime
            .dispatch_frame(&mut app, [key('a'), key('b')], &FixedTick(7))
            .unwrap();

        assert!(!redraw);
        assert_eq!(app.log.get_calls(), vec!["key a", "key b", "update 7"]);
    }

    #[test]
    fn test_redraw_request_is_consumed() {
        let mut app = TestApp::default();
        let mut runtime = Runtime::new();

        assert!(runtime.dispatch_frame(&mut app, no_events(), &FixedTick(2)).unwrap());
        assert!(!runtime.dispatch_frame(&mut app, no_events(), &FixedTick(3)).unwrap());
        assert!(runtime.dispatch_frame(&mut app, no_events(), &FixedTick(4)).unwrap());
    }

    #[test]
    fn test_init_redraw_carries_into_first_frame() {
        let mut app = TestApp::default();
        let mut runtime = Runtime::new();

        app.init(&mut runtime);
        assert!(runtime.dispatch_frame(&mut app, no_events(), &FixedTick(1)).unwrap());
    }

    #[test]
    fn test_exit_stops_the_frame() {
        let mut app = TestApp::default();
        let mut runtime = Runtime::new();

        let redraw = runtime
            .dispatch_frame(&mut app, [key('q'), key('x')], &FixedTick(2))
            .unwrap();

        assert!(!redraw);
        assert!(app.should_exit());
        assert_eq!(app.log.get_calls(), vec!["key q"]);
    }

    #[test]
    fn test_event_error_is_propagated() {
        let mut app = TestApp::default();
        let mut runtime = Runtime::new();

        let events = [key('a'), Err(io::Error::other("broken pipe"))];
        let err = runtime
            .dispatch_frame(&mut app, events, &FixedTick(0))
            .unwrap_err();

        assert_eq!(err.to_string(), "broken pipe");
        assert_eq!(app.log.get_calls(), vec!["key a"]);
    }

    #[test]
    fn test_set_frame_rate() {
        let mut runtime = Runtime::new();
        assert_eq!(runtime.frame_pacer(), FramePacer::default());

        runtime.set_frame_rate(0.0);
        assert_eq!(
            runtime.frame_pacer().min_frame_time(),
            FramePacer::FALLBACK_FRAME_TIME
        );
    }
}
