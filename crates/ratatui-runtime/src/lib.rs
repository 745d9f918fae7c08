//! Minimal frame-paced runtime for `ratatui` applications.
//!
//! Each frame drains the pending terminal events, reads the monotonic tick,
//! updates the [`App`], redraws when the app asked for it and sleeps for
//! whatever is left of the frame budget.

pub use self::{
    app::App,
    clock::{MonotonicClock, TickSource},
    pacer::FramePacer,
    runtime::Runtime,
};

mod app;
mod clock;
mod event;
mod pacer;
mod runtime;
