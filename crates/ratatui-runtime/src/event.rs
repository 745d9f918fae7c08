use std::{io, iter::FusedIterator, time::Duration};

use crossterm::event::{self, Event};

/// Terminal events that are already queued, read without blocking.
///
/// The iterator ends at the first poll that finds nothing, so one frame
/// never waits on input. A fresh drain is started every frame.
#[derive(Debug, Default)]
pub(crate) struct PendingEvents {
    done: bool,
}

impl PendingEvents {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl Iterator for PendingEvents {
    type Item = io::Result<Event>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match event::poll(Duration::ZERO) {
            Ok(true) => Some(event::read()),
            Ok(false) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for PendingEvents {}
