//! Input drivers.
//!
//! Everything the modals react to arrives as a crossterm [`Event`]. The
//! console driver reads the real terminal; the scripted driver replays a
//! fixed list, which lets tests run the full event loop headless.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture, Event};

pub trait InputDriver {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<Event>;
    fn set_mouse_capture(&mut self, _enabled: bool) -> io::Result<()> {
        Ok(())
    }
}

impl<T: InputDriver + ?Sized> InputDriver for &mut T {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        (**self).poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        (**self).read()
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        (**self).set_mouse_capture(enabled)
    }
}

#[derive(Debug, Default)]
pub struct ConsoleInputDriver;

impl ConsoleInputDriver {
    pub fn new() -> Self {
        Self
    }
}

impl InputDriver for ConsoleInputDriver {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        crossterm::event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        crossterm::event::read()
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        if enabled {
            crossterm::execute!(io::stdout(), EnableMouseCapture)
        } else {
            crossterm::execute!(io::stdout(), DisableMouseCapture)
        }
    }
}

/// Replays a fixed sequence of events, then reports nothing pending.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    events: VecDeque<Event>,
    mouse_capture: bool,
}

impl ScriptedInput {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
            mouse_capture: false,
        }
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }

    pub fn mouse_capture(&self) -> bool {
        self.mouse_capture
    }
}

impl InputDriver for ScriptedInput {
    fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> io::Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        self.mouse_capture = enabled;
        Ok(())
    }
}
