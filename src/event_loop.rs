//! Message pump that gives the modals first pick of every event.
//!
//! [`ModalLoop`] owns the input driver and the [`ModalHost`]. Events go to
//! the host first; only what no modal consumed reaches the application
//! handler, as [`Step::Unhandled`]. The handler is asked to draw
//! ([`Step::Draw`]) once per burst of input, never while idle.
//!
//! Gesture moves are coalesced: drag deltas are measured from where the
//! gesture started, so within a burst only the latest pointer position
//! matters and the intermediate ones are dropped.

use std::io;
use std::time::Duration;

use crossterm::event::{Event, MouseEventKind};

use crate::host::ModalHost;
use crate::input::InputDriver;
use crate::render::{FramedOverlay, OverlayRenderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Quit,
}

/// One call into the application handler.
#[derive(Debug, Clone, Copy)]
pub enum Step<'a> {
    /// Input arrived since the last frame.
    Draw,
    /// An event no modal consumed.
    Unhandled(&'a Event),
}

/// Counters for one [`ModalLoop::run`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoopStats {
    /// Events read from the driver.
    pub events: usize,
    /// Events a modal consumed.
    pub consumed: usize,
    /// Gesture moves dropped in favor of a later one.
    pub coalesced: usize,
    pub frames: usize,
}

pub struct ModalLoop<D, O: OverlayRenderer = FramedOverlay> {
    driver: D,
    host: ModalHost<O>,
    poll_interval: Duration,
    pending_move: Option<Event>,
    dirty: bool,
    stats: LoopStats,
}

fn is_pointer_move(event: &Event) -> bool {
    matches!(
        event,
        Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Drag(_) | MouseEventKind::Moved)
    )
}

impl<D: InputDriver, O: OverlayRenderer> ModalLoop<D, O> {
    pub fn new(driver: D, host: ModalHost<O>, poll_interval: Duration) -> Self {
        Self {
            driver,
            host,
            poll_interval,
            pending_move: None,
            dirty: true,
            stats: LoopStats::default(),
        }
    }

    pub fn driver(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn host(&self) -> &ModalHost<O> {
        &self.host
    }

    pub fn stats(&self) -> LoopStats {
        self.stats
    }

    pub fn into_parts(self) -> (D, ModalHost<O>) {
        (self.driver, self.host)
    }

    /// Pump until the handler returns [`ControlFlow::Quit`].
    pub fn run<F>(&mut self, mut handler: F) -> io::Result<LoopStats>
    where
        F: FnMut(&mut ModalHost<O>, Step<'_>) -> io::Result<ControlFlow>,
    {
        loop {
            if self.dirty {
                self.dirty = false;
                self.stats.frames += 1;
                if handler(&mut self.host, Step::Draw)? == ControlFlow::Quit {
                    break;
                }
            }

            if !self.driver.poll(self.poll_interval)? {
                continue;
            }
            loop {
                let event = self.driver.read()?;
                if self.dispatch(event, &mut handler)? == ControlFlow::Quit {
                    return Ok(self.stats);
                }
                if !self.driver.poll(Duration::ZERO)? {
                    break;
                }
            }
            if self.flush_move(&mut handler)? == ControlFlow::Quit {
                break;
            }
        }
        Ok(self.stats)
    }

    fn dispatch<F>(&mut self, event: Event, handler: &mut F) -> io::Result<ControlFlow>
    where
        F: FnMut(&mut ModalHost<O>, Step<'_>) -> io::Result<ControlFlow>,
    {
        self.stats.events += 1;
        self.dirty = true;
        if self.host.gesture_owner().is_some() && is_pointer_move(&event) {
            if self.pending_move.replace(event).is_some() {
                self.stats.coalesced += 1;
            }
            return Ok(ControlFlow::Continue);
        }
        // Anything else must see the gesture at its latest position.
        if self.flush_move(handler)? == ControlFlow::Quit {
            return Ok(ControlFlow::Quit);
        }
        self.deliver(&event, handler)
    }

    fn flush_move<F>(&mut self, handler: &mut F) -> io::Result<ControlFlow>
    where
        F: FnMut(&mut ModalHost<O>, Step<'_>) -> io::Result<ControlFlow>,
    {
        match self.pending_move.take() {
            Some(event) => self.deliver(&event, handler),
            None => Ok(ControlFlow::Continue),
        }
    }

    fn deliver<F>(&mut self, event: &Event, handler: &mut F) -> io::Result<ControlFlow>
    where
        F: FnMut(&mut ModalHost<O>, Step<'_>) -> io::Result<ControlFlow>,
    {
        if self.host.handle_event(event) {
            self.stats.consumed += 1;
            return Ok(ControlFlow::Continue);
        }
        handler(&mut self.host, Step::Unhandled(event))
    }
}
