use std::io;

use crossterm::event::Event;

use crate::geometry::Viewport;

/// Tracks the terminal size from resize events.
///
/// Starts out [`Viewport::UNKNOWN`] unless seeded, so modals skip clamping
/// until the first measurement arrives.
#[derive(Debug, Default, Clone, Copy)]
pub struct ViewportObserver {
    current: Viewport,
}

impl ViewportObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        Self {
            current: Viewport::from((width, height)),
        }
    }

    /// Seed from the live terminal.
    pub fn from_terminal() -> io::Result<Self> {
        let (width, height) = crossterm::terminal::size()?;
        Ok(Self::with_size(width, height))
    }

    pub fn current(&self) -> Viewport {
        self.current
    }

    /// Feed an input event. Returns the new viewport if it changed.
    pub fn observe(&mut self, event: &Event) -> Option<Viewport> {
        let &Event::Resize(width, height) = event else {
            return None;
        };
        let next = Viewport::from((width, height));
        if next == self.current {
            return None;
        }
        tracing::debug!(width, height, "viewport resized");
        self.current = next;
        Some(next)
    }
}
