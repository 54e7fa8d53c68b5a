//! Pointer-drag tracking.
//!
//! A [`DragTracker`] turns one press-move-release gesture into updates of a
//! pair of values. The same tracker type drives both moving a modal
//! (`left`, `top`) and resizing it (`width`, `height`).
//!
//! Every update is computed from the snapshot captured at press time
//! (`origin + (pointer - origin_pointer)`), never by summing per-event deltas,
//! so coalesced or skipped move events cannot make the values drift.

use crossterm::event::MouseEvent;

/// Pointer coordinates in viewport cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pointer {
    pub x: i32,
    pub y: i32,
}

impl Pointer {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<&MouseEvent> for Pointer {
    fn from(mouse: &MouseEvent) -> Self {
        Self::new(mouse.column as i32, mouse.row as i32)
    }
}

/// State captured at press time for one active gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub origin_pointer: Pointer,
    pub origin_values: (i32, i32),
}

impl DragSession {
    pub fn values_at(&self, pointer: Pointer) -> (i32, i32) {
        let dx = pointer.x.saturating_sub(self.origin_pointer.x);
        let dy = pointer.y.saturating_sub(self.origin_pointer.y);
        (
            self.origin_values.0.saturating_add(dx),
            self.origin_values.1.saturating_add(dy),
        )
    }
}

/// Tracks at most one gesture at a time.
///
/// The session is the gesture's only observation of the pointer: while it
/// exists the owner routes every move/release to this tracker, wherever the
/// pointer is. Dropping the session (release, cancel, or a new press) is what
/// detaches it, so there is nothing left behind to leak.
#[derive(Debug, Default, Clone)]
pub struct DragTracker {
    session: Option<DragSession>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Start a gesture at `pointer` with the tracked values currently at
    /// `values`. Any gesture already in progress is dropped first.
    pub fn pointer_down(&mut self, pointer: Pointer, values: (i32, i32)) {
        if let Some(prev) = self.session.take() {
            tracing::trace!(origin = ?prev.origin_pointer, "replaced active drag session");
        }
        tracing::trace!(?pointer, ?values, "drag session started");
        self.session = Some(DragSession {
            origin_pointer: pointer,
            origin_values: values,
        });
    }

    /// New tracked values for a pointer move, or `None` if no gesture is active.
    pub fn pointer_move(&self, pointer: Pointer) -> Option<(i32, i32)> {
        self.session.map(|session| session.values_at(pointer))
    }

    /// Finish the gesture. Returns `true` if one was active.
    pub fn pointer_up(&mut self) -> bool {
        let ended = self.session.take().is_some();
        if ended {
            tracing::trace!("drag session ended");
        }
        ended
    }

    /// Abandon the gesture without a release, e.g. after focus loss.
    pub fn cancel(&mut self) -> bool {
        let cancelled = self.session.take().is_some();
        if cancelled {
            tracing::debug!("drag session cancelled");
        }
        cancelled
    }
}
