use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_PANEL_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of one mounted modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PanelId(u64);

impl PanelId {
    /// Allocate a fresh id. Ids are never handed out twice within a process.
    pub fn next() -> Self {
        Self(NEXT_PANEL_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Wrap an id minted by some other allocator.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "modal-{}", self.0)
    }
}
