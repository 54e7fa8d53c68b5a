//! Stacking order shared by every modal.
//!
//! Each registered modal holds an ordinal drawn from one monotonically
//! increasing counter. Registering or promoting a modal consumes a fresh
//! value, so ordinals never tie and the most recently touched modal is always
//! on top. The counter is never rewound, even when modals go away.
//!
//! [`StackingContext`] is the handle modals receive; all writes go through
//! its three operations.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::identity::PanelId;

pub type Ordinal = u64;

#[derive(Debug, Default, Clone)]
pub struct StackingOrder {
    ordinals: BTreeMap<PanelId, Ordinal>,
    counter: Ordinal,
    revision: u64,
}

impl StackingOrder {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_ordinal(&mut self) -> Ordinal {
        self.counter = self.counter.saturating_add(1);
        self.counter
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Add `id` on top of the stack.
    ///
    /// Registering an id that is already present just gives it a fresh
    /// ordinal.
    pub fn register_modal(&mut self, id: PanelId) -> Ordinal {
        let ordinal = self.next_ordinal();
        if self.ordinals.insert(id, ordinal).is_some() {
            tracing::debug!(%id, ordinal, "modal registered twice; reassigned ordinal");
        } else {
            tracing::debug!(%id, ordinal, "registered modal");
        }
        self.touch();
        ordinal
    }

    pub fn unregister_modal(&mut self, id: PanelId) {
        if self.ordinals.remove(&id).is_some() {
            tracing::debug!(%id, "unregistered modal");
            self.touch();
        }
    }

    /// Move `id` above every other modal. Unknown ids are ignored.
    pub fn bring_to_front(&mut self, id: PanelId) -> Option<Ordinal> {
        if !self.ordinals.contains_key(&id) {
            tracing::trace!(%id, "bring_to_front ignored for unregistered modal");
            return None;
        }
        let ordinal = self.next_ordinal();
        self.ordinals.insert(id, ordinal);
        tracing::debug!(%id, ordinal, "brought modal to front");
        self.touch();
        Some(ordinal)
    }

    pub fn state(&self) -> &BTreeMap<PanelId, Ordinal> {
        &self.ordinals
    }

    pub fn ordinal(&self, id: PanelId) -> Option<Ordinal> {
        self.ordinals.get(&id).copied()
    }

    pub fn contains(&self, id: PanelId) -> bool {
        self.ordinals.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.ordinals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordinals.is_empty()
    }

    pub fn topmost(&self) -> Option<PanelId> {
        self.ordinals
            .iter()
            .max_by_key(|(_, ordinal)| **ordinal)
            .map(|(id, _)| *id)
    }

    /// Registered ids from bottom to top.
    pub fn draw_order(&self) -> Vec<PanelId> {
        let mut ids: Vec<(PanelId, Ordinal)> =
            self.ordinals.iter().map(|(id, o)| (*id, *o)).collect();
        ids.sort_by_key(|(_, ordinal)| *ordinal);
        ids.into_iter().map(|(id, _)| id).collect()
    }

    /// Bumped on every mutation, so observers can tell when to re-read.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// Shared handle to one [`StackingOrder`].
///
/// Cloning the handle shares the registry. Modals live on the UI thread, so
/// this is `Rc<RefCell<..>>`. Every method borrows only for its own duration
/// and readers get owned snapshots, so a caller can hold a read while modals
/// promote, register or drop.
#[derive(Debug, Default, Clone)]
pub struct StackingContext {
    inner: Rc<RefCell<StackingOrder>>,
}

impl StackingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_modal(&self, id: PanelId) -> Ordinal {
        self.inner.borrow_mut().register_modal(id)
    }

    /// Also runs from `Drop`, so it must never panic: a busy registry
    /// leaves the entry behind and logs instead.
    pub fn unregister_modal(&self, id: PanelId) {
        match self.inner.try_borrow_mut() {
            Ok(mut order) => order.unregister_modal(id),
            Err(_) => tracing::warn!(%id, "stacking registry busy; modal left registered"),
        }
    }

    pub fn bring_to_front(&self, id: PanelId) -> Option<Ordinal> {
        self.inner.borrow_mut().bring_to_front(id)
    }

    /// Snapshot of the whole registry. Later changes do not show up in it.
    pub fn state(&self) -> StackingOrder {
        self.inner.borrow().clone()
    }

    pub fn ordinal(&self, id: PanelId) -> Option<Ordinal> {
        self.inner.borrow().ordinal(id)
    }

    pub fn draw_order(&self) -> Vec<PanelId> {
        self.inner.borrow().draw_order()
    }

    pub fn topmost(&self) -> Option<PanelId> {
        self.inner.borrow().topmost()
    }

    pub fn revision(&self) -> u64 {
        self.inner.borrow().revision()
    }

    pub fn shares_registry_with(&self, other: &StackingContext) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
