//! Per-instance modal behavior.
//!
//! [`DraggableModal`] wires one modal's geometry to a pair of drag trackers
//! (move and resize), the viewport clamp, and the shared stacking order:
//!
//! - constructing it registers the modal; dropping it unregisters it,
//! - opening it (`visible` false -> true) brings it to the front,
//! - pressing on either handle brings it to the front before the gesture
//!   starts,
//! - every geometry change is reconciled against the viewport before the
//!   call returns.

use crate::config::ModalConfig;
use crate::drag::{DragTracker, Pointer};
use crate::geometry::{PanelGeometry, Viewport};
use crate::identity::PanelId;
use crate::reconcile::{InteractionMode, reconcile};
use crate::stacking::{Ordinal, StackingContext};

/// Everything an overlay renderer needs to place a modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalStyle {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
    /// `None` once the modal is no longer in the stacking registry.
    pub z_index: Option<Ordinal>,
}

impl ModalStyle {
    pub const fn geometry(&self) -> PanelGeometry {
        PanelGeometry::new(self.left, self.top, self.width, self.height)
    }
}

#[derive(Debug)]
pub struct DraggableModal {
    id: PanelId,
    stacking: StackingContext,
    config: ModalConfig,
    geometry: PanelGeometry,
    viewport: Viewport,
    mover: DragTracker,
    resizer: DragTracker,
    visible: bool,
}

impl DraggableModal {
    /// Mount a hidden modal with a freshly allocated id.
    pub fn new(stacking: &StackingContext, config: ModalConfig) -> Self {
        Self::with_id(PanelId::next(), stacking, config)
    }

    pub fn with_id(id: PanelId, stacking: &StackingContext, config: ModalConfig) -> Self {
        stacking.register_modal(id);
        Self {
            id,
            stacking: stacking.clone(),
            config,
            geometry: config.initial(),
            viewport: Viewport::UNKNOWN,
            mover: DragTracker::new(),
            resizer: DragTracker::new(),
            visible: false,
        }
    }

    pub fn id(&self) -> PanelId {
        self.id
    }

    pub fn geometry(&self) -> PanelGeometry {
        self.geometry
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn mode(&self) -> InteractionMode {
        InteractionMode::from_flags(self.mover.is_active(), self.resizer.is_active())
    }

    pub fn is_dragging(&self) -> bool {
        self.mover.is_active()
    }

    pub fn is_resizing(&self) -> bool {
        self.resizer.is_active()
    }

    pub fn has_active_gesture(&self) -> bool {
        self.mover.is_active() || self.resizer.is_active()
    }

    pub fn z_index(&self) -> Option<Ordinal> {
        self.stacking.ordinal(self.id)
    }

    pub fn style(&self) -> ModalStyle {
        ModalStyle {
            left: self.geometry.left,
            top: self.geometry.top,
            width: self.geometry.width,
            height: self.geometry.height,
            z_index: self.z_index(),
        }
    }

    pub fn bring_to_front(&self) -> Option<Ordinal> {
        self.stacking.bring_to_front(self.id)
    }

    /// Update the caller-owned visibility flag.
    ///
    /// Only the hidden-to-visible transition promotes; setting `true` again
    /// while already visible leaves the stacking order alone. Returns whether
    /// the modal was promoted.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        let was_visible = self.visible;
        self.visible = visible;
        if visible && !was_visible {
            tracing::debug!(id = %self.id, "modal opened");
            return self.bring_to_front().is_some();
        }
        false
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.reconcile();
    }

    /// Replace the geometry programmatically. The result is still clamped.
    pub fn set_geometry(&mut self, geometry: PanelGeometry) {
        self.geometry = geometry;
        self.reconcile();
    }

    /// Press on the drag handle (title bar).
    pub fn on_drag_pointer_down(&mut self, pointer: Pointer) {
        self.bring_to_front();
        self.resizer.cancel();
        self.mover.pointer_down(pointer, self.geometry.position());
        self.reconcile();
    }

    /// Press on the resize handle.
    pub fn on_resize_pointer_down(&mut self, pointer: Pointer) {
        self.bring_to_front();
        self.mover.cancel();
        self.resizer.pointer_down(pointer, self.geometry.size());
        self.reconcile();
    }

    /// Pointer moved anywhere on the surface. Returns `true` if a gesture
    /// consumed it.
    pub fn on_pointer_move(&mut self, pointer: Pointer) -> bool {
        if let Some(position) = self.mover.pointer_move(pointer) {
            self.geometry.set_position(position);
        } else if let Some(size) = self.resizer.pointer_move(pointer) {
            self.geometry.set_size(size);
        } else {
            return false;
        }
        self.reconcile();
        true
    }

    /// Pointer released anywhere on the surface.
    pub fn on_pointer_up(&mut self) -> bool {
        let moved = self.mover.pointer_up();
        let resized = self.resizer.pointer_up();
        if moved || resized {
            self.reconcile();
        }
        moved || resized
    }

    /// Abandon the active gesture, keeping the geometry reached so far.
    pub fn cancel_gesture(&mut self) -> bool {
        let moved = self.mover.cancel();
        let resized = self.resizer.cancel();
        if moved || resized {
            self.reconcile();
        }
        moved || resized
    }

    fn reconcile(&mut self) {
        let next = reconcile(
            self.geometry,
            self.viewport,
            self.mode(),
            self.config.min_size(),
        );
        if next != self.geometry {
            tracing::trace!(id = %self.id, from = ?self.geometry, to = ?next, "clamped geometry");
            self.geometry = next;
        }
    }
}

impl Drop for DraggableModal {
    fn drop(&mut self) {
        self.stacking.unregister_modal(self.id);
    }
}
