//! Application-side owner of every open modal.
//!
//! `ModalHost` holds the stacking context all its modals share, feeds them
//! viewport changes, and routes mouse input:
//!
//! - a press goes to the topmost visible modal under the pointer; on its
//!   resize grip it starts a resize, on its header a move, anywhere else
//!   inside it the press is swallowed so modals below never see it,
//! - while a gesture is active every move and release goes to the modal that
//!   owns it, wherever the pointer is,
//! - with a [`Backdrop::Mask`] backdrop, presses that miss every modal are
//!   swallowed while any modal is visible,
//! - losing terminal focus cancels the gesture.
//!
//! Modals are drawn bottom to top in stacking order.

use std::collections::BTreeMap;

use crossterm::event::{Event, MouseButton, MouseEventKind};
use ratatui::Frame;

use crate::config::ModalConfig;
use crate::drag::Pointer;
use crate::geometry::{PanelGeometry, rect_contains};
use crate::identity::PanelId;
use crate::modal::DraggableModal;
use crate::render::{Backdrop, FramedOverlay, OverlayContent, OverlayRenderer};
use crate::stacking::StackingContext;
use crate::ui::UiFrame;
use crate::viewport::ViewportObserver;

#[derive(Debug)]
struct ModalEntry {
    modal: DraggableModal,
    title: String,
    body: String,
}

#[derive(Debug)]
pub struct ModalHost<O: OverlayRenderer = FramedOverlay> {
    stacking: StackingContext,
    viewport: ViewportObserver,
    modals: BTreeMap<PanelId, ModalEntry>,
    renderer: O,
    backdrop: Backdrop,
    gesture_owner: Option<PanelId>,
}

impl Default for ModalHost<FramedOverlay> {
    fn default() -> Self {
        Self::new(FramedOverlay::default())
    }
}

impl<O: OverlayRenderer> ModalHost<O> {
    pub fn new(renderer: O) -> Self {
        Self {
            stacking: StackingContext::new(),
            viewport: ViewportObserver::new(),
            modals: BTreeMap::new(),
            renderer,
            backdrop: Backdrop::default(),
            gesture_owner: None,
        }
    }

    pub fn with_viewport(mut self, viewport: ViewportObserver) -> Self {
        self.viewport = viewport;
        let current = viewport.current();
        for entry in self.modals.values_mut() {
            entry.modal.set_viewport(current);
        }
        self
    }

    pub fn with_backdrop(mut self, backdrop: Backdrop) -> Self {
        self.backdrop = backdrop;
        self
    }

    pub fn stacking(&self) -> &StackingContext {
        &self.stacking
    }

    pub fn len(&self) -> usize {
        self.modals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modals.is_empty()
    }

    /// Mount a modal without showing it.
    pub fn mount(&mut self, config: ModalConfig, title: impl Into<String>) -> PanelId {
        let mut modal = DraggableModal::new(&self.stacking, config);
        modal.set_viewport(self.viewport.current());
        let id = modal.id();
        self.modals.insert(
            id,
            ModalEntry {
                modal,
                title: title.into(),
                body: String::new(),
            },
        );
        id
    }

    /// Mount a modal and show it on top.
    pub fn open(&mut self, config: ModalConfig, title: impl Into<String>) -> PanelId {
        let id = self.mount(config, title);
        self.set_visible(id, true);
        id
    }

    /// Unmount a modal. Returns `false` for unknown ids.
    pub fn close(&mut self, id: PanelId) -> bool {
        if self.gesture_owner == Some(id) {
            self.gesture_owner = None;
        }
        self.modals.remove(&id).is_some()
    }

    /// Returns whether the modal was promoted (hidden -> visible).
    pub fn set_visible(&mut self, id: PanelId, visible: bool) -> bool {
        let Some(entry) = self.modals.get_mut(&id) else {
            return false;
        };
        if !visible && self.gesture_owner == Some(id) {
            entry.modal.cancel_gesture();
            self.gesture_owner = None;
        }
        entry.modal.set_visible(visible)
    }

    pub fn toggle_visible(&mut self, id: PanelId) -> bool {
        let visible = self.modal(id).is_some_and(|m| m.visible());
        self.set_visible(id, !visible)
    }

    pub fn set_body(&mut self, id: PanelId, body: impl Into<String>) {
        if let Some(entry) = self.modals.get_mut(&id) {
            entry.body = body.into();
        }
    }

    pub fn set_geometry(&mut self, id: PanelId, geometry: PanelGeometry) {
        if let Some(entry) = self.modals.get_mut(&id) {
            entry.modal.set_geometry(geometry);
        }
    }

    pub fn modal(&self, id: PanelId) -> Option<&DraggableModal> {
        self.modals.get(&id).map(|entry| &entry.modal)
    }

    pub fn gesture_owner(&self) -> Option<PanelId> {
        self.gesture_owner
    }

    /// Mounted ids from bottom to top.
    pub fn draw_order(&self) -> Vec<PanelId> {
        self.stacking
            .draw_order()
            .into_iter()
            .filter(|id| self.modals.contains_key(id))
            .collect()
    }

    fn visible_top_down(&self) -> Vec<PanelId> {
        let mut ids: Vec<PanelId> = self
            .draw_order()
            .into_iter()
            .filter(|id| self.modal(*id).is_some_and(|m| m.visible()))
            .collect();
        ids.reverse();
        ids
    }

    /// Topmost visible modal.
    pub fn focused(&self) -> Option<PanelId> {
        self.visible_top_down().first().copied()
    }

    /// Route one input event. Returns `true` when a modal consumed it.
    ///
    /// Resize and focus events are observed but never consumed, so the
    /// application behind the modals still sees them.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        if let Some(viewport) = self.viewport.observe(event) {
            for entry in self.modals.values_mut() {
                entry.modal.set_viewport(viewport);
            }
            return false;
        }
        match event {
            Event::FocusLost => {
                self.cancel_gesture();
                false
            }
            Event::Mouse(mouse) => {
                let pointer = Pointer::from(mouse);
                match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        self.press(pointer, mouse.column, mouse.row)
                    }
                    MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                        let Some(id) = self.gesture_owner else {
                            return false;
                        };
                        self.modals
                            .get_mut(&id)
                            .is_some_and(|entry| entry.modal.on_pointer_move(pointer))
                    }
                    MouseEventKind::Up(_) => {
                        let Some(id) = self.gesture_owner.take() else {
                            return false;
                        };
                        if let Some(entry) = self.modals.get_mut(&id) {
                            entry.modal.on_pointer_up();
                        }
                        true
                    }
                    _ => false,
                }
            }
            _ => false,
        }
    }

    fn press(&mut self, pointer: Pointer, column: u16, row: u16) -> bool {
        // A press while a gesture is still open means its release was lost.
        self.cancel_gesture();
        let visible = self.visible_top_down();
        let masked = self.backdrop == Backdrop::Mask && !visible.is_empty();
        for id in visible {
            let Some(entry) = self.modals.get_mut(&id) else {
                continue;
            };
            let chrome = self.renderer.chrome(entry.modal.geometry());
            if rect_contains(chrome.resize_handle, column, row) {
                entry.modal.on_resize_pointer_down(pointer);
                self.gesture_owner = Some(id);
                return true;
            }
            if rect_contains(chrome.header, column, row) {
                entry.modal.on_drag_pointer_down(pointer);
                self.gesture_owner = Some(id);
                return true;
            }
            if rect_contains(chrome.outer, column, row) {
                return true;
            }
        }
        masked
    }

    pub fn cancel_gesture(&mut self) -> bool {
        let Some(id) = self.gesture_owner.take() else {
            return false;
        };
        self.modals
            .get_mut(&id)
            .is_some_and(|entry| entry.modal.cancel_gesture())
    }

    pub fn render(&self, frame: &mut Frame) {
        let mut ui = UiFrame::new(frame);
        self.render_into(&mut ui);
    }

    pub fn render_into(&self, frame: &mut UiFrame<'_>) {
        let focused = self.focused();
        for id in self.draw_order() {
            let Some(entry) = self.modals.get(&id) else {
                continue;
            };
            let is_focused = focused == Some(id);
            self.renderer.render(
                frame,
                &entry.modal.style(),
                OverlayContent {
                    title: &entry.title,
                    body: &entry.body,
                    visible: entry.modal.visible(),
                    focused: is_focused,
                    backdrop: if is_focused {
                        self.backdrop
                    } else {
                        Backdrop::ClickThrough
                    },
                },
            );
        }
    }
}
