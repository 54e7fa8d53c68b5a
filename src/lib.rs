//! Draggable, resizable, stacked modal panels for terminal UIs.
//!
//! The core is framework independent:
//!
//! - [`drag::DragTracker`] turns a press-move-release gesture into value
//!   updates relative to where the gesture started,
//! - [`reconcile::reconcile`] keeps a modal inside the viewport and above its
//!   minimum size,
//! - [`stacking::StackingContext`] hands out a strictly increasing stacking
//!   ordinal to whichever modal was touched last,
//! - [`modal::DraggableModal`] wires the three together for one modal.
//!
//! [`host::ModalHost`] is a ready-made owner that routes crossterm events to
//! a set of modals and draws them with ratatui, and
//! [`event_loop::ModalLoop`] pumps terminal input through one.

pub mod clamp;
pub mod config;
pub mod constants;
pub mod drag;
pub mod event_loop;
pub mod geometry;
pub mod host;
pub mod identity;
pub mod input;
pub mod logging;
pub mod modal;
pub mod reconcile;
pub mod render;
pub mod stacking;
pub mod ui;
pub mod viewport;

pub use config::{ConfigError, ModalConfig};
pub use geometry::{PanelGeometry, Viewport};
pub use host::ModalHost;
pub use identity::PanelId;
pub use modal::{DraggableModal, ModalStyle};
pub use stacking::{Ordinal, StackingContext, StackingOrder};
