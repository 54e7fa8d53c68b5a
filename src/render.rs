//! Overlay rendering.
//!
//! The modal core does not draw anything itself. An [`OverlayRenderer`]
//! takes a [`ModalStyle`] payload and paints the modal, and tells the host
//! where its interactive chrome (drag header, resize handle) ends up so
//! pointer presses can be routed back to the core.

use ratatui::prelude::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::geometry::PanelGeometry;
use crate::modal::ModalStyle;
use crate::ui::UiFrame;

pub const RESIZE_GRIP: &str = "◢";

/// Screen regions of one drawn modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalChrome {
    pub outer: Rect,
    pub header: Rect,
    pub resize_handle: Rect,
    pub content: Rect,
}

/// How the area around an open modal treats the pointer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    /// Presses that miss every modal reach the application underneath.
    #[default]
    ClickThrough,
    /// The topmost modal dims everything below it and swallows stray presses.
    Mask,
}

/// What gets drawn for a modal.
#[derive(Debug, Clone, Copy)]
pub struct OverlayContent<'a> {
    pub title: &'a str,
    pub body: &'a str,
    /// Hidden modals stay mounted but draw nothing.
    pub visible: bool,
    /// Topmost modals get the highlighted frame.
    pub focused: bool,
    pub backdrop: Backdrop,
}

pub trait OverlayRenderer: std::fmt::Debug {
    fn chrome(&self, geometry: PanelGeometry) -> ModalChrome;
    fn render(&self, frame: &mut UiFrame<'_>, style: &ModalStyle, content: OverlayContent<'_>);
}

/// Bordered box with the title on the top border, which doubles as the drag
/// handle, and a grip glyph in the bottom-right corner for resizing.
#[derive(Debug, Clone)]
pub struct FramedOverlay {
    focused_border: Style,
    border: Style,
    body: Style,
    mask: Style,
}

impl Default for FramedOverlay {
    fn default() -> Self {
        Self {
            focused_border: Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::DarkGray),
            body: Style::default().bg(Color::Black),
            mask: Style::default().add_modifier(Modifier::DIM),
        }
    }
}

impl FramedOverlay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OverlayRenderer for FramedOverlay {
    fn chrome(&self, geometry: PanelGeometry) -> ModalChrome {
        let outer = geometry.to_rect();
        if outer.width == 0 || outer.height == 0 {
            return ModalChrome {
                outer,
                header: Rect::default(),
                resize_handle: Rect::default(),
                content: Rect::default(),
            };
        }
        let right = outer.x.saturating_add(outer.width.saturating_sub(1));
        let bottom = outer.y.saturating_add(outer.height.saturating_sub(1));
        // The grip cell wins over the header when the modal is one row tall.
        let header_width = if outer.height == 1 {
            outer.width.saturating_sub(1)
        } else {
            outer.width
        };
        ModalChrome {
            outer,
            header: Rect {
                x: outer.x,
                y: outer.y,
                width: header_width,
                height: 1,
            },
            resize_handle: Rect {
                x: right,
                y: bottom,
                width: 1,
                height: 1,
            },
            content: Rect {
                x: outer.x.saturating_add(1),
                y: outer.y.saturating_add(1),
                width: outer.width.saturating_sub(2),
                height: outer.height.saturating_sub(2),
            },
        }
    }

    fn render(&self, frame: &mut UiFrame<'_>, style: &ModalStyle, content: OverlayContent<'_>) {
        if !content.visible {
            return;
        }
        if content.backdrop == Backdrop::Mask {
            let area = frame.area();
            frame.render_widget(Block::default().style(self.mask), area);
        }
        let chrome = self.chrome(style.geometry());
        if chrome.outer.width == 0 || chrome.outer.height == 0 {
            return;
        }
        let border = if content.focused {
            self.focused_border
        } else {
            self.border
        };
        frame.render_widget(Clear, chrome.outer);
        frame.render_widget(
            Block::default()
                .title(content.title)
                .borders(Borders::ALL)
                .border_style(border)
                .style(self.body),
            chrome.outer,
        );
        frame.render_widget(
            Paragraph::new(content.body)
                .style(self.body)
                .wrap(Wrap { trim: true }),
            chrome.content,
        );
        frame.set_symbol(chrome.resize_handle.x, chrome.resize_handle.y, RESIZE_GRIP);
    }
}
