use ratatui::prelude::Rect;

use crate::constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Position and size of one modal, relative to the viewport origin.
///
/// Origins are signed so a geometry can be represented while it is
/// (transiently) off-screen; reconciliation pulls it back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelGeometry {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl PanelGeometry {
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub const fn position(&self) -> (i32, i32) {
        (self.left, self.top)
    }

    pub const fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn set_position(&mut self, (left, top): (i32, i32)) {
        self.left = left;
        self.top = top;
    }

    pub fn set_size(&mut self, (width, height): (i32, i32)) {
        self.width = width;
        self.height = height;
    }

    pub const fn right(&self) -> i32 {
        self.left.saturating_add(self.width)
    }

    pub const fn bottom(&self) -> i32 {
        self.top.saturating_add(self.height)
    }

    /// Whether the geometry lies fully inside a `width` x `height` viewport.
    pub fn fits_within(&self, width: i32, height: i32) -> bool {
        self.left >= 0 && self.top >= 0 && self.right() <= width && self.bottom() <= height
    }

    /// Visible part of the geometry as a terminal rect.
    ///
    /// Anything left of or above the origin is cut off, and coordinates past
    /// `u16::MAX` saturate.
    pub fn to_rect(&self) -> Rect {
        let x0 = self.left.max(0);
        let y0 = self.top.max(0);
        let x1 = self.right().max(x0);
        let y1 = self.bottom().max(y0);
        let to_u16 = |v: i32| v.clamp(0, u16::MAX as i32) as u16;
        let x = to_u16(x0);
        let y = to_u16(y0);
        Rect {
            x,
            y,
            width: to_u16(x1).saturating_sub(x),
            height: to_u16(y1).saturating_sub(y),
        }
    }
}

impl Default for PanelGeometry {
    fn default() -> Self {
        Self::new(0, 0, DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

/// Last known viewport size. Either dimension is `None` until measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: Option<i32>,
    pub height: Option<i32>,
}

impl Viewport {
    pub const UNKNOWN: Viewport = Viewport {
        width: None,
        height: None,
    };

    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// Both dimensions, or `None` if either is still unmeasured.
    pub fn known(&self) -> Option<(i32, i32)> {
        Some((self.width?, self.height?))
    }
}

impl From<(u16, u16)> for Viewport {
    fn from((width, height): (u16, u16)) -> Self {
        Self::new(width as i32, height as i32)
    }
}

pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    if rect.width == 0 || rect.height == 0 {
        return false;
    }
    let max_x = rect.x.saturating_add(rect.width);
    let max_y = rect.y.saturating_add(rect.height);
    column >= rect.x && column < max_x && row >= rect.y && row < max_y
}
