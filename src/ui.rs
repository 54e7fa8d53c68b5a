//! `UiFrame`: drawing surface for modals that clips every write to the
//! visible area.
//!
//! A modal's geometry is allowed to exceed the terminal when the terminal is
//! smaller than the minimum modal size, so renderers never write to the
//! buffer directly.
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

pub struct UiFrame<'a> {
    area: Rect,
    buffer: &'a mut Buffer,
}

impl<'a> UiFrame<'a> {
    pub fn new(frame: &'a mut Frame<'_>) -> Self {
        let area = frame.area();
        let buffer = frame.buffer_mut();
        Self { area, buffer }
    }

    /// Draw straight into a buffer, e.g. for offscreen rendering in tests.
    pub fn from_parts(area: Rect, buffer: &'a mut Buffer) -> Self {
        Self { area, buffer }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    fn clip_rect(&self, rect: Rect) -> Option<Rect> {
        let clipped = rect.intersection(self.area);
        if clipped.width == 0 || clipped.height == 0 {
            None
        } else {
            Some(clipped)
        }
    }

    pub fn render_widget<W>(&mut self, widget: W, area: Rect)
    where
        W: Widget,
    {
        if let Some(clipped) = self.clip_rect(area) {
            widget.render(clipped, self.buffer);
        }
    }

    /// Set a single cell, ignoring positions outside the visible area.
    pub fn set_symbol(&mut self, x: u16, y: u16, symbol: &str) {
        let inside = self.clip_rect(Rect {
            x,
            y,
            width: 1,
            height: 1,
        });
        if inside.is_some()
            && let Some(cell) = self.buffer.cell_mut((x, y))
        {
            cell.set_symbol(symbol);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Clear;

    #[test]
    fn writes_outside_area_are_dropped() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 4,
            height: 2,
        };
        let mut buffer = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buffer);
        frame.set_symbol(3, 1, "#");
        frame.set_symbol(4, 1, "#");
        frame.set_symbol(0, 9, "#");
        frame.render_widget(
            Clear,
            Rect {
                x: 10,
                y: 10,
                width: 5,
                height: 5,
            },
        );
        assert_eq!(buffer.cell((3, 1)).map(|c| c.symbol()), Some("#"));
        assert_eq!(buffer.cell((0, 0)).map(|c| c.symbol()), Some(" "));
    }
}
