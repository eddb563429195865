//! Recording display driver
//!
//! Keeps every drawing call in memory, together with the colour, font and
//! background state in force at the time, so tests can assert exactly what
//! reached the panel.

use heapless::{String, Vec};

use crate::backend::{Background, DisplayDriver, DisplayError, Font};
use crate::color::Rgb;
use crate::text::truncated;

/// Maximum recorded operations before new ones are dropped
pub const MAX_OPS: usize = 1024;

/// Maximum recorded text length per print
pub const MAX_TEXT: usize = 40;

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Rgb,
    },
    DrawRect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Rgb,
    },
    FillCircle {
        cx: i32,
        cy: i32,
        r: u32,
        color: Rgb,
    },
    DrawCircle {
        cx: i32,
        cy: i32,
        r: u32,
        color: Rgb,
    },
    Print {
        text: String<MAX_TEXT>,
        x: i32,
        y: i32,
        color: Rgb,
        background: Background,
        font: Font,
    },
}

/// In-memory display driver
pub struct RecordingDisplay {
    width: u16,
    height: u16,
    color: Rgb,
    background: Background,
    font: Font,
    ops: Vec<DrawOp, MAX_OPS>,
    dropped: usize,
}

impl RecordingDisplay {
    /// Create a recorder reporting the given logical size
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            color: Rgb::default(),
            background: Background::default(),
            font: Font::default(),
            ops: Vec::new(),
            dropped: 0,
        }
    }

    /// Change the reported size (e.g. after a rotation)
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// All operations recorded since creation or the last [`Self::clear_ops`]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Forget recorded operations
    pub fn clear_ops(&mut self) {
        self.ops.clear();
        self.dropped = 0;
    }

    /// Operations that did not fit into the buffer
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Text of every recorded print, in order
    pub fn prints(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Print { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// First print whose text equals `text`
    pub fn find_print(&self, text: &str) -> Option<&DrawOp> {
        self.ops
            .iter()
            .find(|op| matches!(op, DrawOp::Print { text: t, .. } if t.as_str() == text))
    }

    fn record(&mut self, op: DrawOp) {
        if self.ops.push(op).is_err() {
            self.dropped += 1;
        }
    }
}

impl DisplayDriver for RecordingDisplay {
    fn dimensions(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    fn set_background(&mut self, background: Background) {
        self.background = background;
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32) -> Result<(), DisplayError> {
        let color = self.color;
        self.record(DrawOp::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
        Ok(())
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: u32, height: u32) -> Result<(), DisplayError> {
        let color = self.color;
        self.record(DrawOp::DrawRect {
            x,
            y,
            width,
            height,
            color,
        });
        Ok(())
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, r: u32) -> Result<(), DisplayError> {
        let color = self.color;
        self.record(DrawOp::FillCircle { cx, cy, r, color });
        Ok(())
    }

    fn draw_circle(&mut self, cx: i32, cy: i32, r: u32) -> Result<(), DisplayError> {
        let color = self.color;
        self.record(DrawOp::DrawCircle { cx, cy, r, color });
        Ok(())
    }

    fn print(&mut self, text: &str, x: i32, y: i32) -> Result<(), DisplayError> {
        let recorded = truncated(text);
        let (color, background, font) = (self.color, self.background, self.font);
        self.record(DrawOp::Print {
            text: recorded,
            x,
            y,
            color,
            background,
            font,
        });
        Ok(())
    }
}
