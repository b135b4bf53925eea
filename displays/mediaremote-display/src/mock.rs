//! Recording canvas for tests

use crate::backend::{Canvas, DisplayError, Font, TextAlign, TextMeasurer};

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Clear,
    Text {
        x: i32,
        y: i32,
        font: Font,
        align: TextAlign,
        text: String,
    },
    Line(i32, i32, i32, i32),
    Rect(i32, i32, i32, i32),
    FilledRect(i32, i32, i32, i32),
    Flush,
}

/// Canvas that records every call
///
/// Text is measured as `char_width` pixels per char unless an exact width
/// was registered with `with_width`.
pub struct MockCanvas {
    pub ops: Vec<Op>,
    char_width: i32,
    widths: Vec<(String, i32)>,
    fail_text: bool,
}

impl MockCanvas {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            char_width: 6,
            widths: Vec::new(),
            fail_text: false,
        }
    }

    /// Register an exact width for a text
    pub fn with_width(mut self, text: &str, width: i32) -> Self {
        self.widths.push((text.to_string(), width));
        self
    }

    /// Make every text draw fail
    pub fn failing(mut self) -> Self {
        self.fail_text = true;
        self
    }

    /// Forget the calls recorded so far
    pub fn take(&mut self) -> Vec<Op> {
        std::mem::take(&mut self.ops)
    }

    /// All text draws of a given string as (x, y)
    pub fn texts(&self, wanted: &str) -> Vec<(i32, i32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { x, y, text, .. } if text == wanted => Some((*x, *y)),
                _ => None,
            })
            .collect()
    }

    /// Every drawn string in call order
    pub fn drawn_strings(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl TextMeasurer for MockCanvas {
    fn measure(&self, _font: Font, text: &str) -> i32 {
        self.widths
            .iter()
            .find(|(t, _)| t == text)
            .map(|(_, w)| *w)
            .unwrap_or(text.chars().count() as i32 * self.char_width)
    }
}

impl Canvas for MockCanvas {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.ops.push(Op::Clear);
        Ok(())
    }

    fn draw_text(
        &mut self,
        x: i32,
        y: i32,
        font: Font,
        align: TextAlign,
        text: &str,
    ) -> Result<(), DisplayError> {
        if self.fail_text {
            return Err(DisplayError::Communication);
        }
        self.ops.push(Op::Text {
            x,
            y,
            font,
            align,
            text: text.to_string(),
        });
        Ok(())
    }

    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<(), DisplayError> {
        self.ops.push(Op::Line(x0, y0, x1, y1));
        Ok(())
    }

    fn rect(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<(), DisplayError> {
        self.ops.push(Op::Rect(x, y, width, height));
        Ok(())
    }

    fn filled_rect(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<(), DisplayError> {
        self.ops.push(Op::FilledRect(x, y, width, height));
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.ops.push(Op::Flush);
        Ok(())
    }
}
