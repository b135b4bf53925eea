//! `embedded-graphics` canvas
//!
//! Draws onto any monochrome `DrawTarget`, e.g. an SH1106/SSD1306 frame
//! buffer. Text uses mono fonts; the icon slots need fonts whose glyph
//! mapping covers the codepoints in [`crate::icons`], otherwise the font's
//! replacement glyph is drawn.

use embedded_graphics::mono_font::ascii::{FONT_5X8, FONT_6X10, FONT_6X13};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::renderer::TextRenderer;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder};

use crate::backend::{Canvas, DisplayError, Font, TextAlign, TextMeasurer};

/// Mono fonts for each font slot
#[derive(Clone, Copy)]
pub struct FontSet {
    pub body: &'static MonoFont<'static>,
    pub caption: &'static MonoFont<'static>,
    pub icon16: &'static MonoFont<'static>,
    pub icon18: &'static MonoFont<'static>,
    pub icon20: &'static MonoFont<'static>,
    pub icon21: &'static MonoFont<'static>,
}

impl Default for FontSet {
    fn default() -> Self {
        Self {
            body: &FONT_6X13,
            caption: &FONT_5X8,
            icon16: &FONT_6X10,
            icon18: &FONT_6X10,
            icon20: &FONT_6X13,
            icon21: &FONT_6X13,
        }
    }
}

impl FontSet {
    pub fn get(&self, font: Font) -> &'static MonoFont<'static> {
        match font {
            Font::Body => self.body,
            Font::Caption => self.caption,
            Font::Icon16 => self.icon16,
            Font::Icon18 => self.icon18,
            Font::Icon20 => self.icon20,
            Font::Icon21 => self.icon21,
        }
    }

    fn style(&self, font: Font) -> MonoTextStyle<'static, BinaryColor> {
        MonoTextStyle::new(self.get(font), BinaryColor::On)
    }
}

fn text_style(align: TextAlign) -> TextStyle {
    match align {
        TextAlign::TopLeft => TextStyleBuilder::new()
            .alignment(Alignment::Left)
            .baseline(Baseline::Top)
            .build(),
        TextAlign::Center => TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build(),
    }
}

fn size(width: i32, height: i32) -> Size {
    Size::new(width.max(0) as u32, height.max(0) as u32)
}

/// Canvas over an `embedded-graphics` draw target
pub struct EgCanvas<'d, D> {
    target: &'d mut D,
    fonts: FontSet,
}

impl<'d, D> EgCanvas<'d, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    /// Wrap a target with the default fonts
    pub fn new(target: &'d mut D) -> Self {
        Self::with_fonts(target, FontSet::default())
    }

    pub fn with_fonts(target: &'d mut D, fonts: FontSet) -> Self {
        Self { target, fonts }
    }

    /// Release the target
    pub fn into_inner(self) -> &'d mut D {
        self.target
    }
}

impl<D> TextMeasurer for EgCanvas<'_, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    fn measure(&self, font: Font, text: &str) -> i32 {
        self.fonts
            .style(font)
            .measure_string(text, Point::zero(), Baseline::Top)
            .bounding_box
            .size
            .width as i32
    }
}

impl<D> Canvas for EgCanvas<'_, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.target
            .clear(BinaryColor::Off)
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_text(
        &mut self,
        x: i32,
        y: i32,
        font: Font,
        align: TextAlign,
        text: &str,
    ) -> Result<(), DisplayError> {
        Text::with_text_style(text, Point::new(x, y), self.fonts.style(font), text_style(align))
            .draw(&mut *self.target)
            .map(|_| ())
            .map_err(|_| DisplayError::Communication)
    }

    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<(), DisplayError> {
        Line::new(Point::new(x0, y0), Point::new(x1, y1))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut *self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn rect(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<(), DisplayError> {
        Rectangle::new(Point::new(x, y), size(width, height))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut *self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn filled_rect(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<(), DisplayError> {
        Rectangle::new(Point::new(x, y), size(width, height))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut *self.target)
            .map_err(|_| DisplayError::Communication)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    fn display() -> MockDisplay<BinaryColor> {
        let mut display = MockDisplay::new();
        display.set_allow_out_of_bounds_drawing(true);
        display.set_allow_overdraw(true);
        display
    }

    #[test]
    fn test_measure_mono_width() {
        let mut target = display();
        let canvas = EgCanvas::new(&mut target);
        assert_eq!(canvas.measure(Font::Body, "abc"), 18);
        assert_eq!(canvas.measure(Font::Caption, "abc"), 15);
        assert_eq!(canvas.measure(Font::Body, ""), 0);
    }

    #[test]
    fn test_filled_rect() {
        let mut target = display();
        let mut canvas = EgCanvas::new(&mut target);
        canvas.filled_rect(1, 1, 3, 2).unwrap();

        let target = canvas.into_inner();
        assert_eq!(target.get_pixel(Point::new(1, 1)), Some(BinaryColor::On));
        assert_eq!(target.get_pixel(Point::new(3, 2)), Some(BinaryColor::On));
        assert_eq!(target.get_pixel(Point::new(4, 2)), None);
    }

    #[test]
    fn test_zero_width_fill_draws_nothing() {
        let mut target = display();
        let mut canvas = EgCanvas::new(&mut target);
        canvas.filled_rect(1, 1, 0, 6).unwrap();
        canvas.filled_rect(1, 1, -5, 6).unwrap();
        assert_eq!(canvas.into_inner().get_pixel(Point::new(1, 1)), None);
    }

    #[test]
    fn test_offscreen_text_is_clipped() {
        let mut target = display();
        let mut canvas = EgCanvas::new(&mut target);
        canvas
            .draw_text(-200, 10, Font::Body, TextAlign::Center, "scrolled away")
            .unwrap();
        assert_eq!(canvas.into_inner().affected_area().size, Size::zero());
    }
}
