//! Drawing backend traits
//!
//! Defines what the page code needs from a display: text measurement and a
//! handful of primitives. Coordinates are signed pixels and may lie off
//! screen; backends clip.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Formatted text did not fit its buffer
    BufferOverflow,
}

/// Font slots used by the pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// Main text (titles, selected playlist, statistics)
    Body,
    /// Smaller text for neighbouring playlists
    Caption,
    Icon16,
    Icon18,
    Icon20,
    Icon21,
}

/// Text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextAlign {
    /// Point is the top-left corner of the text
    TopLeft,
    /// Point is the horizontal and vertical center of the text
    Center,
}

/// Measures rendered text
pub trait TextMeasurer {
    /// Width of `text` in pixels when drawn in `font`
    fn measure(&self, font: Font, text: &str) -> i32;
}

/// Drawing surface for one frame
pub trait Canvas: TextMeasurer {
    /// Clear the frame
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw text anchored at (x, y)
    fn draw_text(
        &mut self,
        x: i32,
        y: i32,
        font: Font,
        align: TextAlign,
        text: &str,
    ) -> Result<(), DisplayError>;

    /// Draw a one pixel line between two points (inclusive)
    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<(), DisplayError>;

    /// Draw a rectangle outline
    fn rect(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<(), DisplayError>;

    /// Fill a rectangle
    fn filled_rect(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<(), DisplayError>;

    /// Push the frame to the panel
    ///
    /// Backends that draw straight into the panel buffer can leave this empty.
    fn flush(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }

    /// Draw text centered on (x, y)
    fn draw_centered(&mut self, x: i32, y: i32, font: Font, text: &str) -> Result<(), DisplayError> {
        self.draw_text(x, y, font, TextAlign::Center, text)
    }
}
