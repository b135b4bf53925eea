//! Scroll layout engine
//!
//! Advances `ScrollField` state by one tick and draws the copies that are
//! visible. Every call moves each animated primary copy left by exactly one
//! scroll step, whichever branch fires, so the text speed never depends on
//! the layout mode.

use mediaremote_core::config::{DisplayGeometry, WrapTrigger};
use mediaremote_core::scroll::{Pacing, ScrollField};

use crate::backend::{Canvas, DisplayError, Font};

/// A text row that may scroll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollLine<'a> {
    pub text: &'a str,
    pub font: Font,
    /// Vertical center
    pub y: i32,
    /// Measured width in pixels
    pub width: i32,
}

impl<'a> ScrollLine<'a> {
    pub fn new(text: &'a str, font: Font, y: i32, width: i32) -> Self {
        Self { text, font, y, width }
    }

    pub fn half_width(&self) -> i32 {
        self.width / 2
    }

    /// Draw this row centered on `x`
    pub fn draw_at<C: Canvas + ?Sized>(&self, canvas: &mut C, x: i32) -> Result<(), DisplayError> {
        canvas.draw_centered(x, self.y, self.font, self.text)
    }
}

/// A text row drawn centered at a fixed point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticLine<'a> {
    pub text: &'a str,
    pub font: Font,
    pub x: i32,
    pub y: i32,
}

impl<'a> StaticLine<'a> {
    pub fn new(text: &'a str, font: Font, x: i32, y: i32) -> Self {
        Self { text, font, x, y }
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) -> Result<(), DisplayError> {
        canvas.draw_centered(self.x, self.y, self.font, self.text)
    }
}

/// Per-tick scroll stepper
///
/// Positions are advanced before anything is drawn, so a failing draw
/// call never stalls the animation.
#[derive(Debug, Clone, Copy)]
pub struct Scroller<'g> {
    geometry: &'g DisplayGeometry,
    trigger: WrapTrigger,
}

impl<'g> Scroller<'g> {
    pub fn new(geometry: &'g DisplayGeometry, trigger: WrapTrigger) -> Self {
        Self { geometry, trigger }
    }

    /// Scroll one row and draw its fixed companions
    ///
    /// The row's width must already have been synced into `field`.
    pub fn single<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        field: &mut ScrollField,
        line: &ScrollLine<'_>,
        companions: &[StaticLine<'_>],
    ) -> Result<(), DisplayError> {
        let half = line.half_width();
        let step = self.geometry.scroll_step;

        let mut wrap_at = None;
        if field.is_off_screen(half) {
            field.rotate(self.geometry, half);
        } else if field.shows_wrap(half, self.geometry, self.trigger) {
            wrap_at = Some(field.wrap_pos());
            field.advance_wrap(step);
        }
        let primary_at = field.primary_pos();
        field.advance(step);

        if let Some(x) = wrap_at {
            line.draw_at(canvas, x)?;
        }
        line.draw_at(canvas, primary_at)?;
        for companion in companions {
            companion.draw(canvas)?;
        }
        Ok(())
    }

    /// Scroll two rows in lockstep
    ///
    /// The wider row paces both: its position decides when the wrap copies
    /// appear and when both rows rotate, and both new wrap copies are spaced
    /// by its half-width so the rows re-enter together.
    pub fn coupled<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        primary: &mut ScrollField,
        primary_line: &ScrollLine<'_>,
        secondary: &mut ScrollField,
        secondary_line: &ScrollLine<'_>,
    ) -> Result<(), DisplayError> {
        let pacing = Pacing::between(primary_line.width, secondary_line.width);
        let half = pacing.half_width(primary_line.width, secondary_line.width);
        let step = self.geometry.scroll_step;

        let (off_screen, shows_wrap) = {
            let pacer = match pacing {
                Pacing::Primary => &*primary,
                Pacing::Secondary => &*secondary,
            };
            (
                pacer.is_off_screen(half),
                pacer.shows_wrap(half, self.geometry, self.trigger),
            )
        };

        let mut wrap_at = None;
        if off_screen {
            primary.rotate(self.geometry, half);
            secondary.rotate(self.geometry, half);
        } else if shows_wrap {
            wrap_at = Some((primary.wrap_pos(), secondary.wrap_pos()));
            primary.advance_wrap(step);
            secondary.advance_wrap(step);
        }
        let primary_at = primary.primary_pos();
        let secondary_at = secondary.primary_pos();
        primary.advance(step);
        secondary.advance(step);

        if let Some((primary_wrap, secondary_wrap)) = wrap_at {
            primary_line.draw_at(canvas, primary_wrap)?;
            secondary_line.draw_at(canvas, secondary_wrap)?;
        }
        primary_line.draw_at(canvas, primary_at)?;
        secondary_line.draw_at(canvas, secondary_at)?;
        Ok(())
    }
}
