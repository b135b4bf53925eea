//! Per-field scroll positions
//!
//! A scrolling text is drawn as up to two copies: the primary copy that
//! moves left one step per tick, and a wrap copy that follows it in from
//! the right edge. When the primary copy has fully left the screen the
//! wrap copy takes its place and a fresh wrap copy is queued.

use crate::config::{DisplayGeometry, WrapTrigger};

/// Scroll state of one animated text slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScrollField {
    /// Center of the primary copy
    primary_pos: i32,
    /// Center of the wrap copy
    wrap_pos: i32,
    /// Measured width seen on the previous tick
    last_width: i32,
}

impl ScrollField {
    /// Create a field at rest for an empty text
    pub fn new(geometry: &DisplayGeometry) -> Self {
        Self {
            primary_pos: geometry.center(),
            wrap_pos: geometry.wrap_start(0),
            last_width: 0,
        }
    }

    /// Reset if the measured width changed since the last tick
    ///
    /// `pacing_half` is the half-width the wrap copy is spaced by; for a
    /// standalone field that is its own half-width. Returns `true` when
    /// the positions were reset.
    pub fn sync_width(&mut self, geometry: &DisplayGeometry, width: i32, pacing_half: i32) -> bool {
        if width == self.last_width {
            return false;
        }
        self.resize(geometry, width, pacing_half);
        true
    }

    /// Record a new width and reset unconditionally
    ///
    /// Used when a paired field changed and both rows must restart together.
    pub fn resize(&mut self, geometry: &DisplayGeometry, width: i32, pacing_half: i32) {
        self.last_width = width;
        self.reset(geometry, pacing_half);
    }

    /// Put the primary copy back at the center and re-queue the wrap copy
    pub fn reset(&mut self, geometry: &DisplayGeometry, pacing_half: i32) {
        self.primary_pos = geometry.center();
        self.wrap_pos = geometry.wrap_start(pacing_half);
    }

    /// Promote the wrap copy to primary and queue a new wrap copy
    pub fn rotate(&mut self, geometry: &DisplayGeometry, pacing_half: i32) {
        self.primary_pos = self.wrap_pos;
        self.wrap_pos = geometry.wrap_start(pacing_half);
    }

    /// Whether the primary copy has scrolled fully past the left edge
    pub fn is_off_screen(&self, half_width: i32) -> bool {
        self.primary_pos + half_width < 0
    }

    /// Whether the wrap copy should be drawn this tick
    pub fn shows_wrap(&self, half_width: i32, geometry: &DisplayGeometry, trigger: WrapTrigger) -> bool {
        let past_center = self.primary_pos + half_width < geometry.center();
        match trigger {
            WrapTrigger::PastCenter => past_center,
            WrapTrigger::LeadingEdge => past_center && self.primary_pos - half_width < 0,
        }
    }

    /// Move the primary copy left by one step
    pub fn advance(&mut self, step: i32) {
        self.primary_pos -= step;
    }

    /// Move the wrap copy left by one step
    pub fn advance_wrap(&mut self, step: i32) {
        self.wrap_pos -= step;
    }

    pub fn primary_pos(&self) -> i32 {
        self.primary_pos
    }

    pub fn wrap_pos(&self) -> i32 {
        self.wrap_pos
    }

    pub fn last_width(&self) -> i32 {
        self.last_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn geometry() -> DisplayGeometry {
        DisplayGeometry::default()
    }

    #[test]
    fn test_new_field_at_center() {
        let field = ScrollField::new(&geometry());
        assert_eq!(field.primary_pos(), 64);
        assert_eq!(field.wrap_pos(), 129);
        assert_eq!(field.last_width(), 0);
    }

    #[test]
    fn test_sync_resets_on_width_change() {
        let g = geometry();
        let mut field = ScrollField::new(&g);
        assert!(field.sync_width(&g, 140, 70));
        field.advance(1);
        field.advance(1);
        assert_eq!(field.primary_pos(), 62);

        // Same width: state survives
        assert!(!field.sync_width(&g, 140, 70));
        assert_eq!(field.primary_pos(), 62);

        // New width: back to center, wrap re-aligned
        assert!(field.sync_width(&g, 150, 75));
        assert_eq!(field.primary_pos(), 64);
        assert_eq!(field.wrap_pos(), g.wrap_start(75));
        assert_eq!(field.last_width(), 150);
    }

    #[test]
    fn test_rotate_promotes_wrap_copy() {
        let g = geometry();
        let mut field = ScrollField::new(&g);
        field.sync_width(&g, 140, 70);
        field.advance_wrap(10);
        let wrap = field.wrap_pos();

        field.rotate(&g, 70);
        assert_eq!(field.primary_pos(), wrap);
        assert_eq!(field.wrap_pos(), g.wrap_start(70));
    }

    #[test]
    fn test_off_screen_edge() {
        let g = geometry();
        let mut field = ScrollField::new(&g);
        field.sync_width(&g, 140, 70);
        // Trailing edge exactly at x = 0 is still on screen
        field.advance(64 + 70);
        assert_eq!(field.primary_pos(), -70);
        assert!(!field.is_off_screen(70));
        field.advance(1);
        assert!(field.is_off_screen(70));
    }

    #[test]
    fn test_wrap_triggers() {
        let g = geometry();
        let mut field = ScrollField::new(&g);
        field.sync_width(&g, 140, 70);

        // Trailing edge at the center: not yet
        field.advance(70);
        assert_eq!(field.primary_pos(), -6);
        assert!(!field.shows_wrap(70, &g, WrapTrigger::PastCenter));

        field.advance(1);
        assert!(field.shows_wrap(70, &g, WrapTrigger::PastCenter));
        assert!(field.shows_wrap(70, &g, WrapTrigger::LeadingEdge));
    }

    #[test]
    fn test_leading_edge_trigger_waits_for_left_edge() {
        let g = geometry();
        let mut field = ScrollField::new(&g);
        // Narrow text: trailing edge passes the center while the leading
        // edge is still on screen
        field.sync_width(&g, 20, 10);
        field.advance(20);
        assert_eq!(field.primary_pos(), 44);
        assert!(field.shows_wrap(10, &g, WrapTrigger::PastCenter));
        assert!(!field.shows_wrap(10, &g, WrapTrigger::LeadingEdge));
    }

    proptest! {
        #[test]
        fn prop_reset_on_any_width_change(first in 1i32..600, second in 1i32..600, ticks in 0i32..300) {
            prop_assume!(first != second);
            let g = geometry();
            let mut field = ScrollField::new(&g);
            field.sync_width(&g, first, first / 2);
            field.advance(ticks);
            prop_assert!(field.sync_width(&g, second, second / 2));
            prop_assert_eq!(field.primary_pos(), g.center());
            prop_assert_eq!(field.wrap_pos(), g.align_reset_pos(g.width + second / 2));
        }
    }
}
