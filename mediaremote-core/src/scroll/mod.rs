//! Scroll state for animated text fields
//!
//! Positions are horizontal centers in pixels. They are signed and run
//! freely off both edges of the panel; the drawing side clips.

pub mod field;
pub mod mode;

pub use field::ScrollField;
pub use mode::{LayoutMode, Pacing};
