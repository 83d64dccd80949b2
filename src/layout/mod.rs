//! Layout utilities for positioning the fixed form sections on pages.
//!
//! The form is laid out with one explicit cursor value threaded through every
//! section renderer: each renderer takes a [Cursor], emits its box and text,
//! and returns the cursor advanced past what it wrote. Nothing in the crate
//! holds layout position in shared state, so concurrent renders of different
//! records cannot interact.

mod margins;
mod text;

pub use margins::*;
pub use text::*;

use crate::units::Pt;

/// Vertical layout position on a page, in PDF coordinates (y decreases as
/// content flows down the page). Copy semantics on purpose: renderers return
/// an advanced cursor instead of mutating anything shared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub y: Pt,
}

impl Cursor {
    /// A cursor sitting at the given vertical offset
    pub fn at(y: Pt) -> Cursor {
        Cursor { y }
    }

    /// The cursor moved down the page by `dy`
    pub fn advanced(self, dy: Pt) -> Cursor {
        Cursor { y: self.y - dy }
    }
}
