//! Horizontal mirror of a slide across the center of its lane grid.
//!
//! For a start at lane `s` with width `w` on `N` lanes, and a step with
//! offset `o` and width change `d`, the mirrored values are
//! `s' = N - s - w` and `o' = -(o + d)`. Widths are unchanged.
//!
//! The mirrored step sits at `N - (s + o + w + d)`, i.e. its left edge is
//! the reflection of its old right edge, so a step that was on the grid
//! stays on the grid. Width rules only involve widths, which do not change.
//! Hence a valid slide mirrors to a valid slide and no re-check is needed.

use crate::model::Slide;

impl Slide {
    /// Mirror this slide in place.
    pub fn flip(&mut self) {
        #[cfg(debug_assertions)]
        let was_valid = self.validate().is_ok();

        let lanes = self.grid.lanes_count();
        self.start.lane_index = lanes - self.start.lane_index - self.start.width;
        for step in &mut self.steps {
            step.lane_offset = -step.lane_offset - step.width_delta;
        }

        #[cfg(debug_assertions)]
        debug_assert!(
            !was_valid || self.validate().is_ok(),
            "mirroring broke a valid slide: {self:?}"
        );
    }

    /// Mirrored copy of this slide.
    pub fn flipped(&self) -> Slide {
        let mut slide = self.clone();
        slide.flip();
        slide
    }
}
