//! Projection from lane/tick space into rendering-plane coordinates.
//!
//! Real editors own their timeline layout; they implement [`Layout`] and
//! hand it to the geometry and SVG code. [`LinearLayout`] is a plain
//! fixed-scale projection used for previews.

use crate::geometry::AnchorSample;
use crate::model::Anchor;

pub trait Layout {
    /// X of the left edge of `lane_index`.
    fn x(&self, lane_index: i32) -> f64;
    /// Y of `tick`.
    fn y(&self, tick: i64) -> f64;
    /// Drawn width of a note `lanes` lanes wide.
    fn width(&self, lanes: i32) -> f64;
    /// Drawn height of a note.
    fn note_height(&self) -> f64;

    fn project(&self, anchor: &Anchor) -> AnchorSample {
        AnchorSample {
            x: self.x(anchor.lane_index),
            y: self.y(anchor.tick),
            width: self.width(anchor.width),
        }
    }
}

/// Fixed-scale projection. Time runs upward: later ticks get smaller `y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearLayout {
    pub lane_width: f64,
    pub pixels_per_tick: f64,
    pub note_height: f64,
    /// Y of tick 0
    pub origin_y: f64,
}

impl Default for LinearLayout {
    fn default() -> Self {
        Self {
            lane_width: 16.0,
            pixels_per_tick: 0.25,
            note_height: 5.0,
            origin_y: 0.0,
        }
    }
}

impl Layout for LinearLayout {
    fn x(&self, lane_index: i32) -> f64 {
        lane_index as f64 * self.lane_width
    }

    fn y(&self, tick: i64) -> f64 {
        self.origin_y - tick as f64 * self.pixels_per_tick
    }

    fn width(&self, lanes: i32) -> f64 {
        lanes as f64 * self.lane_width
    }

    fn note_height(&self) -> f64 {
        self.note_height
    }
}
