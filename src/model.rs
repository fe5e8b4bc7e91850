//! Data model for slides (chained long notes) on a lane grid.
//!
//! A slide is one start anchor plus an ordered chain of step anchors.
//! Steps store their position relative to the start, so moving the start
//! moves the whole chain.

use serde::{Deserialize, Serialize};

use crate::error::PositionError;

/// Number of lanes on the standard chart grid.
pub const LANES_COUNT: i32 = 16;

/// The fixed set of parallel lanes notes are placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneGrid {
    lanes_count: i32,
}

impl LaneGrid {
    /// The standard 16-lane grid.
    pub const STANDARD: LaneGrid = LaneGrid {
        lanes_count: LANES_COUNT,
    };

    /// Create a grid with `lanes_count` lanes. Fails unless positive.
    pub fn new(lanes_count: i32) -> Result<Self, PositionError> {
        if lanes_count <= 0 {
            return Err(PositionError::InvalidLaneCount(lanes_count));
        }
        Ok(Self { lanes_count })
    }

    pub fn lanes_count(&self) -> i32 {
        self.lanes_count
    }
}

impl Default for LaneGrid {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// The first segment of a slide. Holds the authoritative lane position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartAnchor {
    /// Leftmost lane covered by the start note
    pub lane_index: i32,
    /// Number of lanes covered
    pub width: i32,
}

impl Default for StartAnchor {
    fn default() -> Self {
        Self {
            lane_index: 0,
            width: 1,
        }
    }
}

/// A step of the chain, positioned relative to the start anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepAnchor {
    /// Lane offset from the start's lane index
    pub(crate) lane_offset: i32,
    /// Width difference from the start's width
    pub(crate) width_delta: i32,
    /// Ticks after the slide's start tick; always positive
    pub(crate) tick_offset: i32,
    /// Invisible steps bend the slide without drawing a note
    pub(crate) visible: bool,
}

impl StepAnchor {
    /// Build a detached step. Fails if `tick_offset` is not positive;
    /// lane and width are checked when the step joins a slide.
    pub fn new(
        lane_offset: i32,
        width_delta: i32,
        tick_offset: i32,
        visible: bool,
    ) -> Result<Self, PositionError> {
        crate::validator::validate_tick_offset(tick_offset)?;
        Ok(Self {
            lane_offset,
            width_delta,
            tick_offset,
            visible,
        })
    }

    pub fn lane_offset(&self) -> i32 {
        self.lane_offset
    }

    pub fn width_delta(&self) -> i32 {
        self.width_delta
    }

    pub fn tick_offset(&self) -> i32 {
        self.tick_offset
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Default for StepAnchor {
    fn default() -> Self {
        Self {
            lane_offset: 0,
            width_delta: 0,
            tick_offset: 1,
            visible: true,
        }
    }
}

/// A slide: a start anchor followed by an ordered chain of steps.
///
/// Steps keep insertion order. Nothing here sorts them by tick; callers
/// that need tick order must maintain it themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SlideRecord", into = "SlideRecord")]
pub struct Slide {
    pub(crate) grid: LaneGrid,
    pub(crate) start_tick: i32,
    pub(crate) start: StartAnchor,
    pub(crate) steps: Vec<StepAnchor>,
}

/// Which part of a slide an [`Anchor`] sample came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnchorRole {
    Start,
    Step { index: usize },
}

/// Resolved absolute position of one anchor, ready for projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Anchor {
    pub role: AnchorRole,
    /// Absolute tick. Wider than the stored fields: a start tick near
    /// `i32::MAX` plus a positive offset still resolves.
    pub tick: i64,
    pub lane_index: i32,
    pub width: i32,
    pub visible: bool,
}

// ═══════════════════════════════════════════════════════════════════════
// Persistence record
// ═══════════════════════════════════════════════════════════════════════

/// Plain persisted form of a slide. `step_notes` order is chain order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideRecord {
    #[serde(default)]
    pub start_tick: i32,
    pub start_width: i32,
    pub start_lane_index: i32,
    #[serde(default)]
    pub step_notes: Vec<StepRecord>,
}

/// Persisted form of one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepRecord {
    pub lane_index_offset: i32,
    pub width_change: i32,
    pub tick_offset: i32,
    #[serde(default = "default_visible")]
    pub is_visible: bool,
}

fn default_visible() -> bool {
    true
}

impl From<&StepAnchor> for StepRecord {
    fn from(step: &StepAnchor) -> Self {
        Self {
            lane_index_offset: step.lane_offset,
            width_change: step.width_delta,
            tick_offset: step.tick_offset,
            is_visible: step.visible,
        }
    }
}

impl From<Slide> for SlideRecord {
    fn from(slide: Slide) -> Self {
        SlideRecord::from(&slide)
    }
}

impl From<&Slide> for SlideRecord {
    fn from(slide: &Slide) -> Self {
        Self {
            start_tick: slide.start_tick,
            start_width: slide.start.width,
            start_lane_index: slide.start.lane_index,
            step_notes: slide.steps.iter().map(StepRecord::from).collect(),
        }
    }
}

impl TryFrom<SlideRecord> for Slide {
    type Error = PositionError;

    fn try_from(record: SlideRecord) -> Result<Self, Self::Error> {
        Slide::from_record(record, LaneGrid::default())
    }
}
