//! Mutation API for slides.
//!
//! Every mutator validates first and commits only on success, so a
//! rejected call leaves the slide exactly as it was.

use crate::error::PositionError;
use crate::model::{
    Anchor, AnchorRole, LaneGrid, Slide, SlideRecord, StartAnchor, StepAnchor,
};
use crate::validator::{validate_chain, validate_step_local, validate_tick_offset};

impl Slide {
    /// Create an empty slide on the standard grid at lane 0, width 1.
    pub fn new() -> Self {
        Self::with_grid(LaneGrid::default())
    }

    /// Create an empty slide on a custom grid.
    pub fn with_grid(grid: LaneGrid) -> Self {
        Self {
            grid,
            start_tick: 0,
            start: StartAnchor::default(),
            steps: Vec::new(),
        }
    }

    /// Rebuild a slide from its persisted record, rejecting any record
    /// that breaks the position or tick rules.
    pub fn from_record(record: SlideRecord, grid: LaneGrid) -> Result<Self, PositionError> {
        let start = StartAnchor {
            lane_index: record.start_lane_index,
            width: record.start_width,
        };
        let steps = record
            .step_notes
            .iter()
            .map(|s| StepAnchor::new(s.lane_index_offset, s.width_change, s.tick_offset, s.is_visible))
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|e| log::warn!("rejected slide record: {e}"))?;
        validate_chain(&grid, &start, &steps)
            .inspect_err(|e| log::warn!("rejected slide record: {e}"))?;

        Ok(Self {
            grid,
            start_tick: record.start_tick,
            start,
            steps,
        })
    }

    pub fn grid(&self) -> &LaneGrid {
        &self.grid
    }

    pub fn start(&self) -> &StartAnchor {
        &self.start
    }

    pub fn start_tick(&self) -> i32 {
        self.start_tick
    }

    pub fn start_lane_index(&self) -> i32 {
        self.start.lane_index
    }

    pub fn start_width(&self) -> i32 {
        self.start.width
    }

    pub fn steps(&self) -> &[StepAnchor] {
        &self.steps
    }

    // ── Start anchor ────────────────────────────────────────────────

    /// Move and resize the start together. Re-checks every step.
    pub fn set_position(&mut self, lane_index: i32, width: i32) -> Result<(), PositionError> {
        let candidate = StartAnchor { lane_index, width };
        validate_chain(&self.grid, &candidate, &self.steps)?;
        log::trace!("slide start moved to lane {lane_index} width {width}");
        self.start = candidate;
        Ok(())
    }

    pub fn set_start_lane_index(&mut self, lane_index: i32) -> Result<(), PositionError> {
        self.set_position(lane_index, self.start.width)
    }

    pub fn set_start_width(&mut self, width: i32) -> Result<(), PositionError> {
        self.set_position(self.start.lane_index, width)
    }

    pub fn set_start_tick(&mut self, tick: i32) {
        self.start_tick = tick;
    }

    // ── Steps ───────────────────────────────────────────────────────

    /// Append a step to the end of the chain, returning its index.
    pub fn append_step(
        &mut self,
        lane_offset: i32,
        width_delta: i32,
        tick_offset: i32,
        visible: bool,
    ) -> Result<usize, PositionError> {
        let step = StepAnchor::new(lane_offset, width_delta, tick_offset, visible)?;
        let index = self.steps.len();
        self.insert_step(index, step)?;
        Ok(index)
    }

    /// Insert a step at `index`, shifting later steps back.
    pub fn insert_step(&mut self, index: usize, step: StepAnchor) -> Result<(), PositionError> {
        if index > self.steps.len() {
            return Err(PositionError::StepIndexOutOfRange {
                index,
                len: self.steps.len(),
            });
        }
        validate_tick_offset(step.tick_offset)?;
        validate_step_local(&self.grid, &self.start, step.lane_offset, step.width_delta)?;
        log::trace!("slide step inserted at {index}: {step:?}");
        self.steps.insert(index, step);
        Ok(())
    }

    /// Remove and return the step at `index`.
    ///
    /// Dropping a step only loosens the chain constraints, so nothing is
    /// re-checked.
    pub fn remove_step(&mut self, index: usize) -> Result<StepAnchor, PositionError> {
        if index >= self.steps.len() {
            return Err(PositionError::StepIndexOutOfRange {
                index,
                len: self.steps.len(),
            });
        }
        Ok(self.steps.remove(index))
    }

    /// Mutable handle to one step. Writes through it are checked against
    /// the current start.
    pub fn step_mut(&mut self, index: usize) -> Option<StepMut<'_>> {
        if index < self.steps.len() {
            Some(StepMut { slide: self, index })
        } else {
            None
        }
    }

    pub fn step_tick(&self, index: usize) -> Option<i64> {
        self.steps.get(index).map(|s| self.absolute_tick(s.tick_offset))
    }

    pub fn step_lane_index(&self, index: usize) -> Option<i32> {
        self.steps.get(index).map(|s| self.start.lane_index + s.lane_offset)
    }

    pub fn step_width(&self, index: usize) -> Option<i32> {
        self.steps.get(index).map(|s| self.start.width + s.width_delta)
    }

    pub fn step_anchor(&self, index: usize) -> Option<Anchor> {
        self.steps.get(index).map(|s| Anchor {
            role: AnchorRole::Step { index },
            tick: self.absolute_tick(s.tick_offset),
            lane_index: self.start.lane_index + s.lane_offset,
            width: self.start.width + s.width_delta,
            visible: s.visible,
        })
    }

    pub fn start_anchor(&self) -> Anchor {
        Anchor {
            role: AnchorRole::Start,
            tick: i64::from(self.start_tick),
            lane_index: self.start.lane_index,
            width: self.start.width,
            visible: true,
        }
    }

    /// Start followed by every step, in chain order.
    pub fn anchors(&self) -> Vec<Anchor> {
        let mut anchors = Vec::with_capacity(self.steps.len() + 1);
        anchors.push(self.start_anchor());
        anchors.extend((0..self.steps.len()).filter_map(|i| self.step_anchor(i)));
        anchors
    }

    // ── Timing ──────────────────────────────────────────────────────

    /// Largest step tick offset. A slide without steps has no duration.
    pub fn duration(&self) -> Result<i32, PositionError> {
        self.steps
            .iter()
            .map(|s| s.tick_offset)
            .max()
            .ok_or(PositionError::EmptyChain)
    }

    pub fn end_tick(&self) -> Result<i64, PositionError> {
        Ok(self.absolute_tick(self.duration()?))
    }

    fn absolute_tick(&self, tick_offset: i32) -> i64 {
        i64::from(self.start_tick) + i64::from(tick_offset)
    }

    /// Re-check the committed state against every chain rule.
    pub fn validate(&self) -> Result<(), PositionError> {
        for step in &self.steps {
            validate_tick_offset(step.tick_offset)?;
        }
        validate_chain(&self.grid, &self.start, &self.steps)
    }
}

impl Default for Slide {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowed write access to one step of a slide.
#[derive(Debug)]
pub struct StepMut<'a> {
    slide: &'a mut Slide,
    index: usize,
}

impl StepMut<'_> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn get(&self) -> &StepAnchor {
        &self.slide.steps[self.index]
    }

    /// Set lane offset and width change together.
    pub fn set_position(&mut self, lane_offset: i32, width_delta: i32) -> Result<(), PositionError> {
        validate_step_local(&self.slide.grid, &self.slide.start, lane_offset, width_delta)?;
        let step = &mut self.slide.steps[self.index];
        step.lane_offset = lane_offset;
        step.width_delta = width_delta;
        Ok(())
    }

    pub fn set_lane_offset(&mut self, lane_offset: i32) -> Result<(), PositionError> {
        let width_delta = self.get().width_delta;
        self.set_position(lane_offset, width_delta)
    }

    pub fn set_width_delta(&mut self, width_delta: i32) -> Result<(), PositionError> {
        let lane_offset = self.get().lane_offset;
        self.set_position(lane_offset, width_delta)
    }

    pub fn set_tick_offset(&mut self, tick_offset: i32) -> Result<(), PositionError> {
        validate_tick_offset(tick_offset)?;
        self.slide.steps[self.index].tick_offset = tick_offset;
        Ok(())
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.slide.steps[self.index].visible = visible;
    }
}
