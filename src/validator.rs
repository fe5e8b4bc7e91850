//! Position checks for slide anchors against the lane grid.
//!
//! Two entry points with deliberately different reach:
//! [`validate_chain`] checks a candidate start against every step, while
//! [`validate_step_local`] checks one step against the current start only
//! and never looks at its siblings.

use crate::error::PositionError;
use crate::model::{LaneGrid, StartAnchor, StepAnchor};

/// Check a candidate start anchor against the grid and every step.
///
/// Order of checks (first failure wins):
/// 1. start width must absorb the most negative width change → `InvalidWidth`
/// 2. start must lie on the grid → `InvalidLaneIndex`
/// 3. rightmost step excursion must stay on the grid → `InvalidLaneIndex`
/// 4. each step: lane below 0 → `InvalidLaneIndex`; non-positive width or
///    right edge past the grid → `InvalidWidthChange`
pub fn validate_chain(
    grid: &LaneGrid,
    start: &StartAnchor,
    steps: &[StepAnchor],
) -> Result<(), PositionError> {
    // i64 so extreme editor input cannot overflow.
    let lanes = i64::from(grid.lanes_count());
    let (start_lane, start_width) = (i64::from(start.lane_index), i64::from(start.width));

    let min_width_delta = steps
        .iter()
        .map(|s| i64::from(s.width_delta))
        .min()
        .unwrap_or(0);
    if start_width < 1 + (-min_width_delta).max(0) {
        log::debug!(
            "rejected start width {} (min width change {})",
            start.width,
            min_width_delta
        );
        return Err(PositionError::InvalidWidth);
    }

    if start_lane < 0 || start_lane + start_width > lanes {
        log::debug!(
            "rejected start lane {} width {} on {} lanes",
            start.lane_index,
            start.width,
            lanes
        );
        return Err(PositionError::InvalidLaneIndex);
    }

    let max_right_offset = steps
        .iter()
        .map(|s| i64::from(s.lane_offset) + i64::from(s.width_delta))
        .max()
        .unwrap_or(0)
        .max(0);
    if start_lane + start_width + max_right_offset > lanes {
        log::debug!(
            "rejected start lane {} width {}: steps reach {} lanes past its right edge",
            start.lane_index,
            start.width,
            max_right_offset
        );
        return Err(PositionError::InvalidLaneIndex);
    }

    for (i, step) in steps.iter().enumerate() {
        let lane_index = start_lane + i64::from(step.lane_offset);
        let width = start_width + i64::from(step.width_delta);
        if lane_index < 0 {
            log::debug!("rejected start: step {i} would sit at lane {lane_index}");
            return Err(PositionError::InvalidLaneIndex);
        }
        if width < 1 || lane_index + width > lanes {
            log::debug!("rejected start: step {i} would span lanes {lane_index}+{width}");
            return Err(PositionError::InvalidWidthChange);
        }
    }

    Ok(())
}

/// Check one step's offsets against the current start only.
///
/// Sibling steps are not consulted; a start move later re-checks them all
/// through [`validate_chain`].
pub fn validate_step_local(
    grid: &LaneGrid,
    start: &StartAnchor,
    lane_offset: i32,
    width_delta: i32,
) -> Result<(), PositionError> {
    let lanes = i64::from(grid.lanes_count());
    let lane_index = i64::from(start.lane_index) + i64::from(lane_offset);
    let width = i64::from(start.width) + i64::from(width_delta);

    if lane_index < 0 || lane_index + width > lanes {
        log::debug!("rejected step lane offset {lane_offset} (lane {lane_index}, width {width})");
        return Err(PositionError::InvalidLaneIndex);
    }

    if width < 1 || lane_index + width > lanes {
        log::debug!("rejected step width change {width_delta} (width {width})");
        return Err(PositionError::InvalidWidthChange);
    }

    Ok(())
}

pub fn validate_tick_offset(tick_offset: i32) -> Result<(), PositionError> {
    if tick_offset <= 0 {
        log::debug!("rejected tick offset {tick_offset}");
        return Err(PositionError::InvalidTickOffset);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(lane_index: i32, width: i32) -> StartAnchor {
        StartAnchor { lane_index, width }
    }

    fn step(lane_offset: i32, width_delta: i32) -> StepAnchor {
        StepAnchor {
            lane_offset,
            width_delta,
            ..StepAnchor::default()
        }
    }

    #[test]
    fn width_must_absorb_most_negative_change() {
        let grid = LaneGrid::STANDARD;
        assert_eq!(
            validate_chain(&grid, &start(0, 4), &[step(0, -4)]),
            Err(PositionError::InvalidWidth)
        );
        assert_eq!(validate_chain(&grid, &start(0, 4), &[step(0, -3)]), Ok(()));
    }

    #[test]
    fn start_overflowing_grid_is_lane_error() {
        let grid = LaneGrid::STANDARD;
        assert_eq!(
            validate_chain(&grid, &start(14, 4), &[]),
            Err(PositionError::InvalidLaneIndex)
        );
        assert_eq!(
            validate_chain(&grid, &start(-1, 4), &[]),
            Err(PositionError::InvalidLaneIndex)
        );
        assert_eq!(validate_chain(&grid, &start(12, 4), &[]), Ok(()));
    }

    #[test]
    fn width_check_runs_before_lane_check() {
        let grid = LaneGrid::STANDARD;
        // Off-grid and too narrow at once: width wins.
        assert_eq!(
            validate_chain(&grid, &start(20, 1), &[step(0, -2)]),
            Err(PositionError::InvalidWidth)
        );
    }

    #[test]
    fn right_excursion_of_steps_is_checked() {
        let grid = LaneGrid::STANDARD;
        // 10 + 2 + (3 + 2) = 17 > 16
        assert_eq!(
            validate_chain(&grid, &start(10, 2), &[step(3, 2)]),
            Err(PositionError::InvalidLaneIndex)
        );
        assert_eq!(validate_chain(&grid, &start(9, 2), &[step(3, 2)]), Ok(()));
    }

    #[test]
    fn step_left_of_grid_is_lane_error() {
        let grid = LaneGrid::STANDARD;
        assert_eq!(
            validate_chain(&grid, &start(2, 2), &[step(-3, 0)]),
            Err(PositionError::InvalidLaneIndex)
        );
    }

    #[test]
    fn local_check_lane_before_width() {
        let grid = LaneGrid::STANDARD;
        let s = start(0, 4);
        assert_eq!(validate_step_local(&grid, &s, 10, 0), Ok(()));
        assert_eq!(
            validate_step_local(&grid, &s, -1, 0),
            Err(PositionError::InvalidLaneIndex)
        );
        assert_eq!(
            validate_step_local(&grid, &s, 10, 3),
            Err(PositionError::InvalidLaneIndex)
        );
        assert_eq!(
            validate_step_local(&grid, &s, 0, -4),
            Err(PositionError::InvalidWidthChange)
        );
    }

    #[test]
    fn local_check_ignores_siblings() {
        // A narrow custom grid: the local check only sees the start.
        let grid = LaneGrid::new(4).unwrap();
        let s = start(0, 2);
        assert_eq!(validate_step_local(&grid, &s, 2, 0), Ok(()));
        assert_eq!(
            validate_chain(&grid, &start(1, 2), &[step(2, 0)]),
            Err(PositionError::InvalidLaneIndex)
        );
    }

    #[test]
    fn tick_offset_must_be_positive() {
        assert_eq!(validate_tick_offset(1), Ok(()));
        assert_eq!(validate_tick_offset(0), Err(PositionError::InvalidTickOffset));
        assert_eq!(validate_tick_offset(-5), Err(PositionError::InvalidTickOffset));
    }

    #[test]
    fn grid_rejects_non_positive_lane_count() {
        assert_eq!(LaneGrid::new(0), Err(PositionError::InvalidLaneCount(0)));
        assert_eq!(LaneGrid::new(8).map(|g| g.lanes_count()), Ok(8));
    }
}
