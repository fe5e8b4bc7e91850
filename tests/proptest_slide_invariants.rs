//! Property-based invariant tests for slide editing.
//!
//! These tests drive slides through arbitrary edit sequences and check:
//!
//! 1. Every committed anchor stays on the grid with width >= 1.
//! 2. Every committed slide passes the full chain check.
//! 3. A rejected edit leaves the slide unchanged.
//! 4. Mirroring twice restores the slide.
//! 5. Mirroring never produces an invalid slide.
//! 6. Duration equals the largest tick offset.

use proptest::prelude::*;
use slidelib::{LaneGrid, Slide};

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Edit {
    SetPosition(i32, i32),
    AppendStep(i32, i32, i32, bool),
    StepPosition(usize, i32, i32),
    StepTick(usize, i32),
    RemoveStep(usize),
    Flip,
}

fn edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (-4i32..20, -2i32..20).prop_map(|(l, w)| Edit::SetPosition(l, w)),
        (-18i32..18, -16i32..16, -5i32..2000, any::<bool>())
            .prop_map(|(o, d, t, v)| Edit::AppendStep(o, d, t, v)),
        (0usize..8, -18i32..18, -16i32..16).prop_map(|(i, o, d)| Edit::StepPosition(i, o, d)),
        (0usize..8, -5i32..2000).prop_map(|(i, t)| Edit::StepTick(i, t)),
        (0usize..8).prop_map(Edit::RemoveStep),
        Just(Edit::Flip),
    ]
}

/// Apply an edit; `true` if it was committed.
fn apply(slide: &mut Slide, edit: &Edit) -> bool {
    match *edit {
        Edit::SetPosition(l, w) => slide.set_position(l, w).is_ok(),
        Edit::AppendStep(o, d, t, v) => slide.append_step(o, d, t, v).is_ok(),
        Edit::StepPosition(i, o, d) => match slide.step_mut(i) {
            Some(mut step) => step.set_position(o, d).is_ok(),
            None => false,
        },
        Edit::StepTick(i, t) => match slide.step_mut(i) {
            Some(mut step) => step.set_tick_offset(t).is_ok(),
            None => false,
        },
        Edit::RemoveStep(i) => slide.remove_step(i).is_ok(),
        Edit::Flip => {
            slide.flip();
            true
        }
    }
}

fn edited_slide(grid: LaneGrid, edits: &[Edit]) -> Slide {
    let mut slide = Slide::with_grid(grid);
    for e in edits {
        apply(&mut slide, e);
    }
    slide
}

fn grid() -> impl Strategy<Value = LaneGrid> {
    prop_oneof![Just(LaneGrid::STANDARD), (1i32..20).prop_map(|n| LaneGrid::new(n).unwrap())]
}

// ═════════════════════════════════════════════════════════════════════════
// 1–2. Containment and chain validity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn anchors_stay_on_grid(g in grid(), edits in proptest::collection::vec(edit(), 0..40)) {
        let slide = edited_slide(g, &edits);
        let lanes = g.lanes_count();
        for anchor in slide.anchors() {
            prop_assert!(anchor.lane_index >= 0, "{:?}", anchor);
            prop_assert!(anchor.width >= 1, "{:?}", anchor);
            prop_assert!(anchor.lane_index + anchor.width <= lanes, "{:?}", anchor);
        }
        for step in slide.steps() {
            prop_assert!(step.tick_offset() > 0);
        }
        prop_assert_eq!(slide.validate(), Ok(()));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Atomic rejection
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rejected_edit_changes_nothing(
        edits in proptest::collection::vec(edit(), 0..30),
        last in edit(),
    ) {
        let mut slide = edited_slide(LaneGrid::STANDARD, &edits);
        let before = slide.clone();
        if !apply(&mut slide, &last) {
            prop_assert_eq!(slide, before);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4–5. Mirror
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn flip_is_an_involution(g in grid(), edits in proptest::collection::vec(edit(), 0..40)) {
        let slide = edited_slide(g, &edits);
        let twice = slide.flipped().flipped();
        prop_assert_eq!(twice.start_lane_index(), slide.start_lane_index());
        for (a, b) in twice.steps().iter().zip(slide.steps()) {
            prop_assert_eq!(a.lane_offset(), b.lane_offset());
            prop_assert_eq!(a.width_delta(), b.width_delta());
        }
        prop_assert_eq!(twice, slide);
    }

    #[test]
    fn flip_preserves_validity(g in grid(), edits in proptest::collection::vec(edit(), 0..40)) {
        let slide = edited_slide(g, &edits);
        let flipped = slide.flipped();
        prop_assert_eq!(flipped.validate(), Ok(()));
        for (a, b) in flipped.steps().iter().zip(slide.steps()) {
            prop_assert_eq!(a.width_delta(), b.width_delta());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Duration
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn duration_is_max_tick_offset(ticks in proptest::collection::vec(1i32..5000, 1..20)) {
        let mut slide = Slide::new();
        for &t in &ticks {
            slide.append_step(0, 0, t, true).unwrap();
        }
        prop_assert_eq!(slide.duration(), Ok(*ticks.iter().max().unwrap()));
    }
}
