//! Slide preview renderer: converts a Slide into SVG output.
//!
//! Anchor positions come from a caller-supplied [`Layout`]; the renderer
//! only decides what to draw: lane guides, the gradient-filled background
//! between consecutive anchors, the centerline, and the visible notes.

mod constants;
mod svg_builder;

use crate::geometry::{slide_backgrounds, BackgroundStyle, Point};
use crate::layout::Layout;
use crate::model::Slide;
use constants::*;
use svg_builder::{empty_svg, SvgBuilder};

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Render `slide` with the default background colors.
pub fn render_slide_to_svg<L: Layout + ?Sized>(slide: &Slide, layout: &L) -> String {
    render_slide_to_svg_with_style(slide, layout, &BackgroundStyle::default())
}

/// Render `slide` with custom background colors.
pub fn render_slide_to_svg_with_style<L: Layout + ?Sized>(
    slide: &Slide,
    layout: &L,
    style: &BackgroundStyle,
) -> String {
    let anchors = slide.anchors();
    let samples: Vec<_> = anchors.iter().map(|a| layout.project(a)).collect();
    let note_height = layout.note_height();
    let lanes = slide.grid().lanes_count();

    let grid_left = layout.x(0);
    let grid_right = grid_left + layout.width(lanes);
    let top = samples.iter().map(|s| s.y).fold(f64::INFINITY, f64::min);
    let bottom = samples.iter().map(|s| s.y).fold(f64::NEG_INFINITY, f64::max);

    if ![grid_left, grid_right, top, bottom, note_height]
        .iter()
        .all(|v| v.is_finite())
    {
        log::warn!("slide preview skipped: layout produced non-finite coordinates");
        return empty_svg("Slide could not be projected");
    }

    let min_x = grid_left - CANVAS_PADDING;
    let min_y = top - note_height / 2.0 - CANVAS_PADDING;
    let width = (grid_right - grid_left) + 2.0 * CANVAS_PADDING;
    let height = (bottom - top) + note_height + 2.0 * CANVAS_PADDING;

    let mut svg = SvgBuilder::new(min_x, min_y, width, height);

    // Background
    svg.rect(min_x, min_y, width, height, BACKGROUND_COLOR, "none", 0.0);

    // Lane guides
    for lane in 0..=lanes {
        let x = layout.x(lane);
        svg.line(
            Point::new(x, min_y),
            Point::new(x, min_y + height),
            LANE_LINE_COLOR,
            LANE_LINE_WIDTH,
        );
    }

    // Slide band
    for (i, bg) in slide_backgrounds(slide, layout, style).iter().enumerate() {
        let id = format!("slide-bg-{i}");
        svg.vertical_gradient(&id, bg.gradient.start_y, bg.gradient.end_y, &bg.gradient.stops);
        svg.polygon(&bg.polygon, &format!("url(#{id})"));
        svg.translucent_line(
            bg.centerline.from,
            bg.centerline.to,
            bg.centerline.color,
            bg.centerline.thickness,
        );
    }

    // Notes on top; invisible steps only bend the band.
    for (anchor, sample) in anchors.iter().zip(&samples) {
        if !anchor.visible {
            continue;
        }
        svg.note(sample.x, sample.y - note_height / 2.0, sample.width, note_height);
    }

    svg.build()
}
