//! Background geometry between consecutive slide anchors.
//!
//! Painting is left to the caller. This module only describes what to
//! paint: a quadrilateral joining the two anchors' top edges, a vertical
//! four-stop gradient to fill it with, and a centerline stroke.

use serde::Serialize;

use crate::layout::Layout;
use crate::model::Slide;

// ── Default colors (ARGB) ───────────────────────────────────────────
pub const BACKGROUND_EDGE_COLOR: Argb = Argb::new(196, 166, 44, 168);
pub const BACKGROUND_MIDDLE_COLOR: Argb = Argb::new(196, 0, 164, 146);
pub const BACKGROUND_LINE_COLOR: Argb = Argb::new(196, 0, 214, 192);

/// Gradient stop offsets: edge, middle, middle, edge.
pub const BLEND_POSITIONS: [f64; 4] = [0.0, 0.3, 0.7, 1.0];
/// Centerline thickness relative to the note height.
pub const LINE_THICKNESS_RATIO: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Argb {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Argb {
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// `#rrggbb`, alpha dropped.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn opacity(&self) -> f64 {
        self.a as f64 / 255.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An anchor already projected into rendering coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnchorSample {
    /// Left edge
    pub x: f64,
    pub y: f64,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Argb,
}

/// Vertical linear gradient from `start_y` to `end_y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VerticalGradient {
    pub start_y: f64,
    pub end_y: f64,
    pub stops: [GradientStop; 4],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineSegment {
    pub from: Point,
    pub to: Point,
    pub thickness: f64,
    pub color: Argb,
}

/// Colors and proportions of the slide background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundStyle {
    pub edge_color: Argb,
    pub middle_color: Argb,
    pub line_color: Argb,
    pub blend_positions: [f64; 4],
    pub line_thickness_ratio: f64,
}

impl Default for BackgroundStyle {
    fn default() -> Self {
        Self {
            edge_color: BACKGROUND_EDGE_COLOR,
            middle_color: BACKGROUND_MIDDLE_COLOR,
            line_color: BACKGROUND_LINE_COLOR,
            blend_positions: BLEND_POSITIONS,
            line_thickness_ratio: LINE_THICKNESS_RATIO,
        }
    }
}

impl BackgroundStyle {
    fn stops(&self) -> [GradientStop; 4] {
        let colors = [
            self.edge_color,
            self.middle_color,
            self.middle_color,
            self.edge_color,
        ];
        let p = self.blend_positions;
        [
            GradientStop { offset: p[0], color: colors[0] },
            GradientStop { offset: p[1], color: colors[1] },
            GradientStop { offset: p[2], color: colors[2] },
            GradientStop { offset: p[3], color: colors[3] },
        ]
    }
}

/// Everything needed to paint the background between two anchors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlideBackground {
    /// `from` left, `from` right, `to` right, `to` left
    pub polygon: [Point; 4],
    pub gradient: VerticalGradient,
    pub centerline: LineSegment,
    pub bounds: Rect,
}

/// Background between `from` and `to`, gradient spanning the polygon's
/// own vertical extent.
pub fn build_background(
    from: AnchorSample,
    to: AnchorSample,
    note_height: f64,
    style: &BackgroundStyle,
) -> SlideBackground {
    let start_y = from.y.min(to.y);
    let end_y = from.y.max(to.y);
    build_background_with_span(from, to, start_y, end_y, note_height, style)
}

/// Background between `from` and `to` with an explicit gradient span.
///
/// Invisible steps split a slide into several polygons that should read
/// as one band; passing the surrounding visible anchors' `y` keeps the
/// edge color at the visible notes only.
pub fn build_background_with_span(
    from: AnchorSample,
    to: AnchorSample,
    gradient_start_y: f64,
    gradient_end_y: f64,
    note_height: f64,
    style: &BackgroundStyle,
) -> SlideBackground {
    let polygon = [
        Point::new(from.x, from.y),
        Point::new(from.x + from.width, from.y),
        Point::new(to.x + to.width, to.y),
        Point::new(to.x, to.y),
    ];

    let centerline = LineSegment {
        from: Point::new(from.x + from.width / 2.0, from.y),
        to: Point::new(to.x + to.width / 2.0, to.y),
        thickness: note_height * style.line_thickness_ratio,
        color: style.line_color,
    };

    let bounds = Rect {
        x: from.x.min(to.x),
        y: from.y.min(to.y),
        width: (from.x - to.x).abs() + from.width,
        height: (from.y - to.y).abs(),
    };

    SlideBackground {
        polygon,
        gradient: VerticalGradient {
            start_y: gradient_start_y,
            end_y: gradient_end_y,
            stops: style.stops(),
        },
        centerline,
        bounds,
    }
}

/// One background per consecutive anchor pair of `slide`, in chain order.
///
/// Each gradient reaches from the nearest visible anchor at or before the
/// pair to the nearest visible anchor at or after it (the last anchor if
/// no later one is visible).
pub fn slide_backgrounds<L: Layout + ?Sized>(
    slide: &Slide,
    layout: &L,
    style: &BackgroundStyle,
) -> Vec<SlideBackground> {
    let anchors = slide.anchors();
    let samples: Vec<AnchorSample> = anchors.iter().map(|a| layout.project(a)).collect();
    let note_height = layout.note_height();

    (1..samples.len())
        .map(|i| {
            // The start anchor is always visible, so this search succeeds.
            let grad_from = (0..i).rev().find(|&j| anchors[j].visible).unwrap_or(0);
            let grad_to = (i..anchors.len())
                .find(|&j| anchors[j].visible)
                .unwrap_or(anchors.len() - 1);
            let (y_a, y_b) = (samples[grad_from].y, samples[grad_to].y);
            build_background_with_span(
                samples[i - 1],
                samples[i],
                y_a.min(y_b),
                y_a.max(y_b),
                note_height,
                style,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LinearLayout;

    fn sample(x: f64, y: f64, width: f64) -> AnchorSample {
        AnchorSample { x, y, width }
    }

    #[test]
    fn polygon_joins_top_edges() {
        let bg = build_background(
            sample(10.0, 100.0, 40.0),
            sample(30.0, 20.0, 20.0),
            5.0,
            &BackgroundStyle::default(),
        );
        assert_eq!(
            bg.polygon,
            [
                Point::new(10.0, 100.0),
                Point::new(50.0, 100.0),
                Point::new(50.0, 20.0),
                Point::new(30.0, 20.0),
            ]
        );
        assert_eq!(bg.centerline.from, Point::new(30.0, 100.0));
        assert_eq!(bg.centerline.to, Point::new(40.0, 20.0));
        assert!((bg.centerline.thickness - 2.0).abs() < 1e-9);
        assert_eq!(
            bg.bounds,
            Rect { x: 10.0, y: 20.0, width: 60.0, height: 80.0 }
        );
    }

    #[test]
    fn gradient_is_edge_middle_middle_edge() {
        let bg = build_background(
            sample(0.0, 50.0, 10.0),
            sample(0.0, 0.0, 10.0),
            5.0,
            &BackgroundStyle::default(),
        );
        assert_eq!((bg.gradient.start_y, bg.gradient.end_y), (0.0, 50.0));
        let offsets: Vec<f64> = bg.gradient.stops.iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.0, 0.3, 0.7, 1.0]);
        let colors: Vec<Argb> = bg.gradient.stops.iter().map(|s| s.color).collect();
        assert_eq!(
            colors,
            vec![
                BACKGROUND_EDGE_COLOR,
                BACKGROUND_MIDDLE_COLOR,
                BACKGROUND_MIDDLE_COLOR,
                BACKGROUND_EDGE_COLOR,
            ]
        );
    }

    #[test]
    fn invisible_step_widens_gradient_span() {
        let mut slide = Slide::new();
        slide.set_position(0, 2).unwrap();
        slide.append_step(2, 0, 100, false).unwrap();
        slide.append_step(4, 0, 200, true).unwrap();

        let layout = LinearLayout { origin_y: 100.0, ..LinearLayout::default() };
        let bgs = slide_backgrounds(&slide, &layout, &BackgroundStyle::default());
        assert_eq!(bgs.len(), 2);
        // Both halves share the start-to-last-step span: y 50..100.
        for bg in &bgs {
            assert_eq!((bg.gradient.start_y, bg.gradient.end_y), (50.0, 100.0));
        }
        assert_eq!(bgs[0].polygon[3], Point::new(32.0, 75.0));
    }

    #[test]
    fn single_anchor_has_no_background() {
        let bgs = slide_backgrounds(&Slide::new(), &LinearLayout::default(), &BackgroundStyle::default());
        assert!(bgs.is_empty());
    }

    #[test]
    fn argb_hex_and_opacity() {
        assert_eq!(BACKGROUND_EDGE_COLOR.to_hex(), "#a62ca8");
        assert!((BACKGROUND_EDGE_COLOR.opacity() - 196.0 / 255.0).abs() < 1e-9);
    }
}
