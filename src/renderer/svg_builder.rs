//! SVG builder: accumulates SVG elements and produces the final string.

use super::constants::*;
use crate::geometry::{Argb, GradientStop, Point};

pub(super) struct SvgBuilder {
    defs: Vec<String>,
    elements: Vec<String>,
    min_x: f64,
    min_y: f64,
    width: f64,
    height: f64,
}

impl SvgBuilder {
    /// Canvas covering `width` × `height` starting at (`min_x`, `min_y`).
    pub(super) fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self {
            defs: Vec::new(),
            elements: Vec::new(),
            min_x,
            min_y,
            width,
            height,
        }
    }

    pub(super) fn build(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{:.1} {:.1} {:.1} {:.1}" width="{:.1}" height="{:.1}">"#,
            self.min_x, self.min_y, self.width, self.height, self.width, self.height
        );
        svg.push('\n');
        if !self.defs.is_empty() {
            svg.push_str("  <defs>\n");
            for def in &self.defs {
                svg.push_str("    ");
                svg.push_str(def);
                svg.push('\n');
            }
            svg.push_str("  </defs>\n");
        }
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    /// Register a vertical gradient in user space from `y1` to `y2`.
    pub(super) fn vertical_gradient(&mut self, id: &str, y1: f64, y2: f64, stops: &[GradientStop]) {
        let mut def = format!(
            r#"<linearGradient id="{}" gradientUnits="userSpaceOnUse" x1="0" y1="{:.1}" x2="0" y2="{:.1}">"#,
            id, y1, y2
        );
        for stop in stops {
            def.push_str(&format!(
                r#"<stop offset="{}" stop-color="{}" stop-opacity="{:.3}"/>"#,
                stop.offset,
                stop.color.to_hex(),
                stop.color.opacity()
            ));
        }
        def.push_str("</linearGradient>");
        self.defs.push(def);
    }

    pub(super) fn polygon(&mut self, points: &[Point], fill: &str) {
        let pts: Vec<String> = points
            .iter()
            .map(|p| format!("{:.1},{:.1}", p.x, p.y))
            .collect();
        self.elements.push(format!(
            r#"<polygon points="{}" fill="{}"/>"#,
            pts.join(" "),
            fill
        ));
    }

    pub(super) fn line(&mut self, from: Point, to: Point, color: &str, width: f64) {
        self.elements.push(format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{:.1}"/>"#,
            from.x, from.y, to.x, to.y, color, width
        ));
    }

    pub(super) fn translucent_line(&mut self, from: Point, to: Point, color: Argb, width: f64) {
        self.elements.push(format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-opacity="{:.3}" stroke-width="{:.1}"/>"#,
            from.x, from.y, to.x, to.y, color.to_hex(), color.opacity(), width
        ));
    }

    pub(super) fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str, stroke: &str, stroke_width: f64) {
        if stroke_width > 0.0 {
            self.elements.push(format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}" stroke="{}" stroke-width="{:.1}"/>"#,
                x, y, w, h, fill, stroke, stroke_width
            ));
        } else {
            self.elements.push(format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
                x, y, w, h, fill
            ));
        }
    }

    /// Note body: dark border around a light rounded fill.
    pub(super) fn note(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.elements.push(format!(
            r#"<rect class="note" x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" rx="{:.1}" fill="{}" stroke="{}" stroke-width="{:.1}"/>"#,
            x, y, w, h, NOTE_CORNER_RADIUS, NOTE_LIGHT_COLOR, NOTE_DARK_COLOR, NOTE_BORDER_WIDTH
        ));
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Empty SVG fallback
// ═══════════════════════════════════════════════════════════════════════

pub(super) fn empty_svg(message: &str) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 400 100\">\
         <text x=\"200\" y=\"50\" text-anchor=\"middle\" font-size=\"14\" fill=\"gray\">{}</text>\
         </svg>",
        message
    )
}
