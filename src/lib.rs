//! slidelib: slide (chained long note) model for lane-grid chart editors.
//!
//! A slide is a start note plus an ordered chain of steps, each placed
//! relative to the start. The crate validates every edit against the lane
//! grid, mirrors slides, and describes the background band drawn between
//! consecutive notes.
//!
//! # Example
//! ```
//! use slidelib::{Slide, PositionError};
//!
//! let mut slide = Slide::new();
//! slide.set_position(2, 4).unwrap();
//! slide.append_step(3, -1, 480, true).unwrap();
//! assert_eq!(slide.set_position(14, 4), Err(PositionError::InvalidLaneIndex));
//! assert_eq!(slide.duration(), Ok(480));
//!
//! slide.flip();
//! assert_eq!(slide.start_lane_index(), 10);
//! ```

pub mod error;
pub mod geometry;
pub mod layout;
pub mod mirror;
pub mod model;
pub mod renderer;
pub mod slide;
pub mod validator;

pub use error::{Error, PositionError, Result};
pub use geometry::{
    build_background, build_background_with_span, slide_backgrounds, AnchorSample,
    BackgroundStyle, SlideBackground,
};
pub use layout::{Layout, LinearLayout};
pub use model::*;
pub use renderer::{render_slide_to_svg, render_slide_to_svg_with_style};
pub use slide::StepMut;
pub use validator::{validate_chain, validate_step_local, validate_tick_offset};

/// Parse a slide from its JSON persistence record on the standard grid.
pub fn slide_from_json(json: &str) -> Result<Slide> {
    slide_from_json_on_grid(json, LaneGrid::default())
}

/// Parse a slide from its JSON persistence record on a custom grid.
pub fn slide_from_json_on_grid(json: &str, grid: LaneGrid) -> Result<Slide> {
    let record: SlideRecord = serde_json::from_str(json)?;
    Ok(Slide::from_record(record, grid)?)
}

/// Convert a slide to its JSON persistence record.
pub fn slide_to_json(slide: &Slide) -> Result<String> {
    Ok(serde_json::to_string_pretty(&SlideRecord::from(slide))?)
}

/// Background geometry for every anchor pair, as JSON.
pub fn slide_backgrounds_to_json<L: Layout + ?Sized>(slide: &Slide, layout: &L) -> Result<String> {
    let backgrounds = slide_backgrounds(slide, layout, &BackgroundStyle::default());
    Ok(serde_json::to_string_pretty(&backgrounds)?)
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI for host editors
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

unsafe fn json_arg<'a>(json: *const c_char) -> Option<&'a str> {
    if json.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(json) }.to_str().ok()
}

fn into_c_string(s: String) -> *mut c_char {
    CString::new(s)
        .map(CString::into_raw)
        .unwrap_or(std::ptr::null_mut())
}

/// Mirror a slide given as a JSON record and return the mirrored record.
/// The caller must free the returned string with `slidelib_free_string`.
/// Returns null if the input is not a valid slide.
///
/// # Safety
/// `json` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn slidelib_flip_json(json: *const c_char) -> *mut c_char {
    let Some(json) = (unsafe { json_arg(json) }) else {
        return std::ptr::null_mut();
    };

    let flipped = slide_from_json(json).and_then(|s| slide_to_json(&s.flipped()));
    match flipped {
        Ok(out) => into_c_string(out),
        Err(e) => {
            log::debug!("slidelib_flip_json failed: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Check a slide JSON record. Returns `{"ok":true}` or
/// `{"ok":false,"error":"..."}`; null only if `json` itself is unusable.
/// The caller must free the returned string with `slidelib_free_string`.
///
/// # Safety
/// `json` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn slidelib_validate_json(json: *const c_char) -> *mut c_char {
    let Some(json) = (unsafe { json_arg(json) }) else {
        return std::ptr::null_mut();
    };

    let status = match slide_from_json(json) {
        Ok(_) => serde_json::json!({ "ok": true }),
        Err(e) => serde_json::json!({ "ok": false, "error": e.to_string() }),
    };
    into_c_string(status.to_string())
}

/// Render a slide JSON record to an SVG preview.
/// Non-positive scale arguments fall back to the preview defaults.
/// The caller must free the returned string with `slidelib_free_string`.
///
/// # Safety
/// `json` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn slidelib_render_svg(
    json: *const c_char,
    lane_width: f64,
    pixels_per_tick: f64,
    note_height: f64,
) -> *mut c_char {
    let Some(json) = (unsafe { json_arg(json) }) else {
        return std::ptr::null_mut();
    };

    let defaults = LinearLayout::default();
    let pick = |v: f64, d: f64| if v > 0.0 { v } else { d };
    let layout = LinearLayout {
        lane_width: pick(lane_width, defaults.lane_width),
        pixels_per_tick: pick(pixels_per_tick, defaults.pixels_per_tick),
        note_height: pick(note_height, defaults.note_height),
        origin_y: defaults.origin_y,
    };

    match slide_from_json(json) {
        Ok(slide) => into_c_string(render_slide_to_svg(&slide, &layout)),
        Err(e) => {
            log::debug!("slidelib_render_svg failed: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Free a string previously returned by slidelib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a slidelib function, or null.
#[no_mangle]
pub unsafe extern "C" fn slidelib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
