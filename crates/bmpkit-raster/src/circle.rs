//! Annular circle drawing.
//!
//! The ring and the fill use two different membership rules on purpose. The
//! ring is a squared-distance band with inclusive bounds; the fill is a true
//! Euclidean distance test with a strict bound. The boundary pixels they
//! select differ, and that difference is part of the drawing contract, so
//! the two tests must not be unified.

use bmpkit_codec::Rgb;

use crate::canvas::Canvas;
use crate::error::ArgumentError;

/// Draw an annular ring centered at `(cx, cy)`, optionally filling the
/// interior.
///
/// `(cx, cy)` is in the buffer's native row order; a caller holding a
/// bottom-left-origin center flips it (`cy = height - y`) before calling.
/// Thickness widens the band geometrically: the ring spans
/// `radius - thickness / 2` to `radius + thickness / 2` (truncating integer
/// division, floored at zero).
///
/// # Errors
///
/// [`ArgumentError::Radius`] or [`ArgumentError::Thickness`] when the
/// respective parameter is not positive. Nothing is painted on error.
pub fn draw_annulus(
    canvas: &mut Canvas,
    cx: i32,
    cy: i32,
    radius: i32,
    thickness: i32,
    line_color: Rgb,
    fill: Option<Rgb>,
) -> Result<(), ArgumentError> {
    if radius <= 0 {
        return Err(ArgumentError::Radius(radius));
    }
    if thickness <= 0 {
        return Err(ArgumentError::Thickness(thickness));
    }

    let inner = (radius - thickness / 2).max(0);
    let outer = radius + thickness / 2;

    // Ring pass: squared-distance band, inclusive on both bounds. The
    // iteration range is pre-clipped to the frame and every pixel is
    // re-checked; the redundancy is harmless and kept.
    let min_x = (cx - outer - 1).max(0);
    let end_x = (cx + outer + 1).min(canvas.width());
    let min_y = (cy - outer - 1).max(0);
    let end_y = (cy + outer + 1).min(canvas.height());

    let inner_sq = i64::from(inner) * i64::from(inner);
    let outer_sq = i64::from(outer) * i64::from(outer);

    for y in min_y..end_y {
        for x in min_x..end_x {
            if x >= 0 && x < canvas.width() && y >= 0 && y < canvas.height() {
                let d2 = squared_distance(x - cx, y - cy);
                if d2 >= inner_sq && d2 <= outer_sq {
                    canvas.set(x, y, line_color);
                }
            }
        }
    }

    // Fill pass: true Euclidean distance, strictly inside the inner radius.
    if let Some(fill_color) = fill {
        for y in (cy - inner)..=(cy + inner) {
            for x in (cx - inner)..=(cx + inner) {
                let in_frame = x >= 0 && x < canvas.width() && y >= 0 && y < canvas.height();
                #[allow(clippy::cast_precision_loss)]
                let dist = (squared_distance(x - cx, y - cy) as f64).sqrt();
                if in_frame && dist < f64::from(inner) {
                    canvas.set(x, y, fill_color);
                }
            }
        }
    }

    Ok(())
}

fn squared_distance(dx: i32, dy: i32) -> i64 {
    i64::from(dx) * i64::from(dx) + i64::from(dy) * i64::from(dy)
}
