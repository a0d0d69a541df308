//! Grid division and axis-aligned line drawing.
//!
//! Thickness here means `thickness + 1` parallel one-pixel passes, which is
//! a different notion from the circle's geometric band widening. The two
//! components keep separate thickness handling for that reason.

use bmpkit_codec::Rgb;

use crate::canvas::Canvas;
use crate::error::ArgumentError;

/// Split the frame into `count_x` by `count_y` parts by drawing divider
/// lines.
///
/// Vertical dividers land at `x = k * (width / count_x)` for
/// `k = 1..count_x - 1` and span the full height; horizontal dividers
/// likewise at `y = k * (height / count_y)`. The division is integer, so
/// parts are not perfectly even when the frame size is not a multiple of the
/// count.
///
/// # Errors
///
/// [`ArgumentError::CountX`], [`ArgumentError::CountY`], or
/// [`ArgumentError::Thickness`] when the respective parameter is out of
/// domain. Nothing is painted on error.
pub fn divide(
    canvas: &mut Canvas,
    count_x: i32,
    count_y: i32,
    thickness: i32,
    line_color: Rgb,
) -> Result<(), ArgumentError> {
    if count_x <= 1 {
        return Err(ArgumentError::CountX(count_x));
    }
    if count_y <= 1 {
        return Err(ArgumentError::CountY(count_y));
    }
    if thickness <= 0 {
        return Err(ArgumentError::Thickness(thickness));
    }

    let width = canvas.width();
    let height = canvas.height();

    let step_x = width / count_x;
    let mut x = step_x;
    for _ in 1..count_x {
        draw_line(canvas, x, height, x, 0, thickness, line_color);
        x += step_x;
    }

    let step_y = height / count_y;
    let mut y = step_y;
    for _ in 1..count_y {
        draw_line(canvas, 0, y, width, y, thickness, line_color);
        y += step_y;
    }

    Ok(())
}

/// Draw an axis-aligned segment in bottom-left-origin coordinates.
///
/// The `height - y` flip into buffer rows happens here. A vertical segment
/// (`x0 == x1`) paints columns `x0 - j` for `j` in `0..=thickness`; a
/// horizontal one (`y0 == y1`) paints rows `height - y0 + j`.
///
/// Silent no-op cases, by contract rather than error: any negative
/// coordinate, a non-positive thickness, and a segment that is not
/// axis-aligned. These sit below [`divide`]'s fatal precondition checks and
/// deliberately behave differently.
pub fn draw_line(
    canvas: &mut Canvas,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    thickness: i32,
    color: Rgb,
) {
    if x0 < 0 || y0 < 0 || x1 < 0 || y1 < 0 || thickness <= 0 {
        return;
    }

    let height = canvas.height();

    if x0 == x1 {
        let (y_min, y_max) = if y0 > y1 { (y1, y0) } else { (y0, y1) };
        for y in y_min..=y_max {
            for j in 0..=thickness {
                canvas.set(x0 - j, height - y, color);
            }
        }
    } else if y0 == y1 {
        let (x_min, x_max) = if x0 > x1 { (x1, x0) } else { (x0, x1) };
        for x in x_min..=x_max {
            for j in 0..=thickness {
                canvas.set(x, height - y0 + j, color);
            }
        }
    }
}
