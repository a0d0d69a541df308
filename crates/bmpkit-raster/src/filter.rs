//! Image-wide color channel override.

use bmpkit_codec::Rgb;
use strum_macros::{Display, EnumString};

use crate::canvas::Canvas;
use crate::error::ArgumentError;

/// One of the three color components of a pixel.
///
/// Parses from and displays as the lowercase channel name, matching the
/// `--component_name` values the CLI accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Channel {
    /// The red component.
    Red,
    /// The green component.
    Green,
    /// The blue component.
    Blue,
}

/// Overwrite `channel` with `value` on every pixel, leaving the other two
/// components untouched. An empty frame is a no-op.
///
/// # Errors
///
/// [`ArgumentError::ChannelValue`] when `value` is outside `0..=255`,
/// checked before any pixel is touched.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn apply(canvas: &mut Canvas, channel: Channel, value: i32) -> Result<(), ArgumentError> {
    if !(0..=255).contains(&value) {
        return Err(ArgumentError::ChannelValue(value));
    }
    let value = value as u8;

    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            if let Some(mut px) = canvas.get(x, y) {
                match channel {
                    Channel::Red => px.r = value,
                    Channel::Green => px.g = value,
                    Channel::Blue => px.b = value,
                }
                canvas.set(x, y, px);
            }
        }
    }

    Ok(())
}
