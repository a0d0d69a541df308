//! Drawing operations over decoded BMP images.
//!
//! # Scope
//!
//! This crate implements:
//! - **Canvas** - bounds-checked pixel addressing over an image buffer
//! - **Circle** - annular ring drawing with optional interior fill
//! - **Grid** - axis-aligned divider lines splitting the frame into parts
//! - **Filter** - image-wide override of one color channel
//!
//! Exactly one operation runs per decoded image; each mutates the buffer in
//! place and leaves the headers untouched.
//!
//! # Coordinate conventions
//!
//! The two drawing components deliberately disagree about the vertical axis.
//! [`circle::draw_annulus`] addresses buffer rows directly and expects the
//! caller to have flipped a bottom-left-origin center into row order first.
//! [`grid::draw_line`] takes bottom-left-origin coordinates and performs its
//! own `height - y` flip internally. Unifying the two would change which
//! pixels are painted, so both conventions are kept as-is.
//!
//! # Not Implemented
//!
//! - Lines at arbitrary angles (grid lines are axis-aligned only)
//! - Anti-aliasing

/// Pixel addressing over an image buffer.
pub mod canvas;
/// Annular circle drawing.
pub mod circle;
/// Argument validation errors shared by all operations.
pub mod error;
/// Image-wide color channel override.
pub mod filter;
/// Grid division and axis-aligned line drawing.
pub mod grid;

pub use canvas::Canvas;
pub use error::ArgumentError;
pub use filter::Channel;
