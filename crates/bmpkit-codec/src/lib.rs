//! BMP v3 binary codec: headers, pixel buffer, decode and encode.
//!
//! # Scope
//!
//! This crate implements:
//! - **Header layout** ([BITMAPFILEHEADER](https://learn.microsoft.com/en-us/windows/win32/api/wingdi/ns-wingdi-bitmapfileheader),
//!   [BITMAPINFOHEADER](https://learn.microsoft.com/en-us/windows/win32/api/wingdi/ns-wingdi-bitmapinfoheader))
//!   - Fixed 14-byte file header and 40-byte info header
//!   - Little-endian field I/O with no inter-field padding
//! - **Decoding** - file bytes to an in-memory [`Image`]
//!   - Validation of signature, header size, bit depth, and compression
//!   - Row padding stripped during I/O, never stored
//! - **Encoding** - an [`Image`] back to file bytes
//!   - Headers written back exactly as decoded
//!   - Row padding re-emitted as zero bytes
//!
//! # Not Implemented
//!
//! - Compressed pixel data (BI_RLE8, BI_RLE4, BI_BITFIELDS)
//! - Bit depths other than 24
//! - Color tables / indexed color
//! - Bottom-up vs. top-down reinterpretation: rows keep file order

/// Decode and encode entry points.
pub mod codec;
/// Error taxonomy for decode and encode failures.
pub mod error;
/// File and info header layouts.
pub mod header;
/// The decoded image and its pixel type.
pub mod image;

pub use codec::{decode, encode, padding};
pub use error::{CodecError, FormatError};
pub use header::{FileHeader, InfoHeader};
pub use image::{Image, Rgb};
