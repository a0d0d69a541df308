//! Error taxonomy for the codec.
//!
//! Every failure is fatal to the surrounding command: there is no retry and
//! no partial recovery. The three categories map to distinct process exit
//! codes in the CLI, so they must stay distinguishable here.

use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while decoding or encoding a BMP file.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The file could not be opened, read, or written.
    #[error("file error on '{}': {source}", .path.display())]
    File {
        /// Path of the file being accessed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The file is not an uncompressed 24-bit BMP v3.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The pixel buffer could not be allocated.
    #[error("memory allocation failed for the pixel buffer")]
    Resource(#[from] TryReserveError),
}

impl CodecError {
    /// Wrap an I/O failure with the path it occurred on.
    #[must_use]
    pub fn file(path: &std::path::Path, source: io::Error) -> Self {
        Self::File {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A header field that rules the file out as an uncompressed 24-bit BMP v3.
///
/// Each variant carries the offending value so the message can name it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// The first two bytes are not the `BM` magic.
    #[error("not a BMP file: bad signature 0x{0:04x}")]
    Signature(u16),

    /// The info header is not the 40-byte BITMAPINFOHEADER.
    #[error("unsupported info header size {0} (expected 40)")]
    HeaderSize(u32),

    /// The pixel format is not 24 bits per pixel.
    #[error("unsupported bit depth {0} (only 24-bit pixels are handled)")]
    BitDepth(u16),

    /// The pixel data is compressed.
    #[error("compressed pixel data is not supported (compression mode {0})")]
    Compression(u32),
}
