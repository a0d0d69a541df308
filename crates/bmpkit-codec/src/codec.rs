//! Decode and encode entry points.
//!
//! Decode reads the two fixed headers, validates the four fields that rule a
//! file in or out, then consumes `height` rows of `width * 3` pixel bytes
//! plus row padding. Encode is the mirror image, except padding bytes are
//! re-emitted as zeros: the originals were discarded at decode time.
//!
//! File handles are scoped to each call, so they close on every exit path.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::{CodecError, FormatError};
use crate::header::{BITS_PER_PIXEL, BMP_SIGNATURE, FileHeader, INFO_HEADER_SIZE, InfoHeader};
use crate::image::{Image, Rgb};

/// Number of padding bytes appended to each file row of `width` pixels.
///
/// Rows are padded to the next multiple of 4 bytes, so the result is always
/// in `0..=3`.
#[must_use]
pub const fn padding(width: u32) -> usize {
    (4 - (width as usize * 3) % 4) % 4
}

/// Check the four header fields that decide whether the codec can handle
/// the file. Everything else is passed through unvalidated.
const fn validate(file_header: &FileHeader, info_header: &InfoHeader) -> Result<(), FormatError> {
    if info_header.header_size != INFO_HEADER_SIZE {
        return Err(FormatError::HeaderSize(info_header.header_size));
    }
    if info_header.bits_per_pixel != BITS_PER_PIXEL {
        return Err(FormatError::BitDepth(info_header.bits_per_pixel));
    }
    if file_header.signature != BMP_SIGNATURE {
        return Err(FormatError::Signature(file_header.signature));
    }
    if info_header.compression != 0 {
        return Err(FormatError::Compression(info_header.compression));
    }
    Ok(())
}

/// Decode the BMP file at `path` into an in-memory [`Image`].
///
/// Rows are stored in the order they occur in the file; padding bytes are
/// consumed and discarded.
///
/// # Errors
///
/// - [`CodecError::File`] if the file cannot be opened or a read comes up
///   short.
/// - [`CodecError::Format`] if the headers describe anything other than an
///   uncompressed 24-bit BMP v3.
/// - [`CodecError::Resource`] if the pixel buffer cannot be allocated.
pub fn decode(path: &Path) -> Result<Image, CodecError> {
    let file = File::open(path).map_err(|e| CodecError::file(path, e))?;
    let mut reader = BufReader::new(file);

    let file_header = FileHeader::read_from(&mut reader).map_err(|e| CodecError::file(path, e))?;
    let info_header = InfoHeader::read_from(&mut reader).map_err(|e| CodecError::file(path, e))?;
    validate(&file_header, &info_header)?;

    let width = info_header.width as usize;
    let height = info_header.height as usize;
    let row_bytes = width * 3 + padding(info_header.width);

    let mut pixels = Vec::new();
    pixels.try_reserve_exact(width * height)?;
    let mut row = Vec::new();
    row.try_reserve_exact(row_bytes)?;
    row.resize(row_bytes, 0);

    for _ in 0..height {
        reader
            .read_exact(&mut row)
            .map_err(|e| CodecError::file(path, e))?;
        for triplet in row[..width * 3].chunks_exact(3) {
            pixels.push(Rgb {
                b: triplet[0],
                g: triplet[1],
                r: triplet[2],
            });
        }
    }

    Ok(Image::from_parts(file_header, info_header, pixels))
}

/// Encode `image` to the file at `path`, creating or truncating it.
///
/// Headers go out byte-for-byte as decoded. `file_size` and `pixel_offset`
/// are NOT recomputed, even if they are stale relative to the emitted bytes.
/// Each row is `width * 3` pixel bytes in blue-green-red order followed by
/// freshly zeroed padding.
///
/// # Errors
///
/// [`CodecError::File`] if the file cannot be created or a write fails.
pub fn encode(path: &Path, image: &Image) -> Result<(), CodecError> {
    let file = File::create(path).map_err(|e| CodecError::file(path, e))?;
    let mut writer = BufWriter::new(file);

    let io_err = |e| CodecError::file(path, e);
    image.file_header().write_to(&mut writer).map_err(io_err)?;
    image.info_header().write_to(&mut writer).map_err(io_err)?;

    let width = image.width() as usize;
    let pad = [0_u8; 3];
    let pad = &pad[..padding(image.width())];
    for y in 0..image.height() as usize {
        for px in &image.pixels()[y * width..(y + 1) * width] {
            writer.write_all(&[px.b, px.g, px.r]).map_err(io_err)?;
        }
        writer.write_all(pad).map_err(io_err)?;
    }

    writer.flush().map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::padding;

    #[test]
    fn test_padding_cycle() {
        assert_eq!(padding(1), 1);
        assert_eq!(padding(2), 2);
        assert_eq!(padding(3), 3);
        assert_eq!(padding(4), 0);
        assert_eq!(padding(5), 1);
        assert_eq!(padding(400), 0);
    }
}
