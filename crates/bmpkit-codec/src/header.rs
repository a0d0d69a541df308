//! BMP header layouts.
//!
//! [BITMAPFILEHEADER](https://learn.microsoft.com/en-us/windows/win32/api/wingdi/ns-wingdi-bitmapfileheader)
//! and [BITMAPINFOHEADER](https://learn.microsoft.com/en-us/windows/win32/api/wingdi/ns-wingdi-bitmapinfoheader)
//! as they sit on disk: little-endian fields, no inter-field padding, 14 and
//! 40 bytes respectively.
//!
//! Both headers are pass-through data. Apart from width and height nothing in
//! them drives the editor, and encode writes every field back exactly as it
//! was decoded, even when `file_size` or `pixel_offset` no longer match the
//! bytes actually emitted.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Read, Write};

/// The `BM` magic as a little-endian `u16`.
pub const BMP_SIGNATURE: u16 = 0x4D42;

/// On-disk size of [`InfoHeader`], and the value its `header_size` field
/// must hold for a BMP v3 file.
pub const INFO_HEADER_SIZE: u32 = 40;

/// The only bit depth the codec handles.
pub const BITS_PER_PIXEL: u16 = 24;

/// The 14-byte BITMAPFILEHEADER.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    /// File type magic; `0x4D42` (`BM`) for bitmaps.
    pub signature: u16,
    /// Total file size in bytes as recorded by the producer.
    pub file_size: u32,
    /// Reserved; preserved verbatim, not interpreted.
    pub reserved1: u16,
    /// Reserved; preserved verbatim, not interpreted.
    pub reserved2: u16,
    /// Byte offset from the start of the file to the pixel array.
    pub pixel_offset: u32,
}

impl FileHeader {
    /// Read the header from the current position of `reader`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error on a short or failed read.
    pub fn read_from<R: Read>(reader: &mut R) -> io::Result<Self> {
        Ok(Self {
            signature: reader.read_u16::<LittleEndian>()?,
            file_size: reader.read_u32::<LittleEndian>()?,
            reserved1: reader.read_u16::<LittleEndian>()?,
            reserved2: reader.read_u16::<LittleEndian>()?,
            pixel_offset: reader.read_u32::<LittleEndian>()?,
        })
    }

    /// Write the header to `writer` in on-disk layout.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error on a failed write.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_u16::<LittleEndian>(self.signature)?;
        writer.write_u32::<LittleEndian>(self.file_size)?;
        writer.write_u16::<LittleEndian>(self.reserved1)?;
        writer.write_u16::<LittleEndian>(self.reserved2)?;
        writer.write_u32::<LittleEndian>(self.pixel_offset)
    }
}

/// The 40-byte BITMAPINFOHEADER.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoHeader {
    /// Size of this header; 40 for BMP v3.
    pub header_size: u32,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Color plane count; 1 in every real file.
    pub planes: u16,
    /// Color depth; the codec only handles 24.
    pub bits_per_pixel: u16,
    /// Compression mode; 0 means uncompressed.
    pub compression: u32,
    /// Size of the pixel array in bytes as recorded by the producer.
    pub image_size: u32,
    /// Horizontal resolution in pixels per meter.
    pub x_pixels_per_meter: u32,
    /// Vertical resolution in pixels per meter.
    pub y_pixels_per_meter: u32,
    /// Number of palette colors; 0 for 24-bit files.
    pub colors_used: u32,
    /// Number of important palette colors; 0 means all.
    pub important_colors: u32,
}

impl InfoHeader {
    /// Read the header from the current position of `reader`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error on a short or failed read.
    pub fn read_from<R: Read>(reader: &mut R) -> io::Result<Self> {
        Ok(Self {
            header_size: reader.read_u32::<LittleEndian>()?,
            width: reader.read_u32::<LittleEndian>()?,
            height: reader.read_u32::<LittleEndian>()?,
            planes: reader.read_u16::<LittleEndian>()?,
            bits_per_pixel: reader.read_u16::<LittleEndian>()?,
            compression: reader.read_u32::<LittleEndian>()?,
            image_size: reader.read_u32::<LittleEndian>()?,
            x_pixels_per_meter: reader.read_u32::<LittleEndian>()?,
            y_pixels_per_meter: reader.read_u32::<LittleEndian>()?,
            colors_used: reader.read_u32::<LittleEndian>()?,
            important_colors: reader.read_u32::<LittleEndian>()?,
        })
    }

    /// Write the header to `writer` in on-disk layout.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error on a failed write.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_u32::<LittleEndian>(self.header_size)?;
        writer.write_u32::<LittleEndian>(self.width)?;
        writer.write_u32::<LittleEndian>(self.height)?;
        writer.write_u16::<LittleEndian>(self.planes)?;
        writer.write_u16::<LittleEndian>(self.bits_per_pixel)?;
        writer.write_u32::<LittleEndian>(self.compression)?;
        writer.write_u32::<LittleEndian>(self.image_size)?;
        writer.write_u32::<LittleEndian>(self.x_pixels_per_meter)?;
        writer.write_u32::<LittleEndian>(self.y_pixels_per_meter)?;
        writer.write_u32::<LittleEndian>(self.colors_used)?;
        writer.write_u32::<LittleEndian>(self.important_colors)
    }
}
