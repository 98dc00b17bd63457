//! BMP image format support
//!
//! Reads uncompressed Windows Bitmap files at 1, 4, 8 (palette), 24 and
//! 32 bpp, resolving palettes to RGB. Writes 24-bit bottom-up bitmaps.

use crate::{IoError, IoResult};
use pixedit_core::{ImageFormat, Pix, color};
use std::io::{Read, Write};

/// BMP file header size
const BMP_FILE_HEADER_SIZE: usize = 14;

/// BMP info header size (BITMAPINFOHEADER)
const BMP_INFO_HEADER_SIZE: u32 = 40;

fn le_u16(b: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([b[at], b[at + 1]])
}

fn le_u32(b: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([b[at], b[at + 1], b[at + 2], b[at + 3]])
}

fn le_i32(b: &[u8], at: usize) -> i32 {
    i32::from_le_bytes([b[at], b[at + 1], b[at + 2], b[at + 3]])
}

/// Bytes per row, padded to a 4-byte boundary.
fn row_stride(width: u32, bits_per_pixel: u16) -> usize {
    (width as usize * bits_per_pixel as usize).div_ceil(32) * 4
}

/// Discard `count` bytes of the input.
fn skip_bytes<R: Read>(reader: &mut R, count: u64) -> IoResult<()> {
    let skipped = std::io::copy(&mut reader.by_ref().take(count), &mut std::io::sink())
        .map_err(|e| IoError::DecodeError(format!("truncated BMP: {}", e)))?;
    if skipped < count {
        return Err(IoError::DecodeError("truncated BMP header".to_string()));
    }
    Ok(())
}

/// Read a BMP image
///
/// # Errors
///
/// Returns [`IoError::DecodeError`] for a bad signature, an unsupported
/// header, or pixel data shorter than the header's dimensions require.
pub fn read_bmp<R: Read>(mut reader: R) -> IoResult<Pix> {
    let truncated = |e: std::io::Error| IoError::DecodeError(format!("truncated BMP: {}", e));

    let mut file_header = [0u8; BMP_FILE_HEADER_SIZE];
    reader.read_exact(&mut file_header).map_err(truncated)?;

    if &file_header[0..2] != b"BM" {
        return Err(IoError::DecodeError("not a BMP file".to_string()));
    }
    let pixel_offset = le_u32(&file_header, 10) as usize;

    let mut info_header = [0u8; BMP_INFO_HEADER_SIZE as usize];
    reader.read_exact(&mut info_header).map_err(truncated)?;

    let header_size = le_u32(&info_header, 0);
    if header_size < BMP_INFO_HEADER_SIZE {
        return Err(IoError::DecodeError(format!(
            "unsupported BMP header size: {}",
            header_size
        )));
    }

    let width = le_i32(&info_header, 4);
    let height = le_i32(&info_header, 8);
    let planes = le_u16(&info_header, 12);
    if planes != 1 {
        return Err(IoError::DecodeError(format!(
            "unsupported number of planes: {}",
            planes
        )));
    }
    let bits_per_pixel = le_u16(&info_header, 14);
    let compression = le_u32(&info_header, 16);
    let colors_used = le_u32(&info_header, 32) as usize;

    // BI_RGB and BI_BITFIELDS with the default masks only
    if compression != 0 && compression != 3 {
        return Err(IoError::DecodeError(format!(
            "unsupported BMP compression: {}",
            compression
        )));
    }
    if !matches!(bits_per_pixel, 1 | 4 | 8 | 24 | 32) {
        return Err(IoError::DecodeError(format!(
            "unsupported BMP bit depth: {}",
            bits_per_pixel
        )));
    }

    let width = width.unsigned_abs();
    let top_down = height < 0;
    let height = height.unsigned_abs();

    skip_bytes(&mut reader, u64::from(header_size - BMP_INFO_HEADER_SIZE))?;

    let palette: Vec<u32> = if bits_per_pixel <= 8 {
        let max_colors = 1usize << bits_per_pixel;
        let num_colors = if colors_used == 0 {
            max_colors
        } else {
            colors_used.min(max_colors)
        };
        let mut raw = vec![0u8; num_colors * 4];
        reader.read_exact(&mut raw).map_err(truncated)?;
        raw.chunks_exact(4)
            .map(|q| color::compose_rgb(q[2], q[1], q[0]))
            .collect()
    } else {
        Vec::new()
    };

    let current_pos = BMP_FILE_HEADER_SIZE + header_size as usize + palette.len() * 4;
    if pixel_offset > current_pos {
        skip_bytes(&mut reader, (pixel_offset - current_pos) as u64)?;
    }

    let stride = row_stride(width, bits_per_pixel);
    let wanted = stride
        .checked_mul(height as usize)
        .ok_or_else(|| IoError::DecodeError(format!("invalid BMP size {}x{}", width, height)))?;
    let mut pixels = Vec::new();
    reader.read_to_end(&mut pixels).map_err(truncated)?;
    if pixels.len() < wanted {
        return Err(IoError::DecodeError(format!(
            "truncated BMP: {}x{} needs {} bytes of pixel data, found {}",
            width,
            height,
            wanted,
            pixels.len()
        )));
    }

    let pix = Pix::new(width, height)
        .map_err(|e| IoError::DecodeError(format!("invalid BMP header: {}", e)))?;
    let mut pix_mut = pix.to_mut();
    pix_mut.set_informat(ImageFormat::Bmp);

    let lookup = |index: u8| -> IoResult<u32> {
        palette.get(index as usize).copied().ok_or_else(|| {
            IoError::DecodeError(format!("BMP palette index {} out of range", index))
        })
    };

    for (row, row_buffer) in (0..height).zip(pixels.chunks_exact(stride)) {
        let y = if top_down { row } else { height - 1 - row };

        for x in 0..width {
            let xi = x as usize;
            let pixel = match bits_per_pixel {
                1 => lookup((row_buffer[xi / 8] >> (7 - (xi % 8))) & 1)?,
                4 => {
                    let byte = row_buffer[xi / 2];
                    lookup(if xi % 2 == 0 { byte >> 4 } else { byte & 0xF })?
                }
                8 => lookup(row_buffer[xi])?,
                24 => {
                    let idx = xi * 3;
                    color::compose_rgb(row_buffer[idx + 2], row_buffer[idx + 1], row_buffer[idx])
                }
                _ => {
                    let idx = xi * 4;
                    color::compose_rgb(row_buffer[idx + 2], row_buffer[idx + 1], row_buffer[idx])
                }
            };
            pix_mut.set_pixel_unchecked(x, y, pixel);
        }
    }

    Ok(pix_mut.into())
}

/// Write a BMP image as 24-bit bottom-up RGB
pub fn write_bmp<W: Write>(pix: &Pix, mut writer: W) -> IoResult<()> {
    let width = pix.width();
    let height = pix.height();
    let bits_per_pixel: u16 = 24;

    let stride = row_stride(width, bits_per_pixel);
    let pixel_data_size = stride * height as usize;
    let pixel_offset = BMP_FILE_HEADER_SIZE + BMP_INFO_HEADER_SIZE as usize;
    let file_size = u32::try_from(pixel_offset + pixel_data_size)
        .map_err(|_| IoError::EncodeError("image too large for BMP".to_string()))?;

    let mut header = Vec::with_capacity(pixel_offset);
    // File header
    header.extend_from_slice(b"BM");
    header.extend_from_slice(&file_size.to_le_bytes());
    header.extend_from_slice(&[0u8; 4]); // Reserved
    header.extend_from_slice(&(pixel_offset as u32).to_le_bytes());
    // Info header
    header.extend_from_slice(&BMP_INFO_HEADER_SIZE.to_le_bytes());
    header.extend_from_slice(&(width as i32).to_le_bytes());
    header.extend_from_slice(&(height as i32).to_le_bytes()); // Bottom-up
    header.extend_from_slice(&1u16.to_le_bytes()); // Planes
    header.extend_from_slice(&bits_per_pixel.to_le_bytes());
    header.extend_from_slice(&0u32.to_le_bytes()); // Compression
    header.extend_from_slice(&(pixel_data_size as u32).to_le_bytes());
    header.extend_from_slice(&0i32.to_le_bytes()); // X pixels per meter
    header.extend_from_slice(&0i32.to_le_bytes()); // Y pixels per meter
    header.extend_from_slice(&0u32.to_le_bytes()); // Colors used
    header.extend_from_slice(&0u32.to_le_bytes()); // Important colors
    writer.write_all(&header)?;

    let mut row_buffer = vec![0u8; stride];
    for row in 0..height {
        let y = height - 1 - row;
        for (x, &pixel) in pix.row_data(y).iter().enumerate() {
            let (r, g, b) = color::extract_rgb(pixel);
            let idx = x * 3;
            row_buffer[idx] = b;
            row_buffer[idx + 1] = g;
            row_buffer[idx + 2] = r;
        }
        writer.write_all(&row_buffer)?;
    }

    Ok(())
}
