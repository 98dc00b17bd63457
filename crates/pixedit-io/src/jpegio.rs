//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate (8-bit grayscale is
//! replicated to RGB) and writes baseline RGB JPEG with `jpeg-encoder`.

use crate::{IoError, IoResult};
use jpeg_decoder::PixelFormat;
use pixedit_core::{ImageFormat, Pix};
use std::io::{Read, Write};

/// Quality used for every JPEG save.
pub const JPEG_QUALITY: u8 = 90;

/// Read a JPEG image from a reader.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Pix> {
    let mut decoder = jpeg_decoder::Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing".to_string()))?;

    let width = u32::from(info.width);
    let height = u32::from(info.height);

    let rgb = match info.pixel_format {
        PixelFormat::RGB24 => data,
        PixelFormat::L8 => data.iter().flat_map(|&v| [v, v, v]).collect(),
        other => {
            return Err(IoError::DecodeError(format!(
                "unsupported JPEG pixel format: {:?}",
                other
            )));
        }
    };

    let mut pix_mut = Pix::from_rgb_bytes(width, height, &rgb)?.to_mut();
    pix_mut.set_informat(ImageFormat::Jpeg);
    Ok(pix_mut.into())
}

/// Write a `Pix` as RGB JPEG.
///
/// # Errors
///
/// Returns [`IoError::EncodeError`] if either dimension exceeds 65535,
/// the JPEG limit.
pub fn write_jpeg<W: Write>(pix: &Pix, mut writer: W) -> IoResult<()> {
    let width = u16::try_from(pix.width())
        .map_err(|_| IoError::EncodeError(format!("JPEG width too large: {}", pix.width())))?;
    let height = u16::try_from(pix.height())
        .map_err(|_| IoError::EncodeError(format!("JPEG height too large: {}", pix.height())))?;

    let mut jpeg_buf = Vec::new();
    let encoder = jpeg_encoder::Encoder::new(&mut jpeg_buf, JPEG_QUALITY);
    encoder
        .encode(&pix.to_rgb_bytes(), width, height, jpeg_encoder::ColorType::Rgb)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))?;

    writer.write_all(&jpeg_buf)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jpeg_roundtrip_is_close() {
        let mut pm = Pix::new(16, 16).unwrap().to_mut();
        for y in 0..16 {
            for x in 0..16 {
                pm.set_rgb(x, y, 200, 100, 50).unwrap();
            }
        }
        let pix: Pix = pm.into();

        let mut buf = Vec::new();
        write_jpeg(&pix, &mut buf).unwrap();
        assert_eq!(&buf[..2], &[0xFF, 0xD8]);

        let back = read_jpeg(buf.as_slice()).unwrap();
        assert_eq!((back.width(), back.height()), (16, 16));
        assert_eq!(back.informat(), ImageFormat::Jpeg);
        let diff = pix.count_pixel_diffs(&back).unwrap();
        assert!(diff.max_diff <= 8, "max diff {}", diff.max_diff);
    }

    #[test]
    fn test_jpeg_garbage() {
        assert!(matches!(
            read_jpeg(&b"\xFF\xD8garbage"[..]),
            Err(IoError::DecodeError(_))
        ));
    }
}
