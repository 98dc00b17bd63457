//! ASCII PPM (P3) format support
//!
//! The plain pixmap layout is:
//!
//! ```text
//! P3
//! <width> <height>
//! <maxval>
//! r g b r g b ...
//! ```
//!
//! Lines whose first character is `#` are dropped before tokenizing. The
//! binary `P6` variant is rejected. The max-value token must be present but
//! does not rescale samples; every sample must already lie in `[0, 255]`.

use crate::{IoError, IoResult};
use pixedit_core::{ImageFormat, Pix, color};
use std::io::{BufWriter, Read, Write};

/// Magic token of the plain (ASCII) pixmap.
const PPM_ASCII_MAGIC: &str = "P3";

/// Magic token of the raw (binary) pixmap, which is refused.
const PPM_RAW_MAGIC: &str = "P6";

/// Read an ASCII PPM image.
///
/// # Errors
///
/// Returns [`IoError::DecodeError`] for a `P6` header line, a wrong magic
/// token, missing or non-numeric header fields, zero dimensions, too few
/// samples, or samples outside `[0, 255]`.
pub fn read_pnm<R: Read>(mut reader: R) -> IoResult<Pix> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| IoError::DecodeError(format!("unreadable PPM text: {}", e)))?;

    let mut tokens = Vec::new();
    for line in text.lines() {
        if line.starts_with('#') {
            continue;
        }
        if line.trim() == PPM_RAW_MAGIC {
            return Err(IoError::DecodeError("raw formatting unsupported".to_string()));
        }
        tokens.extend(line.split_whitespace());
    }
    let mut tokens = tokens.into_iter();

    match tokens.next() {
        Some(PPM_ASCII_MAGIC) => {}
        Some(other) => {
            return Err(IoError::DecodeError(format!(
                "invalid PPM file: expected {} magic, found '{}'",
                PPM_ASCII_MAGIC, other
            )));
        }
        None => return Err(IoError::DecodeError("empty PPM file".to_string())),
    }

    let width: u32 = parse_token(tokens.next(), "width")?;
    let height: u32 = parse_token(tokens.next(), "height")?;
    let _maxval: u32 = parse_token(tokens.next(), "max value")?;

    let wanted = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(3))
        .ok_or_else(|| IoError::DecodeError(format!("invalid PPM size {}x{}", width, height)))?;
    if tokens.len() < wanted {
        return Err(IoError::DecodeError(format!(
            "PPM header declares {}x{} but only {} samples follow",
            width,
            height,
            tokens.len()
        )));
    }

    let pix = Pix::new(width, height)
        .map_err(|e| IoError::DecodeError(format!("invalid PPM header: {}", e)))?;
    let mut pix_mut = pix.to_mut();
    pix_mut.set_informat(ImageFormat::Ppm);

    for (i, pixel) in pix_mut.data_mut().iter_mut().enumerate() {
        let mut rgb = [0u8; 3];
        for sample in rgb.iter_mut() {
            let value: i64 = parse_token(tokens.next(), "sample")?;
            *sample = u8::try_from(value).map_err(|_| {
                IoError::DecodeError(format!(
                    "sample {} at pixel {} outside 0..=255",
                    value, i
                ))
            })?;
        }
        *pixel = color::from_array(rgb);
    }

    Ok(pix_mut.into())
}

fn parse_token<T: std::str::FromStr>(token: Option<&str>, what: &str) -> IoResult<T> {
    let token =
        token.ok_or_else(|| IoError::DecodeError(format!("unexpected end of PPM data ({})", what)))?;
    token
        .parse()
        .map_err(|_| IoError::DecodeError(format!("invalid PPM {}: '{}'", what, token)))
}

/// Write a `Pix` as ASCII PPM.
///
/// The header max value is always 255: channels are 8-bit and the reader
/// refuses anything larger. Every sample is written on its own line, R, G, B
/// per pixel in row-major order.
pub fn write_pnm<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    let mut out = BufWriter::new(writer);
    write!(
        out,
        "{}\n{} {}\n{}\n",
        PPM_ASCII_MAGIC,
        pix.width(),
        pix.height(),
        color::MAX_CHANNEL
    )?;
    for &pixel in pix.data() {
        let (r, g, b) = color::extract_rgb(pixel);
        write!(out, "{}\n{}\n{}\n", r, g, b)?;
    }
    out.flush()?;
    Ok(())
}
