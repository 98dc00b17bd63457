//! pixedit-io - Image I/O for pixedit
//!
//! Reads and writes images in the supported formats:
//!
//! - PPM (plain ASCII `P3`), always available
//! - BMP (feature `bmp`)
//! - PNG (feature `png-format`)
//! - JPEG (feature `jpeg`)
//!
//! The format is always chosen from the textual extension, never sniffed
//! from the data. A codec that was disabled at build time reports
//! [`IoError::UnsupportedFormat`].

pub mod error;
pub mod format;
pub mod pnmio;

#[cfg(feature = "bmp")]
pub mod bmpio;

#[cfg(feature = "jpeg")]
pub mod jpegio;

#[cfg(feature = "png-format")]
pub mod pngio;

pub use error::{IoError, IoResult};
pub use format::{EncodePolicy, extension_of, format_from_extension, format_from_path};
pub use pixedit_core::{ImageFormat, SUPPORTED_EXTENSIONS};

use pixedit_core::Pix;
use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;
use tracing::trace;

const TARGET: &str = "pixedit_io";

/// Read an image from a file, choosing the decoder from its extension.
///
/// # Errors
///
/// [`IoError::UnsupportedFormat`] for an unknown extension (checked before
/// the file is opened), [`IoError::Io`] if the file cannot be read, and
/// [`IoError::DecodeError`] for malformed data.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let path = path.as_ref();
    let format = format_from_path(path)?;
    let data = std::fs::read(path)?;
    read_image_mem(&data, format)
}

/// Decode an in-memory image of the given format.
pub fn read_image_mem(data: &[u8], format: ImageFormat) -> IoResult<Pix> {
    trace!(target: TARGET, ?format, len = data.len(), "decode");
    match format {
        ImageFormat::Ppm => pnmio::read_pnm(data),

        #[cfg(feature = "bmp")]
        ImageFormat::Bmp => bmpio::read_bmp(data),

        #[cfg(feature = "png-format")]
        ImageFormat::Png => pngio::read_png(Cursor::new(data)),

        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpegio::read_jpeg(data),

        #[allow(unreachable_patterns)]
        other => Err(unsupported(other)),
    }
}

/// Encode an image in the given format to a writer.
pub fn write_image<W: Write>(pix: &Pix, writer: W, format: ImageFormat) -> IoResult<()> {
    trace!(
        target: TARGET,
        ?format,
        width = pix.width(),
        height = pix.height(),
        "encode"
    );
    match format {
        ImageFormat::Ppm => pnmio::write_pnm(pix, writer),

        #[cfg(feature = "bmp")]
        ImageFormat::Bmp => bmpio::write_bmp(pix, writer),

        #[cfg(feature = "png-format")]
        ImageFormat::Png => pngio::write_png(pix, writer),

        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpegio::write_jpeg(pix, writer),

        #[allow(unreachable_patterns)]
        other => Err(unsupported(other)),
    }
}

/// Encode an image in the given format to memory.
pub fn write_image_mem(pix: &Pix, format: ImageFormat) -> IoResult<Vec<u8>> {
    write_image_mem_with(pix, format, EncodePolicy::AsRequested)
}

/// Encode an image to memory, letting `policy` pick the binary encoder.
pub fn write_image_mem_with(
    pix: &Pix,
    format: ImageFormat,
    policy: EncodePolicy,
) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image(pix, Cursor::new(&mut buffer), policy.resolve(format))?;
    Ok(buffer)
}

/// Write an image to a file, choosing the encoder from its extension.
pub fn write_image_file<P: AsRef<Path>>(pix: &Pix, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let format = format_from_path(path)?;
    let mut writer = BufWriter::new(File::create(path)?);
    write_image(pix, &mut writer, format)?;
    writer.flush()?;
    Ok(())
}

fn unsupported(format: ImageFormat) -> IoError {
    IoError::UnsupportedFormat(format!("{:?} support not enabled", format))
}
