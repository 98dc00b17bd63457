//! Format selection
//!
//! Formats are chosen from the textual file extension (leading dot,
//! case-sensitive), never from the bytes themselves. [`EncodePolicy`]
//! decides which binary encoder actually runs on save.

use crate::{IoError, IoResult};
use pixedit_core::ImageFormat;
use std::path::Path;

/// Which encoder runs when a binary format is saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodePolicy {
    /// Encode with the codec matching the requested extension.
    #[default]
    AsRequested,
    /// Encode every binary save with one fixed codec, whatever extension
    /// was requested. ASCII `.ppm` saves are unaffected.
    Fixed(ImageFormat),
}

impl EncodePolicy {
    /// Resolve the format that will actually be encoded for `requested`.
    pub fn resolve(self, requested: ImageFormat) -> ImageFormat {
        match self {
            EncodePolicy::Fixed(fixed) if requested.is_binary() && fixed.is_binary() => fixed,
            _ => requested,
        }
    }
}

/// Extract the extension of `path` including its leading dot.
///
/// Only the final path component is examined; `"dir.v2/img"` has no
/// extension.
///
/// ```
/// use pixedit_io::extension_of;
///
/// assert_eq!(extension_of("photos/cat.jpeg"), Some(".jpeg"));
/// assert_eq!(extension_of("archive.tar.PNG"), Some(".PNG"));
/// assert_eq!(extension_of("dir.v2/img"), None);
/// ```
pub fn extension_of<P: AsRef<Path> + ?Sized>(path: &P) -> Option<&str> {
    let name = path.as_ref().file_name()?.to_str()?;
    name.rfind('.').map(|pos| &name[pos..])
}

/// Map an extension to a supported format.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for anything outside
/// [`pixedit_core::SUPPORTED_EXTENSIONS`].
pub fn format_from_extension(ext: &str) -> IoResult<ImageFormat> {
    ImageFormat::from_extension(ext)
        .ok_or_else(|| IoError::UnsupportedFormat(format!("extension '{}'", ext)))
}

/// Map a path to a supported format via its extension.
pub fn format_from_path<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let path = path.as_ref();
    let ext = extension_of(path).ok_or_else(|| {
        IoError::UnsupportedFormat(format!("no extension in '{}'", path.display()))
    })?;
    format_from_extension(ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(format_from_extension(".ppm").unwrap(), ImageFormat::Ppm);
        assert_eq!(format_from_extension(".jpg").unwrap(), ImageFormat::Jpeg);
        assert_eq!(format_from_extension(".jpeg").unwrap(), ImageFormat::Jpeg);
        assert!(matches!(
            format_from_extension(".JPG"),
            Err(IoError::UnsupportedFormat(_))
        ));
        assert!(format_from_extension("ppm").is_err());
        assert!(format_from_extension(".tif").is_err());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(format_from_path("/tmp/a.b/c.bmp").unwrap(), ImageFormat::Bmp);
        assert!(format_from_path("/tmp/noext").is_err());
    }

    #[test]
    fn test_encode_policy() {
        let fixed = EncodePolicy::Fixed(ImageFormat::Png);
        assert_eq!(fixed.resolve(ImageFormat::Jpeg), ImageFormat::Png);
        assert_eq!(fixed.resolve(ImageFormat::Bmp), ImageFormat::Png);
        assert_eq!(fixed.resolve(ImageFormat::Ppm), ImageFormat::Ppm);
        assert_eq!(
            EncodePolicy::AsRequested.resolve(ImageFormat::Jpeg),
            ImageFormat::Jpeg
        );
        assert_eq!(
            EncodePolicy::Fixed(ImageFormat::Ppm).resolve(ImageFormat::Bmp),
            ImageFormat::Bmp
        );
    }
}
