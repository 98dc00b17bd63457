//! PIX - The RGB pixel buffer
//!
//! The `Pix` structure is the image type shared by every crate in the
//! workspace. It always holds three 8-bit channels per pixel.
//!
//! # Pixel layout
//!
//! - One 32-bit word per pixel, rows stored top to bottom
//! - Color order is RGBA (red in MSB); alpha is always 255
//!
//! # Ownership model
//!
//! `Pix` uses `Arc` for cheap cloning (shared, read-only ownership).
//! To build or modify pixel data, obtain a `PixMut` via [`Pix::try_into_mut`]
//! or [`Pix::to_mut`], then convert back with `Into<Pix>`. A `Pix` handed
//! out by the image store can therefore never be changed behind the store's
//! back.

mod access;
pub mod compare;
mod rgb;
pub mod statistics;

pub use rgb::Channel;

use crate::color;
use crate::error::{Error, Result};
use std::sync::Arc;

/// File extensions understood by the codec layer, in their stable order.
pub const SUPPORTED_EXTENSIONS: [&str; 5] = [".ppm", ".jpg", ".jpeg", ".png", ".bmp"];

/// Image file format
///
/// Formats are selected purely from a textual file extension; byte content
/// is never sniffed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// Unknown format (images built in memory)
    #[default]
    Unknown,
    /// ASCII portable pixmap (P3)
    Ppm,
    /// JFIF JPEG format
    Jpeg,
    /// PNG format
    Png,
    /// Uncompressed Windows bitmap
    Bmp,
}

impl ImageFormat {
    /// Map an extension (with leading dot, case-sensitive) to a format.
    ///
    /// Returns `None` for anything outside [`SUPPORTED_EXTENSIONS`].
    ///
    /// ```
    /// use pixedit_core::ImageFormat;
    ///
    /// assert_eq!(ImageFormat::from_extension(".jpeg"), Some(ImageFormat::Jpeg));
    /// assert_eq!(ImageFormat::from_extension(".PNG"), None);
    /// assert_eq!(ImageFormat::from_extension("png"), None);
    /// ```
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            ".ppm" => Some(Self::Ppm),
            ".jpg" | ".jpeg" => Some(Self::Jpeg),
            ".png" => Some(Self::Png),
            ".bmp" => Some(Self::Bmp),
            _ => None,
        }
    }

    /// Get the canonical file extension (with leading dot) for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Unknown => ".dat",
            Self::Ppm => ".ppm",
            Self::Jpeg => ".jpg",
            Self::Png => ".png",
            Self::Bmp => ".bmp",
        }
    }

    /// Whether this format is encoded by a binary codec.
    pub fn is_binary(self) -> bool {
        matches!(self, Self::Jpeg | Self::Png | Self::Bmp)
    }
}

/// Internal PIX data
#[derive(Debug)]
struct PixData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Format the image was decoded from
    informat: ImageFormat,
    /// The image data, one packed word per pixel
    data: Vec<u32>,
}

impl PixData {
    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// PIX - RGB image buffer
///
/// `Pix` is immutable and reference counted via `Arc`.
///
/// # Examples
///
/// ```
/// use pixedit_core::Pix;
///
/// let pix = Pix::new(640, 480).unwrap();
/// assert_eq!(pix.width(), 640);
/// assert_eq!(pix.height(), 480);
/// assert_eq!(pix.get_rgb(0, 0), Some((0, 0, 0)));
/// ```
#[derive(Debug, Clone)]
pub struct Pix {
    inner: Arc<PixData>,
}

impl Pix {
    /// Create a new black PIX with the specified dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or if
    /// the pixel buffer would not fit in memory addressing limits.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let len = (width as usize)
            .checked_mul(height as usize)
            .filter(|&n| {
                n.checked_mul(std::mem::size_of::<u32>())
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
            })
            .ok_or(Error::InvalidDimension { width, height })?;

        let inner = PixData {
            width,
            height,
            informat: ImageFormat::Unknown,
            data: vec![color::compose_rgb(0, 0, 0); len],
        };

        Ok(Pix {
            inner: Arc::new(inner),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the input file format.
    #[inline]
    pub fn informat(&self) -> ImageFormat {
        self.inner.informat
    }

    /// Get raw access to the packed image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the number of strong references to this PIX.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Get the packed words of a single row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let start = self.inner.index(0, y);
        &self.inner.data[start..start + self.inner.width as usize]
    }

    /// Create a new black PIX with the same dimensions as this one.
    ///
    /// The input format is carried over; pixel data is not.
    pub fn create_template(&self) -> PixMut {
        PixMut {
            inner: PixData {
                width: self.inner.width,
                height: self.inner.height,
                informat: self.inner.informat,
                data: vec![color::compose_rgb(0, 0, 0); self.inner.data.len()],
            },
        }
    }

    /// Check if two PIX have the same width and height.
    pub fn sizes_equal(&self, other: &Pix) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Create a deep copy of this PIX.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates
    /// a completely independent copy.
    pub fn deep_clone(&self) -> Self {
        self.to_mut().into()
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<PixMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixMut { inner: data }),
            Err(arc) => Err(Pix { inner: arc }),
        }
    }

    /// Create a mutable copy of this PIX.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> PixMut {
        PixMut {
            inner: PixData {
                width: self.inner.width,
                height: self.inner.height,
                informat: self.inner.informat,
                data: self.inner.data.clone(),
            },
        }
    }
}

impl PartialEq for Pix {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
            || (self.sizes_equal(other) && self.inner.data == other.inner.data)
    }
}

impl Eq for Pix {}

/// Mutable PIX
///
/// Allows modification of image data. Convert back to an immutable
/// [`Pix`] using `Into<Pix>`.
#[derive(Debug)]
pub struct PixMut {
    inner: PixData,
}

impl PixMut {
    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the input format.
    #[inline]
    pub fn informat(&self) -> ImageFormat {
        self.inner.informat
    }

    /// Set the input format.
    pub fn set_informat(&mut self, format: ImageFormat) {
        self.inner.informat = format;
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable access to the image data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Get mutable access to a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let start = self.inner.index(0, y);
        let end = start + self.inner.width as usize;
        &mut self.inner.data[start..end]
    }

    /// Check that this buffer has the same size as `src`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] otherwise.
    pub fn check_size_matches(&self, src: &Pix) -> Result<()> {
        if self.inner.width != src.width() || self.inner.height != src.height() {
            return Err(Error::DimensionMismatch {
                expected: (src.width(), src.height()),
                actual: (self.inner.width, self.inner.height),
            });
        }
        Ok(())
    }
}

impl From<PixMut> for Pix {
    fn from(pix: PixMut) -> Self {
        Pix {
            inner: Arc::new(pix.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(matches!(
            Pix::new(0, 4),
            Err(Error::InvalidDimension { width: 0, height: 4 })
        ));
        assert!(Pix::new(4, 0).is_err());
    }

    #[test]
    fn test_new_rejects_unaddressable_size() {
        assert!(matches!(
            Pix::new(u32::MAX, u32::MAX),
            Err(Error::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_new_is_black() {
        let pix = Pix::new(3, 2).unwrap();
        assert_eq!(pix.data().len(), 6);
        assert!(pix.data().iter().all(|&p| color::extract_rgb(p) == (0, 0, 0)));
    }

    #[test]
    fn test_try_into_mut_shared() {
        let pix = Pix::new(2, 2).unwrap();
        let shared = pix.clone();
        assert_eq!(pix.ref_count(), 2);
        let pix = pix.try_into_mut().unwrap_err();
        drop(shared);
        assert!(pix.try_into_mut().is_ok());
    }

    #[test]
    fn test_to_mut_does_not_alias() {
        let pix = Pix::new(2, 2).unwrap();
        let mut copy = pix.to_mut();
        copy.set_rgb(0, 0, 9, 9, 9).unwrap();
        assert_eq!(pix.get_rgb(0, 0), Some((0, 0, 0)));
        let copy: Pix = copy.into();
        assert_ne!(pix, copy);
    }

    #[test]
    fn test_format_extensions() {
        for ext in SUPPORTED_EXTENSIONS {
            let format = ImageFormat::from_extension(ext).unwrap();
            assert!(format == ImageFormat::Ppm || format.is_binary());
        }
        assert_eq!(ImageFormat::from_extension(".gif"), None);
        assert_eq!(ImageFormat::from_extension(".Ppm"), None);
        assert_eq!(ImageFormat::Jpeg.extension(), ".jpg");
    }

    #[test]
    fn test_row_data() {
        let mut pm = Pix::new(3, 2).unwrap().to_mut();
        pm.row_data_mut(1)[2] = color::compose_rgb(1, 2, 3);
        let pix: Pix = pm.into();
        assert_eq!(pix.row_data(1)[2], color::compose_rgb(1, 2, 3));
        assert_eq!(pix.get_rgb(2, 1), Some((1, 2, 3)));
    }

    #[test]
    fn test_check_size_matches() {
        let src = Pix::new(3, 2).unwrap();
        assert!(src.create_template().check_size_matches(&src).is_ok());
        let other = Pix::new(2, 3).unwrap().to_mut();
        assert!(matches!(
            other.check_size_matches(&src),
            Err(Error::DimensionMismatch { expected: (3, 2), actual: (2, 3) })
        ));
    }
}
