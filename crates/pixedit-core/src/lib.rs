//! pixedit Core - Basic data structures for the pixedit image engine
//!
//! This crate provides the fundamental data structures used throughout
//! the pixedit workspace:
//!
//! - [`Pix`] / [`PixMut`] - The RGB pixel buffer (immutable / mutable)
//! - [`Channel`] - Channel selector (R=0, G=1, B=2)
//! - [`ImageFormat`] - Supported file formats and their extensions
//! - [`color`] - Packed-pixel helpers and channel clamping

pub mod error;
pub mod pix;

pub use error::{Error, Result};
pub use pix::compare::PixelDiffResult;
pub use pix::{Channel, ImageFormat, Pix, PixMut, SUPPORTED_EXTENSIONS};

/// Color channel helpers for packed 32-bit pixels.
///
/// # Pixel format
///
/// Pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB). The alpha
/// byte is always 255; it is carried only so that packed words match the
/// layout used by the codecs.
pub mod color {
    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// Largest value a channel may hold at rest.
    pub const MAX_CHANNEL: i32 = 255;

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Compose a 32-bit RGB pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | (255 << ALPHA_SHIFT)
    }

    /// Extract RGB values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    /// Extract RGB values as an array indexed by channel number.
    #[inline]
    pub fn to_array(pixel: u32) -> [u8; 3] {
        [red(pixel), green(pixel), blue(pixel)]
    }

    /// Compose a pixel from an array indexed by channel number.
    #[inline]
    pub fn from_array(rgb: [u8; 3]) -> u32 {
        compose_rgb(rgb[0], rgb[1], rgb[2])
    }

    /// Clamp an integer into the channel range `[0, 255]`.
    #[inline]
    pub fn clamp_channel(value: i64) -> u8 {
        value.clamp(0, MAX_CHANNEL as i64) as u8
    }

}
