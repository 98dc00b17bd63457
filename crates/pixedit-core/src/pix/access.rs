//! Pixel access functions
//!
//! Low-level functions for getting and setting individual pixels, plus
//! conversion to and from interleaved RGB byte buffers used by the codecs.

use super::{Channel, Pix, PixMut};
use crate::color;
use crate::error::{Error, Result};

impl Pix {
    /// Build a PIX from interleaved `R, G, B` bytes in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for zero dimensions and
    /// [`Error::InvalidParameter`] if `rgb.len() != width * height * 3`.
    pub fn from_rgb_bytes(width: u32, height: u32, rgb: &[u8]) -> Result<Pix> {
        let mut pm = Pix::new(width, height)?.try_into_mut().map_err(|_| {
            Error::InvalidParameter("freshly created pix is shared".to_string())
        })?;
        let expected = pm.data().len() * 3;
        if rgb.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "expected {} RGB bytes, got {}",
                expected,
                rgb.len()
            )));
        }
        for (dst, src) in pm.data_mut().iter_mut().zip(rgb.chunks_exact(3)) {
            *dst = color::compose_rgb(src[0], src[1], src[2]);
        }
        Ok(pm.into())
    }

    /// Flatten the image into interleaved `R, G, B` bytes, row-major.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data().len() * 3);
        for &pixel in self.data() {
            out.extend_from_slice(&color::to_array(pixel));
        }
        out
    }

    /// Get the packed pixel at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get the packed pixel without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed index lies outside the buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.inner.data[self.inner.index(x, y)]
    }

    /// Get RGB values at (x, y).
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        self.get_pixel(x, y).map(color::extract_rgb)
    }

    /// Get a single channel value at (x, y).
    pub fn get_channel(&self, x: u32, y: u32, channel: Channel) -> Option<u8> {
        self.get_pixel(x, y).map(|p| channel.extract(p))
    }
}

impl PixMut {
    /// Get the packed pixel at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get the packed pixel without bounds checking.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.inner.data[self.inner.index(x, y)]
    }

    /// Set the packed pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.width() {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: self.width() as usize,
            });
        }
        if y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.height() as usize,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set the packed pixel without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed index lies outside the buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let idx = self.inner.index(x, y);
        self.inner.data[idx] = val;
    }

    /// Set an RGB pixel at (x, y).
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        self.set_pixel(x, y, color::compose_rgb(r, g, b))
    }

    /// Replace a single channel at (x, y), keeping the other two.
    pub fn set_channel(&mut self, x: u32, y: u32, channel: Channel, value: u8) -> Result<()> {
        let pixel = self.get_pixel(x, y).ok_or(Error::IndexOutOfBounds {
            index: x.max(y) as usize,
            len: self.width().max(self.height()) as usize,
        })?;
        self.set_pixel_unchecked(x, y, channel.replace(pixel, value));
        Ok(())
    }
}
