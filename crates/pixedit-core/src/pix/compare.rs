//! Image comparison operations
//!
//! - Exact equality checks
//! - Pixel difference counting with the largest per-channel deviation
//! - Absolute difference image

use super::Pix;
use crate::color;
use crate::error::{Error, Result};

/// Result of counting pixel differences between two images
#[derive(Debug, Clone, PartialEq)]
pub struct PixelDiffResult {
    /// Number of pixels that differ in at least one channel
    pub n_diff: u64,
    /// Fraction of pixels that differ (0.0 to 1.0)
    pub fract_diff: f64,
    /// Largest absolute difference found on any channel
    pub max_diff: u8,
}

impl Pix {
    fn check_same_size(&self, other: &Pix) -> Result<()> {
        if !self.sizes_equal(other) {
            return Err(Error::DimensionMismatch {
                expected: (self.width(), self.height()),
                actual: (other.width(), other.height()),
            });
        }
        Ok(())
    }

    /// Check if two images are exactly equal (same size, same channels).
    pub fn equals(&self, other: &Pix) -> bool {
        self == other
    }

    /// Count the pixels that differ between two images.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the sizes differ.
    pub fn count_pixel_diffs(&self, other: &Pix) -> Result<PixelDiffResult> {
        self.check_same_size(other)?;

        let mut n_diff = 0u64;
        let mut max_diff = 0u8;
        for (&a, &b) in self.data().iter().zip(other.data()) {
            let pa = color::to_array(a);
            let pb = color::to_array(b);
            let d = (0..3).map(|c| pa[c].abs_diff(pb[c])).max().unwrap_or(0);
            if d > 0 {
                n_diff += 1;
                max_diff = max_diff.max(d);
            }
        }

        Ok(PixelDiffResult {
            n_diff,
            fract_diff: n_diff as f64 / self.data().len() as f64,
            max_diff,
        })
    }

    /// Create an image holding the per-channel absolute difference.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the sizes differ.
    pub fn abs_diff(&self, other: &Pix) -> Result<Pix> {
        self.check_same_size(other)?;

        let mut out = self.create_template();
        for ((dst, &a), &b) in out.data_mut().iter_mut().zip(self.data()).zip(other.data()) {
            let pa = color::to_array(a);
            let pb = color::to_array(b);
            *dst = color::from_array([
                pa[0].abs_diff(pb[0]),
                pa[1].abs_diff(pb[1]),
                pa[2].abs_diff(pb[2]),
            ]);
        }
        Ok(out.into())
    }
}
