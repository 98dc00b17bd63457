//! 3x3 color matrices
//!
//! A [`ColorMatrix`] maps a source `(R, G, B)` triple to a new triple: row
//! `i` holds the weights that produce output channel `i`.

use crate::{ColorError, ColorResult};
use pixedit_core::Channel;

/// Rec. 709 luma weights for R, G, B.
pub const LUMA_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Classic sepia tone rows.
pub const SEPIA_ROWS: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Linear RGB to RGB transform
///
/// # Examples
///
/// ```
/// use pixedit_color::ColorMatrix;
/// use pixedit_core::Channel;
///
/// let m = ColorMatrix::greyscale([0.5, 0.25, 0.25]);
/// assert_eq!(m.get(Channel::Blue, Channel::Red), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix {
    rows: [[f64; 3]; 3],
}

impl ColorMatrix {
    /// Create a matrix from its rows.
    pub const fn new(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Create a matrix from nine row-major coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidParameters`] unless exactly nine finite
    /// values are given.
    pub fn from_slice(values: &[f64]) -> ColorResult<Self> {
        if values.len() != 9 {
            return Err(ColorError::InvalidParameters(format!(
                "color matrix needs 9 coefficients, got {}",
                values.len()
            )));
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(ColorError::InvalidParameters(format!(
                "color matrix coefficient {} is not finite",
                bad
            )));
        }
        let mut rows = [[0.0; 3]; 3];
        for (row, chunk) in rows.iter_mut().zip(values.chunks_exact(3)) {
            row.copy_from_slice(chunk);
        }
        Ok(Self { rows })
    }

    /// Every output channel copies the chosen source channel.
    pub fn channel(channel: Channel) -> Self {
        let mut row = [0.0; 3];
        row[channel.index()] = 1.0;
        Self::new([row; 3])
    }

    /// Red channel visualization.
    pub fn red_channel() -> Self {
        Self::channel(Channel::Red)
    }

    /// Green channel visualization.
    pub fn green_channel() -> Self {
        Self::channel(Channel::Green)
    }

    /// Blue channel visualization.
    pub fn blue_channel() -> Self {
        Self::channel(Channel::Blue)
    }

    /// Rec. 709 luma replicated to all channels.
    pub fn luma() -> Self {
        Self::greyscale(LUMA_WEIGHTS)
    }

    /// Sepia tone.
    pub fn sepia() -> Self {
        Self::new(SEPIA_ROWS)
    }

    /// A user weighting of R, G, B replicated to all channels.
    pub fn greyscale(weights: [f64; 3]) -> Self {
        Self::new([weights; 3])
    }

    /// Unit matrix.
    pub fn identity() -> Self {
        Self::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// The rows of the matrix.
    pub fn rows(&self) -> &[[f64; 3]; 3] {
        &self.rows
    }

    /// Weight of source channel `src` in output channel `out`.
    pub fn get(&self, out: Channel, src: Channel) -> f64 {
        self.rows[out.index()][src.index()]
    }

    /// Unclamped weighted sums for one source pixel.
    #[inline]
    pub fn apply(&self, rgb: [u8; 3]) -> [f64; 3] {
        let src = rgb.map(f64::from);
        self.rows
            .map(|row| row[0] * src[0] + row[1] * src[1] + row[2] * src[2])
    }
}

impl Default for ColorMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_rows() {
        let m = ColorMatrix::green_channel();
        for row in m.rows() {
            assert_eq!(row, &[0.0, 1.0, 0.0]);
        }
        assert_eq!(m.apply([10, 20, 30]), [20.0, 20.0, 20.0]);
    }

    #[test]
    fn test_presets() {
        assert_eq!(ColorMatrix::luma().rows()[2], LUMA_WEIGHTS);
        assert_eq!(ColorMatrix::sepia().get(Channel::Green, Channel::Blue), 0.168);
        assert_eq!(ColorMatrix::default(), ColorMatrix::identity());
    }

    #[test]
    fn test_from_slice() {
        let m = ColorMatrix::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).unwrap();
        assert_eq!(m.get(Channel::Green, Channel::Red), 4.0);
        assert!(ColorMatrix::from_slice(&[1.0; 8]).is_err());
        let mut bad = [0.0; 9];
        bad[4] = f64::NAN;
        assert!(ColorMatrix::from_slice(&bad).is_err());
    }
}
