//! Linear color transforms
//!
//! Applies a [`ColorMatrix`] to every pixel. Each weighted sum is truncated
//! toward zero, then clamped into the channel range. What happens to
//! negative sums is chosen by [`NegativeClamp`]; the default maps them to
//! 255, matching the output of earlier releases.

use crate::{ColorMatrix, ColorResult};
use pixedit_core::{Pix, PixMut, color};

/// Mapping applied to a negative weighted sum on the matrix path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NegativeClamp {
    /// Negative sums become 255
    #[default]
    Saturate,
    /// Negative sums become 0
    Zero,
}

/// Truncate a weighted sum toward zero and bring it into `[0, 255]`.
///
/// ```
/// use pixedit_color::{NegativeClamp, reduce_clamp};
///
/// assert_eq!(reduce_clamp(254.9, NegativeClamp::Saturate), 254);
/// assert_eq!(reduce_clamp(300.0, NegativeClamp::Saturate), 255);
/// assert_eq!(reduce_clamp(-0.7, NegativeClamp::Saturate), 0);
/// assert_eq!(reduce_clamp(-3.0, NegativeClamp::Saturate), 255);
/// assert_eq!(reduce_clamp(-3.0, NegativeClamp::Zero), 0);
/// ```
#[inline]
pub fn reduce_clamp(value: f64, negative: NegativeClamp) -> u8 {
    let v = value as i64;
    if v < 0 {
        return match negative {
            NegativeClamp::Saturate => 255,
            NegativeClamp::Zero => 0,
        };
    }
    color::clamp_channel(v)
}

/// Apply a color matrix, mapping negative sums to 255.
pub fn apply_color_matrix(pix: &Pix, matrix: &ColorMatrix) -> ColorResult<Pix> {
    apply_color_matrix_with(pix, matrix, NegativeClamp::default())
}

/// Apply a color matrix with an explicit negative-sum mapping.
pub fn apply_color_matrix_with(
    pix: &Pix,
    matrix: &ColorMatrix,
    negative: NegativeClamp,
) -> ColorResult<Pix> {
    let mut out = pix.create_template();
    apply_color_matrix_into(pix, matrix, negative, &mut out)?;
    Ok(out.into())
}

/// Apply a color matrix, writing into a caller-supplied buffer of the same
/// size as `pix`.
pub fn apply_color_matrix_into(
    pix: &Pix,
    matrix: &ColorMatrix,
    negative: NegativeClamp,
    out: &mut PixMut,
) -> ColorResult<()> {
    out.check_size_matches(pix)?;

    for (dst, &src) in out.data_mut().iter_mut().zip(pix.data()) {
        let sums = matrix.apply(color::to_array(src));
        *dst = color::from_array(sums.map(|s| reduce_clamp(s, negative)));
    }
    Ok(())
}
