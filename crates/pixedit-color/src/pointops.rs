//! Direct per-pixel operations
//!
//! These do not go through a matrix; results below zero clamp to 0.

use crate::ColorResult;
use pixedit_core::{Pix, PixMut, color};

fn map_pixels<F>(pix: &Pix, out: &mut PixMut, f: F) -> ColorResult<()>
where
    F: Fn([u8; 3]) -> [u8; 3],
{
    out.check_size_matches(pix)?;
    for (dst, &src) in out.data_mut().iter_mut().zip(pix.data()) {
        *dst = color::from_array(f(color::to_array(src)));
    }
    Ok(())
}

/// Set every channel to the largest of R, G and B.
pub fn max_value(pix: &Pix) -> ColorResult<Pix> {
    let mut out = pix.create_template();
    max_value_into(pix, &mut out)?;
    Ok(out.into())
}

/// [`max_value`] into a caller-supplied buffer.
pub fn max_value_into(pix: &Pix, out: &mut PixMut) -> ColorResult<()> {
    map_pixels(pix, out, |[r, g, b]| [r.max(g).max(b); 3])
}

/// Set every channel to the integer mean of R, G and B.
pub fn intensity(pix: &Pix) -> ColorResult<Pix> {
    let mut out = pix.create_template();
    intensity_into(pix, &mut out)?;
    Ok(out.into())
}

/// [`intensity`] into a caller-supplied buffer.
pub fn intensity_into(pix: &Pix, out: &mut PixMut) -> ColorResult<()> {
    map_pixels(pix, out, |[r, g, b]| {
        let mean = (u16::from(r) + u16::from(g) + u16::from(b)) / 3;
        [mean as u8; 3]
    })
}

/// Add `increment` to every channel, clamping to `[0, 255]`.
///
/// Any `i32` increment is accepted.
///
/// ```
/// use pixedit_color::brightness;
/// use pixedit_core::Pix;
///
/// let pix = Pix::new(2, 2).unwrap();
/// let out = brightness(&pix, 1000).unwrap();
/// assert_eq!(out.get_rgb(1, 1), Some((255, 255, 255)));
/// ```
pub fn brightness(pix: &Pix, increment: i32) -> ColorResult<Pix> {
    let mut out = pix.create_template();
    brightness_into(pix, increment, &mut out)?;
    Ok(out.into())
}

/// [`brightness`] into a caller-supplied buffer.
pub fn brightness_into(pix: &Pix, increment: i32, out: &mut PixMut) -> ColorResult<()> {
    let mut tab = [0u8; 256];
    for (i, v) in tab.iter_mut().enumerate() {
        *v = color::clamp_channel(i as i64 + i64::from(increment));
    }
    map_pixels(pix, out, |rgb| rgb.map(|c| tab[c as usize]))
}
