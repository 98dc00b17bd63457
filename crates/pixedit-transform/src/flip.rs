//! Mirror flips
//!
//! - [`flip_lr`]: mirror about the vertical axis (column `c` moves to
//!   `width - 1 - c`)
//! - [`flip_tb`]: mirror about the horizontal axis (row `r` moves to
//!   `height - 1 - r`)

use crate::TransformResult;
use pixedit_core::{Pix, PixMut};

/// Flip an image left-right (horizontal mirror)
pub fn flip_lr(pix: &Pix) -> TransformResult<Pix> {
    let mut out = pix.create_template();
    flip_lr_into(pix, &mut out)?;
    Ok(out.into())
}

/// [`flip_lr`] into a caller-supplied buffer of the same size.
pub fn flip_lr_into(pix: &Pix, out: &mut PixMut) -> TransformResult<()> {
    out.check_size_matches(pix)?;

    for y in 0..pix.height() {
        let src = pix.row_data(y);
        let dst = out.row_data_mut(y);
        for (d, &s) in dst.iter_mut().zip(src.iter().rev()) {
            *d = s;
        }
    }

    Ok(())
}

/// Flip an image top-bottom (vertical mirror)
pub fn flip_tb(pix: &Pix) -> TransformResult<Pix> {
    let mut out = pix.create_template();
    flip_tb_into(pix, &mut out)?;
    Ok(out.into())
}

/// [`flip_tb`] into a caller-supplied buffer of the same size.
pub fn flip_tb_into(pix: &Pix, out: &mut PixMut) -> TransformResult<()> {
    out.check_size_matches(pix)?;

    let h = pix.height();
    for y in 0..h {
        out.row_data_mut(h - 1 - y).copy_from_slice(pix.row_data(y));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(w: u32, h: u32) -> Pix {
        let mut pm = Pix::new(w, h).unwrap().to_mut();
        for y in 0..h {
            for x in 0..w {
                pm.set_rgb(x, y, x as u8, y as u8, (x * 10 + y) as u8).unwrap();
            }
        }
        pm.into()
    }

    #[test]
    fn test_flip_lr() {
        let pix = numbered(3, 2);
        let out = flip_lr(&pix).unwrap();
        assert_eq!(out.get_rgb(0, 0), Some((2, 0, 20)));
        assert_eq!(out.get_rgb(2, 1), Some((0, 1, 1)));
        assert_eq!(out.get_rgb(1, 1), pix.get_rgb(1, 1));
    }

    #[test]
    fn test_flip_tb() {
        let pix = numbered(3, 2);
        let out = flip_tb(&pix).unwrap();
        assert_eq!(out.get_rgb(0, 0), Some((0, 1, 1)));
        assert_eq!(out.get_rgb(2, 1), Some((2, 0, 20)));
    }

    #[test]
    fn test_single_pixel_and_line() {
        let one = numbered(1, 1);
        assert_eq!(flip_lr(&one).unwrap(), one);
        assert_eq!(flip_tb(&one).unwrap(), one);
        let row = numbered(4, 1);
        assert_eq!(flip_tb(&row).unwrap(), row);
    }

    #[test]
    fn test_into_size_mismatch() {
        let pix = numbered(3, 2);
        let mut out = Pix::new(2, 3).unwrap().to_mut();
        assert!(flip_lr_into(&pix, &mut out).is_err());
        assert!(flip_tb_into(&pix, &mut out).is_err());
    }
}
