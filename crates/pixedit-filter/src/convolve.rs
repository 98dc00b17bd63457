//! Convolution operations
//!
//! Convolves one channel of an RGB image with a [`Kernel`]. Kernel cells
//! that fall outside the image are dropped from the sum: there is no
//! padding, replication or renormalization, so a smoothing kernel darkens
//! the border slightly.
//!
//! The weighted sum is truncated toward zero and clamped to `[0, 255]`.

use crate::{FilterError, FilterResult, Kernel};
use pixedit_core::{Channel, Pix, PixMut, color};

fn check_kernel_fits(pix: &Pix, kernel: &Kernel) -> FilterResult<()> {
    if kernel.width() > pix.width() || kernel.height() > pix.height() {
        return Err(FilterError::InvalidKernel(format!(
            "{}x{} kernel is larger than {}x{} image",
            kernel.width(),
            kernel.height(),
            pix.width(),
            pix.height()
        )));
    }
    Ok(())
}

/// Convolve one channel; the other two channels are copied unchanged.
///
/// # Errors
///
/// Returns [`FilterError::InvalidKernel`] if the kernel is wider or taller
/// than the image.
pub fn convolve_channel(pix: &Pix, kernel: &Kernel, channel: Channel) -> FilterResult<Pix> {
    let mut out = pix.create_template();
    convolve_channel_into(pix, kernel, channel, &mut out)?;
    Ok(out.into())
}

/// [`convolve_channel`] into a caller-supplied buffer of the same size.
pub fn convolve_channel_into(
    pix: &Pix,
    kernel: &Kernel,
    channel: Channel,
    out: &mut PixMut,
) -> FilterResult<()> {
    check_kernel_fits(pix, kernel)?;
    out.check_size_matches(pix)?;

    let w = pix.width() as i64;
    let h = pix.height() as i64;
    let kw = kernel.width() as i64;
    let kh = kernel.height() as i64;
    let kcx = kernel.center_x() as i64;
    let kcy = kernel.center_y() as i64;
    let kdata = kernel.data();
    let src = pix.data();

    for y in 0..h {
        // Kernel rows whose mapped source row is inside the image
        let ky_start = (kcy - y).max(0);
        let ky_end = (h - y + kcy).min(kh);
        for x in 0..w {
            let kx_start = (kcx - x).max(0);
            let kx_end = (w - x + kcx).min(kw);

            let mut sum = 0.0f64;
            for ky in ky_start..ky_end {
                let sy = y + ky - kcy;
                let src_row = (sy * w) as usize;
                let k_row = (ky * kw) as usize;
                for kx in kx_start..kx_end {
                    let sx = x + kx - kcx;
                    let v = channel.extract(src[src_row + sx as usize]);
                    sum += kdata[k_row + kx as usize] * f64::from(v);
                }
            }

            let idx = (y * w + x) as usize;
            let value = color::clamp_channel(sum as i64);
            out.data_mut()[idx] = channel.replace(src[idx], value);
        }
    }

    Ok(())
}

/// Convolve R, then G of that result, then B of that result.
pub fn convolve_rgb(pix: &Pix, kernel: &Kernel) -> FilterResult<Pix> {
    let mut out = pix.create_template();
    convolve_rgb_into(pix, kernel, &mut out)?;
    Ok(out.into())
}

/// [`convolve_rgb`] into a caller-supplied buffer of the same size.
pub fn convolve_rgb_into(pix: &Pix, kernel: &Kernel, out: &mut PixMut) -> FilterResult<()> {
    check_kernel_fits(pix, kernel)?;
    let red = convolve_channel(pix, kernel, Channel::Red)?;
    let green = convolve_channel(&red, kernel, Channel::Green)?;
    convolve_channel_into(&green, kernel, Channel::Blue, out)
}

/// Smooth every channel with the 3x3 [`Kernel::blur`].
pub fn gaussian_blur(pix: &Pix) -> FilterResult<Pix> {
    convolve_rgb(pix, &Kernel::blur())
}

/// Sharpen every channel with the 5x5 [`Kernel::sharpen`].
pub fn sharpen(pix: &Pix) -> FilterResult<Pix> {
    convolve_rgb(pix, &Kernel::sharpen())
}
