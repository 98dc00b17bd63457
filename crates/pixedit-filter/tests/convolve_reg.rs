//! Convolution regression test
//!
//! - Blur of a flat image: interior unchanged, corners and edges cropped
//! - Independent per-channel evaluation agrees with the chained RGB path
//! - Repeated blurs compose: blur(blur(blur(x))) == blur(blur-of-blur(x))
//! - Kernels larger than the image are refused

use pixedit_core::{Channel, ImageFormat, Pix, color};
use pixedit_filter::{
    FilterError, Kernel, convolve_channel, convolve_rgb, gaussian_blur, sharpen,
};
use pixedit_test::{RegParams, gradient_image, noise_image, solid_image};

/// Edge-cropped convolution written as directly as possible.
fn reference_channel(pix: &Pix, kernel: &Kernel, channel: Channel) -> Pix {
    let (w, h) = (pix.width() as i64, pix.height() as i64);
    let (cx, cy) = (kernel.center_x() as i64, kernel.center_y() as i64);
    let mut out = pix.to_mut();
    for y in 0..h {
        for x in 0..w {
            let mut sum = 0.0;
            for ky in 0..kernel.height() as i64 {
                for kx in 0..kernel.width() as i64 {
                    let (sx, sy) = (x + kx - cx, y + ky - cy);
                    if sx < 0 || sy < 0 || sx >= w || sy >= h {
                        continue;
                    }
                    let v = pix.get_channel(sx as u32, sy as u32, channel).unwrap();
                    sum += kernel.get(kx as u32, ky as u32).unwrap() * f64::from(v);
                }
            }
            let v = color::clamp_channel(sum as i64);
            out.set_channel(x as u32, y as u32, channel, v).unwrap();
        }
    }
    out.into()
}

#[test]
fn convolve_reg() {
    let mut rp = RegParams::new("convolve");

    // Flat image
    let flat = solid_image(6, 5, 160, 80, 16).expect("solid");
    let out = gaussian_blur(&flat).expect("blur");
    rp.compare_values(90.0, out.get_channel(0, 0, Channel::Red).unwrap() as f64, 0.0);
    rp.compare_values(45.0, out.get_channel(5, 4, Channel::Green).unwrap() as f64, 0.0);
    rp.compare_values(12.0, out.get_channel(2, 0, Channel::Blue).unwrap() as f64, 0.0);
    rp.compare_values(160.0, out.get_channel(2, 2, Channel::Red).unwrap() as f64, 0.0);

    // Reference implementation, each kernel
    let noise = noise_image(23, 17, 4).expect("noise");
    for kernel in [Kernel::blur(), Kernel::sharpen()] {
        let mut expected = noise.clone();
        for channel in Channel::ALL {
            expected = reference_channel(&expected, &kernel, channel);
        }
        rp.compare_pix(&expected, &convolve_rgb(&noise, &kernel).expect("rgb"));
    }

    // Single channel against the reference
    let k = Kernel::from_rows(&[vec![0.5, 0.0, -0.25], vec![1.0, 2.0, 0.1], vec![0.0, 0.3, 0.0]])
        .expect("kernel");
    rp.compare_pix(
        &reference_channel(&noise, &k, Channel::Green),
        &convolve_channel(&noise, &k, Channel::Green).expect("green"),
    );

    // Composition of blurs
    let grad = gradient_image(30, 20).expect("gradient");
    let b1 = gaussian_blur(&grad).expect("b1");
    let b2 = gaussian_blur(&b1).expect("b2");
    let b3 = gaussian_blur(&b2).expect("b3");
    let blur_of_blur = gaussian_blur(&gaussian_blur(&grad).expect("x")).expect("y");
    rp.compare_pix(&b3, &gaussian_blur(&blur_of_blur).expect("z"));
    rp.write_pix(&b3, ImageFormat::Png).expect("display");

    let sharp = sharpen(&grad).expect("sharpen");
    rp.write_pix(&sharp, ImageFormat::Png).expect("display");

    // Refused kernels
    let tiny = solid_image(4, 4, 1, 2, 3).expect("tiny");
    let refused = matches!(sharpen(&tiny), Err(FilterError::InvalidKernel(_)));
    rp.compare_values(1.0, if refused { 1.0 } else { 0.0 }, 0.0);
    let even = Kernel::from_slice(2, 3, &[0.0; 6]);
    rp.compare_values(1.0, if even.is_err() { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "convolve regression test failed");
}
