//! Pixel buffer regression test
//!
//! - Buffers handed out as `Pix` are never changed by editing a copy
//! - Channel access and replacement agree with the packed layout
//! - Comparison reports differences and the largest deviation
//! - Interleaved RGB bytes roundtrip

use pixedit_core::{Channel, Error, Pix, color};
use pixedit_test::{RegParams, gradient_image, noise_image};

#[test]
fn pix_reg() {
    let mut rp = RegParams::new("pix");

    // Copy-on-edit
    let noise = noise_image(17, 9, 1).expect("noise");
    let shared = noise.clone();
    rp.compare_values(2.0, noise.ref_count() as f64, 0.0);
    let mut edited = shared.to_mut();
    edited.set_rgb(0, 0, 1, 2, 3).expect("in bounds");
    let edited: Pix = edited.into();
    rp.compare_pix(&noise, &shared);
    rp.compare_values(1.0, if edited.equals(&noise) { 0.0 } else { 1.0 }, 0.0);

    // Exclusive handle converts without copying
    let only = noise.deep_clone();
    rp.compare_values(1.0, if only.try_into_mut().is_ok() { 1.0 } else { 0.0 }, 0.0);

    // Channel access
    let grad = gradient_image(8, 8).expect("gradient");
    let mut ok = true;
    for y in 0..8 {
        for x in 0..8 {
            let p = grad.get_pixel(x, y).expect("in bounds");
            for c in Channel::ALL {
                ok &= grad.get_channel(x, y, c) == Some(color::to_array(p)[c.index()]);
                ok &= c.extract(c.replace(p, 77)) == 77;
            }
        }
    }
    rp.compare_values(1.0, if ok { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(0.0, if grad.get_pixel(8, 0).is_some() { 1.0 } else { 0.0 }, 0.0);

    // Differences
    let diff = noise.count_pixel_diffs(&edited).expect("same size");
    rp.compare_values(1.0, diff.n_diff as f64, 0.0);
    let (r, g, b) = noise.get_rgb(0, 0).expect("in bounds");
    let want = r.abs_diff(1).max(g.abs_diff(2)).max(b.abs_diff(3));
    rp.compare_values(want as f64, diff.max_diff as f64, 0.0);
    let absd = noise.abs_diff(&noise).expect("same size");
    rp.compare_values(0.0, absd.max_channel_value() as f64, 0.0);
    let mismatch = matches!(
        noise.count_pixel_diffs(&grad),
        Err(Error::DimensionMismatch { .. })
    );
    rp.compare_values(1.0, if mismatch { 1.0 } else { 0.0 }, 0.0);

    // Byte roundtrip
    let bytes = noise.to_rgb_bytes();
    rp.compare_values((17 * 9 * 3) as f64, bytes.len() as f64, 0.0);
    let back = Pix::from_rgb_bytes(17, 9, &bytes).expect("roundtrip");
    rp.compare_pix(&noise, &back);
    rp.compare_values(1.0, if Pix::from_rgb_bytes(17, 9, &bytes[1..]).is_err() { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "pix regression test failed");
}
