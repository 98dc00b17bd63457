//! Flip regression test
//!
//! - Flipping twice about either axis is the identity
//! - Flipping about both axes in either order gives the same image
//! - Individual pixels land at the mirrored coordinates

use pixedit_core::ImageFormat;
use pixedit_test::{RegParams, gradient_image, noise_image, quad_image};
use pixedit_transform::{flip_lr, flip_tb};

#[test]
fn flip_reg() {
    let mut rp = RegParams::new("flip");

    let images = [
        quad_image(),
        gradient_image(33, 18).expect("gradient"),
        noise_image(7, 12, 2).expect("noise"),
        noise_image(1, 9, 3).expect("column"),
    ];

    for pix in &images {
        let lr = flip_lr(pix).expect("lr");
        let tb = flip_tb(pix).expect("tb");
        rp.compare_pix(pix, &flip_lr(&lr).expect("lr2"));
        rp.compare_pix(pix, &flip_tb(&tb).expect("tb2"));
        rp.compare_pix(&flip_tb(&lr).expect("lr-tb"), &flip_lr(&tb).expect("tb-lr"));
    }

    let grad = &images[1];
    let lr = flip_lr(grad).expect("lr");
    let tb = flip_tb(grad).expect("tb");
    let (w, h) = (grad.width(), grad.height());
    let mut ok = true;
    for y in 0..h {
        for x in 0..w {
            ok &= lr.get_pixel(w - 1 - x, y) == grad.get_pixel(x, y);
            ok &= tb.get_pixel(x, h - 1 - y) == grad.get_pixel(x, y);
        }
    }
    rp.compare_values(1.0, if ok { 1.0 } else { 0.0 }, 0.0);
    rp.write_pix(&lr, ImageFormat::Png).expect("display");
    rp.write_pix(&tb, ImageFormat::Png).expect("display");

    assert!(rp.cleanup(), "flip regression test failed");
}
