//! PNG I/O regression test
//!
//! PNG is lossless, so every RGB image must roundtrip exactly through
//! memory and through a file.

use pixedit_core::ImageFormat;
use pixedit_io::{read_image, read_image_mem, write_image_file, write_image_mem};
use pixedit_test::{RegParams, gradient_image, noise_image, quad_image};

#[test]
fn pngio_reg() {
    let mut rp = RegParams::new("pngio");

    let images = [
        quad_image(),
        gradient_image(64, 40).expect("gradient"),
        noise_image(31, 17, 11).expect("noise"),
    ];

    for pix in &images {
        let bytes = write_image_mem(pix, ImageFormat::Png).expect("write png");
        rp.compare_strings(b"\x89PNG", &bytes[..4]);
        let back = read_image_mem(&bytes, ImageFormat::Png).expect("read png");
        rp.compare_pix(pix, &back);
    }

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("gradient.png");
    write_image_file(&images[1], &path).expect("write file");
    let back = read_image(&path).expect("read file");
    rp.compare_pix(&images[1], &back);
    rp.compare_values(1.0, if back.informat() == ImageFormat::Png { 1.0 } else { 0.0 }, 0.0);
    rp.write_pix(&back, ImageFormat::Png).expect("display");

    assert!(rp.cleanup(), "pngio regression test failed");
}
