//! JPEG I/O regression test
//!
//! JPEG is lossy: roundtrips keep the shape exactly and the pixels close.
//! Both `.jpg` and `.jpeg` select the same codec.

use pixedit_core::ImageFormat;
use pixedit_io::{read_image, read_image_mem, write_image_file, write_image_mem};
use pixedit_test::{RegParams, gradient_image, solid_image};

#[test]
fn jpegio_reg() {
    let mut rp = RegParams::new("jpegio");

    // Smooth content survives with small error
    let grad = gradient_image(64, 48).expect("gradient");
    let bytes = write_image_mem(&grad, ImageFormat::Jpeg).expect("write jpeg");
    rp.compare_strings(&[0xFF, 0xD8], &bytes[..2]);
    let back = read_image_mem(&bytes, ImageFormat::Jpeg).expect("read jpeg");
    rp.compare_values(64.0, back.width() as f64, 0.0);
    rp.compare_values(48.0, back.height() as f64, 0.0);
    let diff = grad.count_pixel_diffs(&back).expect("same size");
    rp.compare_values(0.0, diff.max_diff as f64, 24.0);

    // Flat color is nearly exact
    let solid = solid_image(24, 24, 90, 160, 30).expect("solid");
    let bytes = write_image_mem(&solid, ImageFormat::Jpeg).expect("write jpeg");
    let back = read_image_mem(&bytes, ImageFormat::Jpeg).expect("read jpeg");
    let diff = solid.count_pixel_diffs(&back).expect("same size");
    rp.compare_values(0.0, diff.max_diff as f64, 4.0);

    // Both extensions go through the file path
    let dir = tempfile::tempdir().expect("tempdir");
    for name in ["a.jpg", "a.jpeg"] {
        let path = dir.path().join(name);
        write_image_file(&solid, &path).expect("write file");
        let back = read_image(&path).expect("read file");
        rp.compare_values(1.0, if back.sizes_equal(&solid) { 1.0 } else { 0.0 }, 0.0);
    }
    rp.write_pix(&back, ImageFormat::Jpeg).expect("display");

    assert!(rp.cleanup(), "jpegio regression test failed");
}
