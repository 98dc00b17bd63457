//! Format dispatch regression test
//!
//! - Extensions are matched textually and case-sensitively
//! - The same pixels written under every binary extension come back with
//!   the same shape, and exactly for the lossless ones
//! - An unsupported extension is refused before the file is touched
//! - A fixed encode policy overrides the binary encoder but not PPM

use pixedit_core::{ImageFormat, SUPPORTED_EXTENSIONS};
use pixedit_io::{
    EncodePolicy, IoError, format_from_extension, read_image, read_image_mem, write_image_file,
    write_image_mem, write_image_mem_with,
};
use pixedit_test::{RegParams, noise_image};

#[test]
fn ioformats_reg() {
    let mut rp = RegParams::new("ioformats");

    // Supported set, in order
    let joined = SUPPORTED_EXTENSIONS.join(" ");
    rp.compare_strings(b".ppm .jpg .jpeg .png .bmp", joined.as_bytes());

    for ext in SUPPORTED_EXTENSIONS {
        rp.compare_values(1.0, if format_from_extension(ext).is_ok() { 1.0 } else { 0.0 }, 0.0);
    }
    for ext in [".PNG", ".Jpg", ".tif", ".gif", "png", ""] {
        let refused = matches!(format_from_extension(ext), Err(IoError::UnsupportedFormat(_)));
        rp.compare_values(1.0, if refused { 1.0 } else { 0.0 }, 0.0);
    }

    // Lossless formats roundtrip exactly
    let pix = noise_image(13, 7, 5).expect("noise");
    for format in [ImageFormat::Ppm, ImageFormat::Png, ImageFormat::Bmp] {
        let bytes = write_image_mem(&pix, format).expect("write");
        let back = read_image_mem(&bytes, format).expect("read");
        rp.compare_pix(&pix, &back);
        rp.compare_values(1.0, if back.informat() == format { 1.0 } else { 0.0 }, 0.0);
    }

    // Unsupported extension never touches the file system
    let dir = tempfile::tempdir().expect("tempdir");
    let tif = dir.path().join("out.tif");
    let refused = matches!(write_image_file(&pix, &tif), Err(IoError::UnsupportedFormat(_)));
    rp.compare_values(1.0, if refused { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(0.0, if tif.exists() { 1.0 } else { 0.0 }, 0.0);
    let refused = matches!(read_image(&tif), Err(IoError::UnsupportedFormat(_)));
    rp.compare_values(1.0, if refused { 1.0 } else { 0.0 }, 0.0);

    // Fixed encode policy
    let policy = EncodePolicy::Fixed(ImageFormat::Bmp);
    let bytes = write_image_mem_with(&pix, ImageFormat::Jpeg, policy).expect("write");
    rp.compare_strings(b"BM", &bytes[..2]);
    let bytes = write_image_mem_with(&pix, ImageFormat::Ppm, policy).expect("write");
    rp.compare_strings(b"P3\n", &bytes[..3]);

    assert!(rp.cleanup(), "ioformats regression test failed");
}
