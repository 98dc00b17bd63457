//! pixedit-test - Regression test framework for pixedit
//!
//! Provides [`RegParams`], which counts and records comparisons made by a
//! `*_reg.rs` test, and a handful of synthetic images so that tests need no
//! fixtures on disk. Two modes are supported:
//!
//! - **Compare**: check results against values computed in the test (default)
//! - **Display**: additionally write result images to `tests/regout` for
//!   visual inspection
//!
//! # Usage
//!
//! ```ignore
//! use pixedit_test::RegParams;
//!
//! let mut rp = RegParams::new("flip");
//! rp.compare_pix(&once, &twice);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use pixedit_core::{Pix, color};

/// The 2x2 image red, green / blue, white, row-major.
pub fn quad_image() -> Pix {
    let data = [
        color::compose_rgb(255, 0, 0),
        color::compose_rgb(0, 255, 0),
        color::compose_rgb(0, 0, 255),
        color::compose_rgb(255, 255, 255),
    ];
    let mut pm = Pix::new(2, 2).expect("2x2 is a valid size").to_mut();
    pm.data_mut().copy_from_slice(&data);
    pm.into()
}

/// The quad image as ASCII PPM text.
pub const QUAD_PPM: &str = "P3\n2 2\n255\n255\n0\n0\n0\n255\n0\n0\n0\n255\n255\n255\n255\n";

/// A smooth color gradient: red grows along x, green along y, blue along
/// both.
pub fn gradient_image(width: u32, height: u32) -> TestResult<Pix> {
    let mut pm = Pix::new(width, height)?.to_mut();
    let wd = width.max(2) - 1;
    let hd = height.max(2) - 1;
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / wd) as u8;
            let g = (y * 255 / hd) as u8;
            let b = ((x + y) * 255 / (wd + hd)) as u8;
            pm.set_pixel_unchecked(x, y, color::compose_rgb(r, g, b));
        }
    }
    Ok(pm.into())
}

/// A deterministic pseudo-random image; every channel takes values across
/// the full range.
pub fn noise_image(width: u32, height: u32, seed: u32) -> TestResult<Pix> {
    let mut pm = Pix::new(width, height)?.to_mut();
    let mut state = seed.wrapping_mul(2_654_435_761).wrapping_add(1);
    for pixel in pm.data_mut() {
        // xorshift32
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        let [r, g, b, _] = state.to_be_bytes();
        *pixel = color::compose_rgb(r, g, b);
    }
    Ok(pm.into())
}

/// A single-color image.
pub fn solid_image(width: u32, height: u32, r: u8, g: u8, b: u8) -> TestResult<Pix> {
    let mut pm = Pix::new(width, height)?.to_mut();
    pm.data_mut().fill(color::compose_rgb(r, g, b));
    Ok(pm.into())
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // pixedit-test is at crates/pixedit-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
