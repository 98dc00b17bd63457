//! pixedit Color - Color transforms for the pixedit image engine
//!
//! - **Color matrices** ([`matrix`]): the 3x3 [`ColorMatrix`] type and the
//!   channel, luma, sepia and custom greyscale presets
//! - **Linear transforms** ([`linear`]): apply a matrix to every pixel
//! - **Point operations** ([`pointops`]): max-value, intensity and
//!   brightness, computed directly per pixel
//!
//! Every operation reads a [`Pix`](pixedit_core::Pix) and produces a new
//! one. The `*_into` variants write into a buffer supplied by the caller.

pub mod error;
pub mod linear;
pub mod matrix;
pub mod pointops;

pub use error::{ColorError, ColorResult};
pub use linear::{
    NegativeClamp, apply_color_matrix, apply_color_matrix_into, apply_color_matrix_with,
    reduce_clamp,
};
pub use matrix::{ColorMatrix, LUMA_WEIGHTS, SEPIA_ROWS};
pub use pointops::{
    brightness, brightness_into, intensity, intensity_into, max_value, max_value_into,
};
