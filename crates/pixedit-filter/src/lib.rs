//! pixedit-filter - Convolution filtering
//!
//! - [`Kernel`]: odd-sized weight matrix, with the fixed blur and sharpen
//!   kernels
//! - [`convolve_channel`]: edge-cropped convolution of a single channel
//! - [`convolve_rgb`], [`gaussian_blur`], [`sharpen`]: the same kernel
//!   applied to R, G and B in turn

pub mod convolve;
mod error;
pub mod kernel;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;

pub use convolve::{
    convolve_channel, convolve_channel_into, convolve_rgb, convolve_rgb_into, gaussian_blur,
    sharpen,
};
