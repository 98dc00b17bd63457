//! pixedit - Named-image store and pixel transform engine
//!
//! # Overview
//!
//! pixedit holds a collection of named RGB images and derives new images
//! from them:
//!
//! - Color transforms: channel visualization, luma, sepia, custom
//!   greyscale, arbitrary 3x3 matrices, max-value, intensity, brightness
//! - Convolution: 3x3 blur and 5x5 sharpen with edge-cropped kernels
//! - Geometric: horizontal and vertical flips
//! - I/O: ASCII PPM (P3), PNG, JPEG and BMP chosen by file extension
//!
//! # Example
//!
//! ```
//! use pixedit::{ImageStore, Pix};
//!
//! let mut store = ImageStore::new();
//! store.insert("black", Pix::new(8, 8).unwrap()).unwrap();
//! store.brightness("black", "grey", 128).unwrap();
//!
//! let grey = store.get("grey").unwrap();
//! assert_eq!(grey.get_rgb(3, 3), Some((128, 128, 128)));
//! ```

mod error;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::{ImageStore, SharedImageStore, StoreOptions, validate_name};

// Re-export core types (primary data structures used everywhere)
pub use pixedit_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pixedit_color as color_ops;
pub use pixedit_filter as filter;
pub use pixedit_io as io;
pub use pixedit_transform as transform;

pub use pixedit_color::{ColorMatrix, NegativeClamp};
pub use pixedit_filter::Kernel;
pub use pixedit_io::EncodePolicy;
