//! pixedit-transform - Geometric transformations
//!
//! Horizontal and vertical mirror flips of a [`Pix`](pixedit_core::Pix).

mod error;
pub mod flip;

pub use error::{TransformError, TransformResult};
pub use flip::{flip_lr, flip_lr_into, flip_tb, flip_tb_into};
