//! Convolution kernels
//!
//! A [`Kernel`] is a rectangular matrix of `f64` weights with odd width and
//! odd height, so that it has a unique center cell (its origin).

use crate::{FilterError, FilterResult};

/// A 2D convolution kernel
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Width of the kernel
    width: u32,
    /// Height of the kernel
    height: u32,
    /// Kernel data (row-major order)
    data: Vec<f64>,
}

fn check_dims(width: u32, height: u32) -> FilterResult<()> {
    if width == 0 || height == 0 {
        return Err(FilterError::InvalidKernel(format!(
            "kernel dimensions must be positive, got {}x{}",
            width, height
        )));
    }
    if width % 2 == 0 || height % 2 == 0 {
        return Err(FilterError::InvalidKernel(format!(
            "kernel dimensions must be odd, got {}x{}",
            width, height
        )));
    }
    Ok(())
}

impl Kernel {
    /// Create a kernel from row-major values.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if either dimension is zero or
    /// even, or if `data` does not hold exactly `width * height` values.
    pub fn from_slice(width: u32, height: u32, data: &[f64]) -> FilterResult<Self> {
        check_dims(width, height)?;
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(FilterError::InvalidKernel(format!(
                "expected {} values for a {}x{} kernel, got {}",
                expected,
                width,
                height,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data: data.to_vec(),
        })
    }

    /// Create a kernel from its rows; every row must have the same length.
    ///
    /// ```
    /// use pixedit_filter::Kernel;
    ///
    /// let k = Kernel::from_rows(&[[0.0, 1.0, 0.0]]).unwrap();
    /// assert_eq!((k.width(), k.height()), (3, 1));
    /// assert!(Kernel::from_rows(&[vec![1.0, 2.0]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> FilterResult<Self> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if rows.iter().any(|r| r.as_ref().len() != width) {
            return Err(FilterError::InvalidKernel("ragged kernel rows".to_string()));
        }
        let data: Vec<f64> = rows.iter().flat_map(|r| r.as_ref().iter().copied()).collect();
        Self::from_slice(width as u32, rows.len() as u32, &data)
    }

    /// The 3x3 blur kernel.
    ///
    /// ```text
    /// 1/16 1/8 1/16
    /// 1/8  1/4 1/8
    /// 1/16 1/8 1/16
    /// ```
    pub fn blur() -> Self {
        let c = 1.0 / 16.0;
        let e = 1.0 / 8.0;
        Self {
            width: 3,
            height: 3,
            data: vec![c, e, c, e, 0.25, e, c, e, c],
        }
    }

    /// The 5x5 sharpen kernel: outer ring `-1/8`, inner ring `1/4`,
    /// center `1`.
    pub fn sharpen() -> Self {
        let mut data = vec![-0.125; 25];
        for y in 1..4 {
            for x in 1..4 {
                data[y * 5 + x] = 0.25;
            }
        }
        data[12] = 1.0;
        Self {
            width: 5,
            height: 5,
            data,
        }
    }

    /// Get the kernel width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the kernel height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the center X coordinate.
    #[inline]
    pub fn center_x(&self) -> u32 {
        (self.width - 1) / 2
    }

    /// Get the center Y coordinate.
    #[inline]
    pub fn center_y(&self) -> u32 {
        (self.height - 1) / 2
    }

    /// Get the kernel data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Get a value at (x, y).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y * self.width + x) as usize])
    }

    /// Get the sum of all kernel values.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }
}
