use ndarray::Array2;

use crate::error::{Result, StarIdError};

/// A calibrated pixel raster: non-negative floating-point intensities laid
/// out row-major, `index = y * width + x`. This is the boundary type the
/// image-container decoder (external collaborator) hands to the core.
#[derive(Clone, Debug)]
pub struct Raster {
    data: Array2<f64>,
}

impl Raster {
    /// Build a raster from a row-major pixel buffer. Fails if `width` or
    /// `height` is zero, per the image provider contract (a zero width
    /// signals decoder failure upstream).
    pub fn new(width: usize, height: usize, pixels: Vec<f64>) -> Result<Self> {
        if width == 0 || height == 0 || pixels.len() != width * height {
            return Err(StarIdError::InvalidDimensions { width, height });
        }
        let data = Array2::from_shape_vec((height, width), pixels)
            .map_err(|_| StarIdError::InvalidDimensions { width, height })?;
        Ok(Self { data })
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.data[[y, x]]
    }

    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }
}
